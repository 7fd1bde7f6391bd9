//! Number text and rounding
//!
//! The calculator stores operands as text and results as `f64`. This module
//! converts between the two and canonicalizes results so binary floating
//! point artifacts (`0.1 + 0.2 = 0.30000000000000004`) never reach the
//! display.
//!
//! Canonical text is the shortest round-trip decimal form, positional for
//! decimal exponents in `[-6, 21)` and exponential (`1.5e+21`, `1e-7`)
//! outside that range.

/// Significant places kept by [`round`] to the right of the first digit slot
const ROUND_PLACES: i32 = 9;

/// Largest decimal-point position written positionally
const MAX_POSITIONAL: i32 = 21;

/// Smallest decimal-point position written positionally
const MIN_POSITIONAL: i32 = -6;

/// Shortest decimal digits of a positive finite value.
///
/// `digits` carries no leading or trailing zeros and the value equals
/// `0.digits * 10^point`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Decimal {
    digits: String,
    point: i32,
}

impl Decimal {
    fn of(magnitude: f64) -> Self {
        // LowerExp prints the shortest round-trip mantissa: "1.2345e-7"
        let text = format!("{magnitude:e}");
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
        let digits = digits.trim_end_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };
        Self {
            digits: digits.to_string(),
            point: exponent + 1,
        }
    }

    fn layout(&self) -> String {
        let digits = self.digits.as_str();
        let len = digits.len() as i32;
        let point = self.point;

        if len <= point && point <= MAX_POSITIONAL {
            format!("{digits}{}", "0".repeat((point - len) as usize))
        } else if 0 < point && point <= MAX_POSITIONAL {
            let (int, frac) = digits.split_at(point as usize);
            format!("{int}.{frac}")
        } else if MIN_POSITIONAL < point && point <= 0 {
            format!("0.{}{digits}", "0".repeat((-point) as usize))
        } else {
            let exponent = point - 1;
            let sign = if exponent < 0 { '-' } else { '+' };
            let (lead, rest) = digits.split_at(1);
            if rest.is_empty() {
                format!("{lead}e{sign}{}", exponent.abs())
            } else {
                format!("{lead}.{rest}e{sign}{}", exponent.abs())
            }
        }
    }
}

/// Canonical text of a number.
///
/// `-0` prints as `0`; non-finite values print as `NaN`, `Infinity` and
/// `-Infinity`.
#[must_use]
pub fn canonical_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let body = Decimal::of(value.abs()).layout();
    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// Numeric coercion of operand text.
///
/// Empty text is zero; text that is not a number is NaN.
#[must_use]
pub fn coerce(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Rounds a computed result to the calculator's display precision.
///
/// Values whose canonical text is exponential, non-finite values and
/// integers pass through unchanged. Other values keep `9 - p` decimal
/// places, where `p` is the position of the decimal point in the text of
/// the magnitude. Rounding works on the shortest decimal digits, so no
/// binary noise is reintroduced, and halves round toward positive infinity.
#[must_use]
pub fn round(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let magnitude = value.abs();
    let text = canonical_text(magnitude);
    if text.contains('e') {
        return value;
    }
    let Some(dot) = text.find('.') else {
        return value;
    };

    let places = ROUND_PLACES - dot as i32;
    let decimal = Decimal::of(magnitude);
    let scaled = shift_round(&decimal, places, value.is_sign_negative());
    if scaled == 0 {
        return 0.0;
    }

    let rounded: f64 = format!("{scaled}e{}", -places)
        .parse()
        .unwrap_or(magnitude);
    if value < 0.0 {
        -rounded
    } else {
        rounded
    }
}

/// Mantissa digits and decimal exponent of a magnitude rounded to
/// `fraction_digits` places after its leading digit.
///
/// Rounds the shortest decimal digits with halves going up, so
/// `1000005000` at five places gives `("100001", 9)`. The mantissa always
/// holds `fraction_digits + 1` digits.
pub(crate) fn exponential_digits(magnitude: f64, fraction_digits: usize) -> (String, i32) {
    let decimal = Decimal::of(magnitude.abs());
    let mut exponent = decimal.point - 1;
    let keep = fraction_digits + 1;
    let digits = decimal.digits.as_bytes();

    let mut kept: Vec<u8> = digits.iter().copied().take(keep).collect();
    kept.resize(keep, b'0');

    if digits.get(keep).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        // 9.99999... rolled over to 10.0000
        if carry {
            kept.insert(0, b'1');
            kept.truncate(keep);
            exponent += 1;
        }
    }

    (kept.into_iter().map(char::from).collect(), exponent)
}

/// Integer nearest to `decimal * 10^places`.
///
/// Ties go up for positive values and toward zero for negative ones, which
/// keeps rounding monotone toward positive infinity across the sign.
fn shift_round(decimal: &Decimal, places: i32, negative: bool) -> u128 {
    let digits = decimal.digits.as_bytes();
    let whole = decimal.point + places;

    let (int, frac): (&[u8], &[u8]) = if whole <= 0 {
        (&[], digits)
    } else if whole as usize >= digits.len() {
        (digits, &[])
    } else {
        digits.split_at(whole as usize)
    };

    let mut scaled: u128 = int
        .iter()
        .fold(0, |acc, d| acc * 10 + u128::from(d - b'0'));
    if whole > 0 && whole as usize > digits.len() {
        scaled *= 10u128.pow(whole as u32 - digits.len() as u32);
    }

    // Leading zeros between the shifted point and the first digit
    let first = if whole < 0 { b'0' } else { frac.first().copied().unwrap_or(b'0') };
    let tail_nonzero = if whole < 0 {
        true
    } else {
        frac.iter().skip(1).any(|d| *d != b'0')
    };

    let round_up = if negative {
        first > b'5' || (first == b'5' && tail_nonzero)
    } else {
        first >= b'5'
    };
    if round_up {
        scaled += 1;
    }
    scaled
}
