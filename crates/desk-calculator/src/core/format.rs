//! Display formatting
//!
//! Turns readout text into what the calculator screen shows: an error
//! indicator for non-finite values, trimmed exponential notation outside
//! the display range, and grouped integer digits everywhere else.

use crate::config::DisplayConfig;
use crate::core::number::{coerce, exponential_digits};
use crate::core::Readout;

/// Formats readout text for the display
#[must_use]
pub fn format_display(text: &str, config: &DisplayConfig) -> String {
    let value = coerce(text);
    if !value.is_finite() {
        return config.error_text.clone();
    }

    let magnitude = value.abs();
    let out_of_range = magnitude > config.upper_threshold
        || (magnitude > 0.0 && magnitude < config.lower_threshold);
    if out_of_range {
        exponential(value, config.exponent_digits)
    } else {
        group_digits(text.trim(), config.group_separator)
    }
}

impl Readout {
    /// Formats the readout for the display
    #[must_use]
    pub fn render(&self, config: &DisplayConfig) -> String {
        format_display(&self.text(), config)
    }
}

/// `1.23457e12`, `1e-7`: trailing zeros and a bare point trimmed
fn exponential(value: f64, digits: usize) -> String {
    let (mantissa, exponent) = exponential_digits(value, digits);
    let sign = if value < 0.0 { "-" } else { "" };
    let (lead, rest) = mantissa.split_at(1);
    let rest = rest.trim_end_matches('0');
    if rest.is_empty() {
        format!("{sign}{lead}e{exponent}")
    } else {
        format!("{sign}{lead}.{rest}e{exponent}")
    }
}

/// Inserts separators into the integer part only
fn group_digits(text: &str, separator: char) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(text.len() + int.len() / 3);
    grouped.push_str(sign);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    if let Some(frac) = frac {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
