//! Property-based tests for the keystroke evaluator

use desk_calculator::config::DisplayConfig;
use desk_calculator::core::{canonical_text, format_display, round, Evaluator, Key, Operator};
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        4 => digit_strategy().prop_map(Key::Digit),
        1 => Just(Key::Decimal),
        1 => Just(Key::Sign),
        2 => operator_strategy().prop_map(Key::Operator),
        1 => Just(Key::Equals),
        1 => Just(Key::Clear),
    ]
}

/// Operand text without redundant leading zeros: first digit 1-9
fn operand_strategy() -> impl Strategy<Value = String> {
    (1u8..=9u8, prop::collection::vec(digit_strategy(), 0..=8)).prop_map(|(first, rest)| {
        std::iter::once(first)
            .chain(rest)
            .map(|d| char::from(b'0' + d))
            .collect()
    })
}

fn press_text(eval: &mut Evaluator, text: &str) {
    for c in text.chars() {
        let token = c.to_string();
        eval.press(Key::parse(&token).unwrap());
    }
}

fn digit_count(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}

// ===== Rounding =====

proptest! {
    /// Rounding twice changes nothing
    #[test]
    fn prop_round_idempotent(x in -1e15f64..1e15f64) {
        let once = round(x);
        prop_assert_eq!(round(once), once);
    }

    /// Idempotence holds across the whole normal range too
    #[test]
    fn prop_round_idempotent_normal(x in proptest::num::f64::NORMAL) {
        let once = round(x);
        prop_assert_eq!(round(once), once);
    }

    /// Integers are never touched
    #[test]
    fn prop_round_keeps_integers(n in -1_000_000_000_000i64..1_000_000_000_000i64) {
        let x = n as f64;
        prop_assert_eq!(round(x), x);
    }

    /// Rounded values fit the display budget after the point
    #[test]
    fn prop_round_bounds_fraction(x in 0.001f64..999_999.0) {
        let text = canonical_text(round(x));
        if let Some((int, frac)) = text.split_once('.') {
            prop_assert!(int.len() + frac.len() <= 9, "{} too long", text);
        }
    }
}

// ===== Input buffer =====

proptest! {
    /// Typed digits show exactly as typed
    #[test]
    fn prop_digit_echo(operand in operand_strategy()) {
        let mut eval = Evaluator::new();
        press_text(&mut eval, &operand);
        prop_assert_eq!(eval.input(), operand.as_str());
    }

    /// Toggling the sign twice restores the operand
    #[test]
    fn prop_sign_involution(operand in operand_strategy(), decimal in any::<bool>()) {
        let mut eval = Evaluator::new();
        press_text(&mut eval, &operand);
        if decimal {
            eval.press(Key::Decimal);
        }
        let before = eval.input().to_string();
        eval.press(Key::Sign);
        prop_assert_eq!(eval.input(), format!("-{before}"));
        eval.press(Key::Sign);
        prop_assert_eq!(eval.input(), before);
    }

    /// The operand never exceeds nine digits or holds two points
    #[test]
    fn prop_max_length(keys in prop::collection::vec(
        prop_oneof![
            8 => digit_strategy().prop_map(Key::Digit),
            1 => Just(Key::Decimal),
            1 => Just(Key::Sign),
        ],
        0..40,
    )) {
        let mut eval = Evaluator::new();
        for key in keys {
            eval.press(key);
            let input = eval.input();
            prop_assert!(digit_count(input) <= 9, "{} too long", input);
            prop_assert!(input.matches('.').count() <= 1);
        }
    }
}

// ===== Whole sessions =====

proptest! {
    /// Any keystroke sequence leaves a renderable display
    #[test]
    fn prop_any_sequence_renders(keys in prop::collection::vec(key_strategy(), 0..60)) {
        let config = DisplayConfig::default();
        let mut eval = Evaluator::new();
        for key in keys {
            let shown = eval.press(key).render(&config);
            prop_assert!(!shown.is_empty());
        }
    }

    /// Clear always returns to the initial state
    #[test]
    fn prop_clear_resets(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut eval = Evaluator::new();
        for key in keys {
            eval.press(key);
        }
        eval.press(Key::Clear);
        prop_assert_eq!(eval, Evaluator::new());
    }

    /// A single binary operation matches rounded float arithmetic
    #[test]
    fn prop_single_operation(
        a in operand_strategy(),
        op in operator_strategy(),
        b in operand_strategy(),
    ) {
        let mut eval = Evaluator::new();
        press_text(&mut eval, &a);
        eval.press(Key::Operator(op));
        press_text(&mut eval, &b);
        let total = eval.press(Key::Equals).value();

        let expected = round(op.apply(a.parse().unwrap(), b.parse().unwrap()));
        prop_assert_eq!(total, expected);
    }
}

// ===== Display thresholds =====

proptest! {
    /// In-range magnitudes render positionally
    #[test]
    fn prop_in_range_positional(v in 0.000_001f64..=999_999_999.0, negative in any::<bool>()) {
        let v = if negative { -v } else { v };
        let shown = format_display(&canonical_text(v), &DisplayConfig::default());
        prop_assert!(!shown.contains('e'), "{} -> {}", v, shown);
    }

    /// Large magnitudes render exponentially
    #[test]
    fn prop_large_exponential(v in 1_000_000_000f64..1e300) {
        let shown = format_display(&canonical_text(v), &DisplayConfig::default());
        prop_assert!(shown.contains('e'), "{} -> {}", v, shown);
        prop_assert!(!shown.contains("e+"));
    }

    /// Tiny nonzero magnitudes render exponentially
    #[test]
    fn prop_tiny_exponential(v in 1e-300f64..0.000_000_999) {
        let shown = format_display(&canonical_text(v), &DisplayConfig::default());
        prop_assert!(shown.contains("e-"), "{} -> {}", v, shown);
    }
}
