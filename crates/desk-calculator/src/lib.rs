//! Desk Calculator - keystroke evaluation engine
//!
//! A pocket-calculator model driven one keystroke at a time. Operators
//! chain with tiered precedence (`*` above `/` above `+ -`), every
//! intermediate result is rounded to fit a nine-digit display, and
//! arithmetic faults surface on the display instead of as errors.
//!
//! The [`core`] module holds the engine; [`tui`] and [`wasm`] are thin
//! hosts around it, and [`driver`] runs the same scenarios against each.
//!
//! # Example
//!
//! ```rust
//! use desk_calculator::prelude::*;
//!
//! let mut eval = Evaluator::new();
//! for key in Key::parse_script("2 + 3 * 4").unwrap() {
//!     eval.press(key);
//! }
//! let total = eval.press(Key::Equals);
//! assert_eq!(total.text(), "14");
//!
//! // Faults show as the error indicator
//! let mut eval = Evaluator::new();
//! for key in Key::parse_script("1 / 0 =").unwrap() {
//!     eval.press(key);
//! }
//! let readout = Readout::Input(eval.input().to_string());
//! assert_eq!(readout.render(&DisplayConfig::default()), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod logging;
#[cfg(feature = "tui")]
pub mod tui;

/// Browser key mapping, plus the `wasm-bindgen` surface with the `wasm` feature
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, DisplayConfig};
    pub use crate::core::{
        format_display, round, CalcError, CalcResult, Evaluator, Key, Operator, Readout,
        Selection,
    };
    pub use crate::driver::{CalculatorDriver, EvaluatorDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    #[cfg(feature = "wasm")]
    pub use crate::wasm::WebCalculator;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn total(script: &str) -> String {
        let mut driver = EvaluatorDriver::new();
        driver.enter(script).unwrap();
        driver.display()
    }

    #[test]
    fn test_prelude_imports() {
        let mut eval = Evaluator::new();
        eval.press(Key::Digit(2));
        eval.press(Key::Operator(Operator::Add));
        eval.press(Key::Digit(3));
        assert_eq!(eval.press(Key::Equals).value(), 5.0);
    }

    #[test]
    fn test_all_operations() {
        assert_eq!(total("10 + 5 ="), "15");
        assert_eq!(total("10 - 3 ="), "7");
        assert_eq!(total("6 * 7 ="), "42");
        assert_eq!(total("20 / 4 ="), "5");
    }

    #[test]
    fn test_precedence_tiers() {
        assert_eq!(total("2 + 3 * 4 ="), "14");
        assert_eq!(total("8 - 6 / 3 ="), "6");
        assert_eq!(total("9 / 3 * 2 ="), "1.5");
    }

    #[test]
    fn test_rounding_contract() {
        assert_eq!(round(0.1 + 0.2), 0.3);
        assert_eq!(total("2 / 3 ="), "0.66666667");
    }

    #[test]
    fn test_error_indicator() {
        assert_eq!(total("1 / 0 ="), "Error");
        assert_eq!(
            format_display("NaN", &DisplayConfig::default()),
            "Error"
        );
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!(Key::parse("^"), Err(CalcError::UnknownKey(_))));
    }

    #[test]
    fn test_config_default_is_valid() {
        assert!(CalculatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_selection_after_total() {
        let mut eval = Evaluator::new();
        eval.press(Key::Digit(1));
        eval.press(Key::Equals);
        assert_eq!(eval.selection(), Selection::Total);
    }
}
