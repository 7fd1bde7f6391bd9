//! Unified calculator driver
//!
//! Write the keystroke scenario once, run it against every host. The core
//! [`EvaluatorDriver`] and the terminal [`TuiDriver`] both implement
//! [`CalculatorDriver`], and the `verify_*` functions below assert the
//! calculator's observable behavior through that trait alone.

use crate::config::DisplayConfig;
use crate::core::{CalcResult, Evaluator, Key, Readout};

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use desk_calculator::driver::{verify_precedence, CalculatorDriver, EvaluatorDriver};
///
/// let mut driver = EvaluatorDriver::new();
/// driver.enter("2 + 3 * 4 =").unwrap();
/// assert_eq!(driver.display(), "14");
/// driver.reset();
/// verify_precedence(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Sends one keystroke
    fn press(&mut self, key: Key);

    /// Formatted display after the last keystroke
    fn display(&self) -> String;

    /// Returns the calculator to its initial state
    fn reset(&mut self);

    /// Sends keystrokes in order
    fn press_all(&mut self, keys: &[Key]) {
        for key in keys {
            self.press(*key);
        }
    }

    /// Sends a keystroke script such as `"12.5 + 3 ="`
    fn enter(&mut self, script: &str) -> CalcResult<()> {
        let keys = Key::parse_script(script)?;
        self.press_all(&keys);
        Ok(())
    }
}

/// Driver over a bare [`Evaluator`]
#[derive(Debug, Clone)]
pub struct EvaluatorDriver {
    evaluator: Evaluator,
    config: DisplayConfig,
    display: String,
}

impl Default for EvaluatorDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluatorDriver {
    /// Creates a driver with default display settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DisplayConfig::default())
    }

    /// Creates a driver with custom display settings
    #[must_use]
    pub fn with_config(config: DisplayConfig) -> Self {
        let evaluator = Evaluator::new();
        let display = Readout::Input(evaluator.input().to_string()).render(&config);
        Self {
            evaluator,
            config,
            display,
        }
    }

    /// The underlying evaluator
    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }
}

impl CalculatorDriver for EvaluatorDriver {
    fn press(&mut self, key: Key) {
        self.display = self.evaluator.press(key).render(&self.config);
    }

    fn display(&self) -> String {
        self.display.clone()
    }

    fn reset(&mut self) {
        *self = Self::with_config(self.config.clone());
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::Key;
    use crate::tui::CalculatorApp;

    /// TUI-specific driver wrapping the calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, key: Key) {
            self.app.press(key);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn reset(&mut self) {
            self.app = CalculatorApp::with_config(self.app.config().clone());
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Suites =====
// These run against ANY CalculatorDriver implementation.
// Scripts are fixed and known to parse.

fn check<D: CalculatorDriver>(driver: &mut D, script: &str, expected: &str) {
    driver.reset();
    assert!(driver.enter(script).is_ok(), "script {script:?} did not parse");
    assert_eq!(driver.display(), expected, "after {script:?}");
}

/// Verifies the four operators
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "2 + 3 =", "5");
    check(driver, "10 - 4 =", "6");
    check(driver, "6 * 7 =", "42");
    check(driver, "20 / 4 =", "5");
    check(driver, "0.1 + 0.2 =", "0.3");
}

/// Verifies tiered precedence
pub fn verify_precedence<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "2 + 3 * 4 =", "14");
    check(driver, "2 * 3 + 4 =", "10");
    check(driver, "10 - 6 / 2 =", "7");
    check(driver, "1 + 2 * 3 - 4 =", "3");
    // Division binds looser than multiplication
    check(driver, "9 / 3 * 2 =", "1.5");
}

/// Verifies subtotals shown while chaining operators
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "2 + 3 *", "3");
    check(driver, "2 + 3 * 4 +", "14");
    check(driver, "5 * 5 = + 1 =", "26");
    // A second operator replaces the first
    check(driver, "8 + - 3 =", "5");
}

/// Verifies that entry after `=` starts a new calculation
pub fn verify_clear_after_equals<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "2 + 2 = 7", "7");
    check(driver, "2 + 2 = 7 + 1 =", "8");
    check(driver, "3 * 3 = =", "9");
}

/// Verifies the error indicator and exponential display
pub fn verify_error_display<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "1 / 0 =", "Error");
    check(driver, "0 / 0 =", "Error");
    check(driver, "99999 * 99999 =", "9.9998e9");
    check(driver, "1 / 3 =", "0.33333333");
}

/// Verifies operand entry limits
pub fn verify_input_rules<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "1234567890", "123,456,789");
    check(driver, "1.2.3", "1.23");
    check(driver, "0 0 7", "7");
    check(driver, "5 sign", "-5");
    check(driver, "5 sign sign", "5");
    check(driver, "9 * 9 clear", "0");
}

/// Complete verification suite
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_precedence(driver);
    verify_chaining(driver);
    verify_clear_after_equals(driver);
    verify_error_display(driver);
    verify_input_rules(driver);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, Operator};

    // ===== EvaluatorDriver tests =====

    #[test]
    fn test_evaluator_driver_new() {
        let driver = EvaluatorDriver::new();
        assert_eq!(driver.display(), "0");
        assert_eq!(driver.evaluator(), &Evaluator::new());
    }

    #[test]
    fn test_evaluator_driver_press_all() {
        let mut driver = EvaluatorDriver::new();
        driver.press_all(&[
            Key::Digit(6),
            Key::Operator(Operator::Multiply),
            Key::Digit(7),
            Key::Equals,
        ]);
        assert_eq!(driver.display(), "42");
    }

    #[test]
    fn test_evaluator_driver_reset_keeps_config() {
        let config = DisplayConfig {
            error_text: "E".into(),
            ..DisplayConfig::default()
        };
        let mut driver = EvaluatorDriver::with_config(config);
        driver.enter("1 / 0 =").unwrap();
        assert_eq!(driver.display(), "E");
        driver.reset();
        assert_eq!(driver.display(), "0");
        driver.enter("0 / 0 =").unwrap();
        assert_eq!(driver.display(), "E");
    }

    #[test]
    fn test_enter_rejects_unknown_key() {
        let mut driver = EvaluatorDriver::new();
        let err = driver.enter("2 ^ 3").unwrap_err();
        assert!(matches!(err, CalcError::UnknownKey(k) if k == "^"));
        // Nothing was pressed
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_evaluator_full_suite() {
        let mut driver = EvaluatorDriver::new();
        run_full_suite(&mut driver);
    }

    // ===== TUI Driver tests =====

    #[cfg(feature = "tui")]
    mod tui_tests {
        use super::*;

        #[test]
        fn test_tui_driver_new() {
            let driver = TuiDriver::new();
            assert_eq!(driver.display(), "0");
        }

        #[test]
        fn test_tui_driver_with_app() {
            let mut app = crate::tui::CalculatorApp::new();
            app.press(Key::Digit(3));
            let driver = TuiDriver::with_app(app);
            assert_eq!(driver.display(), "3");
            assert_eq!(driver.app().last_key(), Some(Key::Digit(3)));
        }

        #[test]
        fn test_tui_driver_reset() {
            let mut driver = TuiDriver::new();
            driver.enter("4 + 4 =").unwrap();
            driver.reset();
            assert_eq!(driver.display(), "0");
            assert!(driver.app().last_key().is_none());
        }

        #[test]
        fn test_unified_precedence() {
            verify_precedence(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_chaining() {
            verify_chaining(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_error_display() {
            verify_error_display(&mut TuiDriver::new());
        }

        #[test]
        fn test_full_suite() {
            run_full_suite(&mut TuiDriver::new());
        }

        #[test]
        fn test_drivers_agree() {
            let script = "12.5 * 4 - 7 / 2 sign + 1 =";
            let mut core = EvaluatorDriver::new();
            let mut tui = TuiDriver::new();
            core.enter(script).unwrap();
            tui.enter(script).unwrap();
            assert_eq!(core.display(), tui.display());
        }
    }
}
