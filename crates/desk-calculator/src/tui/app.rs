//! TUI application state

use ratatui::layout::Rect;
use tracing::debug;

use crate::config::DisplayConfig;
use crate::core::{Evaluator, Key, Readout, Selection};

use super::input::KeyAction;
use super::keypad::Keypad;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// Keystroke evaluator
    evaluator: Evaluator,
    /// Display rendering settings
    config: DisplayConfig,
    /// Formatted display text
    display: String,
    /// Keypad with highlight and outline state
    keypad: Keypad,
    /// Most recent keystroke
    last_key: Option<Key>,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a calculator app with default display settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DisplayConfig::default())
    }

    /// Creates a calculator app with custom display settings
    #[must_use]
    pub fn with_config(config: DisplayConfig) -> Self {
        let evaluator = Evaluator::new();
        let display = Readout::Input(evaluator.input().to_string()).render(&config);
        Self {
            evaluator,
            config,
            display,
            keypad: Keypad::new(),
            last_key: None,
            should_quit: false,
        }
    }

    /// Formatted display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Most recent operator keystroke
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.evaluator.selection()
    }

    /// Running subtotal
    #[must_use]
    pub fn subtotal(&self) -> Option<f64> {
        self.evaluator.subtotal()
    }

    /// The underlying evaluator
    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Keypad state for rendering and hit testing
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Most recent keystroke
    #[must_use]
    pub fn last_key(&self) -> Option<Key> {
        self.last_key
    }

    /// Display settings
    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Sends a keystroke to the evaluator and refreshes the display
    pub fn press(&mut self, key: Key) {
        let readout = self.evaluator.press(key);
        self.display = readout.render(&self.config);
        self.last_key = Some(key);
        self.keypad.highlight(key);
        self.keypad.outline(self.evaluator.selection());
        debug!(key = %key, display = %self.display, "display updated");
    }

    /// Presses the keypad button under a mouse click, if any
    pub fn click(&mut self, area: Rect, x: u16, y: u16) -> Option<Key> {
        let key = self.keypad.key_at(area, x, y)?;
        self.press(key);
        Some(key)
    }

    /// Applies a keyboard action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(key) => self.press(key),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Status line: pending operator and subtotal
    #[must_use]
    pub fn status(&self) -> String {
        let subtotal = self
            .evaluator
            .subtotal()
            .map_or_else(String::new, |v| Readout::Subtotal(v).render(&self.config));
        match (self.selection(), subtotal.is_empty()) {
            (Selection::Empty, true) => "Ready".to_string(),
            (selection, true) => selection.symbol(),
            (Selection::Empty, false) => subtotal,
            (selection, false) => format!("{subtotal} {}", selection.symbol()),
        }
    }
}
