//! Keyboard input handling
//!
//! Maps crossterm key events onto calculator keystrokes. Anything without a
//! keypad meaning maps to [`KeyAction::None`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Key, Operator};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a keystroke to the calculator
    Press(Key),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::map_char(c),
            KeyCode::Enter => KeyAction::Press(Key::Equals),
            KeyCode::Delete | KeyCode::Esc => KeyAction::Press(Key::Clear),
            _ => KeyAction::None,
        }
    }

    /// Maps a typed character to an action
    #[must_use]
    pub fn map_char(c: char) -> KeyAction {
        if let Some(d) = c.to_digit(10) {
            return KeyAction::Press(Key::Digit(d as u8));
        }
        if let Some(op) = Operator::from_symbol(c) {
            return KeyAction::Press(Key::Operator(op));
        }
        match c {
            '.' => KeyAction::Press(Key::Decimal),
            '=' => KeyAction::Press(Key::Equals),
            'c' | 'C' => KeyAction::Press(Key::Clear),
            's' | 'n' => KeyAction::Press(Key::Sign),
            'q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Keypad keys =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Press(Key::Digit(i as u8))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for op in Operator::ALL {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(op.symbol()))),
                KeyAction::Press(Key::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_decimal_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Press(Key::Decimal)
        );
    }

    #[test]
    fn test_handle_equals() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Press(Key::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Press(Key::Equals)
        );
    }

    #[test]
    fn test_handle_clear() {
        let handler = InputHandler::new();
        for code in [KeyCode::Delete, KeyCode::Esc, KeyCode::Char('c')] {
            assert_eq!(
                handler.handle_key(key_event(code)),
                KeyAction::Press(Key::Clear)
            );
        }
    }

    #[test]
    fn test_handle_sign() {
        let handler = InputHandler::new();
        for c in ['s', 'n'] {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Press(Key::Sign)
            );
        }
    }

    // ===== Quit =====

    #[test]
    fn test_handle_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    // ===== Ignored keys =====

    #[test]
    fn test_unmapped_keys_ignored() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::Backspace,
            KeyCode::Left,
            KeyCode::Up,
            KeyCode::Tab,
            KeyCode::Char('x'),
            KeyCode::Char('%'),
            KeyCode::Char('('),
        ] {
            assert_eq!(handler.handle_key(key_event(code)), KeyAction::None);
        }
    }

    #[test]
    fn test_ctrl_combinations_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('5'))),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            KeyAction::None
        );
    }
}
