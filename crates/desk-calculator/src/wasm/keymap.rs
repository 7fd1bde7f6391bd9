//! Browser key and button mapping
//!
//! Keyboard events arrive as `KeyboardEvent.key` names and clicks as keypad
//! element ids. Both resolve to [`Key`] here so the binding stays thin.

use crate::core::{Key, Operator};

const DIGIT_IDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Maps a `KeyboardEvent.key` name to a keystroke
///
/// Numpad operator names (`Add`, `Divide`, ...) and the legacy `Del` name
/// are accepted alongside the plain characters.
#[must_use]
pub fn key_from_keyboard(name: &str) -> Option<Key> {
    let key = match name {
        "Enter" | "=" => Key::Equals,
        "Delete" | "Del" | "Escape" => Key::Clear,
        "Add" => Key::Operator(Operator::Add),
        "Subtract" => Key::Operator(Operator::Subtract),
        "Multiply" => Key::Operator(Operator::Multiply),
        "Divide" => Key::Operator(Operator::Divide),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_digit() || "+-*/.".contains(c) => {
                    Key::parse(name).ok()?
                }
                _ => return None,
            }
        }
    };
    Some(key)
}

/// Maps a keypad element id to a keystroke
#[must_use]
pub fn key_from_element_id(id: &str) -> Option<Key> {
    if let Some(d) = DIGIT_IDS.iter().position(|name| *name == id) {
        return Some(Key::Digit(d as u8));
    }
    let key = match id {
        "decimal" => Key::Decimal,
        "sign" => Key::Sign,
        "add" => Key::Operator(Operator::Add),
        "subtract" => Key::Operator(Operator::Subtract),
        "multiply" => Key::Operator(Operator::Multiply),
        "divide" => Key::Operator(Operator::Divide),
        "equals" => Key::Equals,
        "clear" => Key::Clear,
        _ => return None,
    };
    Some(key)
}

/// Keypad element id of a keystroke
#[must_use]
pub fn element_id(key: Key) -> &'static str {
    match key {
        Key::Digit(d) => DIGIT_IDS.get(usize::from(d)).copied().unwrap_or("zero"),
        Key::Decimal => "decimal",
        Key::Sign => "sign",
        Key::Operator(Operator::Add) => "add",
        Key::Operator(Operator::Subtract) => "subtract",
        Key::Operator(Operator::Multiply) => "multiply",
        Key::Operator(Operator::Divide) => "divide",
        Key::Equals => "equals",
        Key::Clear => "clear",
    }
}
