//! Normalized keystrokes
//!
//! Hosts map physical keys, clicks and DOM ids to [`Key`] values; the
//! evaluator only ever sees these.

use std::str::FromStr;

use crate::core::{CalcError, CalcResult, Operator};

/// Keystrokes that build the operand text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputToken {
    /// A digit character `'0'..='9'`
    Digit(char),
    /// The decimal point
    Decimal,
    /// Sign toggle
    Sign,
}

/// A single calculator keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Sign toggle
    Sign,
    /// Binary operator
    Operator(Operator),
    /// Evaluate the running calculation
    Equals,
    /// Reset everything
    Clear,
}

impl Key {
    /// Parses a host token: `0`-`9`, `.`, `sign`, `+ - * /`, `=`, `clear`
    pub fn parse(token: &str) -> CalcResult<Self> {
        let key = match token {
            "." => Self::Decimal,
            "sign" => Self::Sign,
            "=" => Self::Equals,
            "clear" => Self::Clear,
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Self::Digit(c as u8 - b'0'),
                    (Some(c), None) => Operator::from_symbol(c)
                        .map(Self::Operator)
                        .ok_or_else(|| CalcError::UnknownKey(token.to_string()))?,
                    _ => return Err(CalcError::UnknownKey(token.to_string())),
                }
            }
        };
        Ok(key)
    }

    /// Parses a whitespace separated keystroke script.
    ///
    /// Runs of digits and decimal points expand to one key per character, so
    /// `"12.5 + 3 ="` is seven keystrokes.
    pub fn parse_script(script: &str) -> CalcResult<Vec<Self>> {
        let mut keys = Vec::new();
        for word in script.split_whitespace() {
            if word.chars().all(|c| c.is_ascii_digit() || c == '.') {
                for c in word.chars() {
                    keys.push(Self::parse(c.encode_utf8(&mut [0; 4]))?);
                }
            } else {
                keys.push(Self::parse(word)?);
            }
        }
        Ok(keys)
    }

    /// Host token for this key
    #[must_use]
    pub fn token(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Sign => "sign".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "clear".to_string(),
        }
    }

    /// Keypad label for this key
    #[must_use]
    pub fn label(&self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10).unwrap_or('?'),
            Self::Decimal => '.',
            Self::Sign => '±',
            Self::Operator(op) => op.symbol(),
            Self::Equals => '=',
            Self::Clear => 'C',
        }
    }

    /// Returns the operand-building token, if this key builds the operand
    #[must_use]
    pub fn input_token(&self) -> Option<InputToken> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10).map(InputToken::Digit),
            Self::Decimal => Some(InputToken::Decimal),
            Self::Sign => Some(InputToken::Sign),
            Self::Operator(_) | Self::Equals | Self::Clear => None,
        }
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.token())
    }
}
