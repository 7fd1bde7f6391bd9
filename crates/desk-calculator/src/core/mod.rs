//! Keystroke evaluation core
//!
//! A single [`Evaluator`] owns all calculator state. Every keystroke is a
//! plain method call that mutates that state in place and yields one
//! [`Readout`] for the display.

pub mod evaluator;
pub mod expression;
pub mod format;
pub mod input;
pub mod keys;
pub mod number;
mod operations;

pub use evaluator::{Evaluator, Readout, Selection};
pub use expression::PendingExpression;
pub use format::format_display;
pub use input::InputBuffer;
pub use keys::{InputToken, Key};
pub use number::{canonical_text, coerce, round};
pub use operations::{Operator, Tier};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised at the edges of the calculator.
///
/// The evaluation core itself never fails: arithmetic faults surface as
/// non-finite values and render as the display's error text.
#[derive(Debug, Error)]
pub enum CalcError {
    /// A host token with no keypad mapping
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),

    /// Configuration values are out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file is not valid JSON for the schema
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Logging could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// File or terminal IO failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
