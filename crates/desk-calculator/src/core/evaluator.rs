//! Keystroke evaluator with precedence-aware chaining
//!
//! Each precedence tier suspends its left operand in a
//! [`PendingExpression`]. An operator keystroke threads the current input
//! through every tier at or above its own, so `*` never disturbs a
//! suspended `+`, while `=` or a looser operator finally collapses the
//! whole chain.

use tracing::{debug, trace};

use crate::core::number::{canonical_text, coerce, round};
use crate::core::{InputBuffer, InputToken, Key, Operator, PendingExpression, Tier};

/// Most recent operator keystroke
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// No operator pending
    #[default]
    Empty,
    /// An operator awaiting its right operand
    Operator(Operator),
    /// The last keystroke completed a full evaluation
    Total,
}

impl Selection {
    /// Lowest tier evaluated for this selection; `None` after a total
    #[must_use]
    pub const fn tier(&self) -> Option<Tier> {
        match self {
            Self::Empty => Some(Tier::Low),
            Self::Operator(op) => Some(op.tier()),
            Self::Total => None,
        }
    }

    /// Symbol shown for the selection (empty when nothing is selected)
    #[must_use]
    pub fn symbol(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Total => "=".to_string(),
        }
    }
}

/// The single value a keystroke hands to the display
#[derive(Debug, Clone, PartialEq)]
pub enum Readout {
    /// Live operand text
    Input(String),
    /// Freshly computed subtotal
    Subtotal(f64),
}

impl Readout {
    /// Unformatted text of the readout
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Input(text) => text.clone(),
            Self::Subtotal(value) => canonical_text(*value),
        }
    }

    /// Numeric value of the readout
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Input(text) => coerce(text),
            Self::Subtotal(value) => *value,
        }
    }
}

/// Keystroke-driven calculator state.
///
/// Holds the five pieces of calculator state: operand text, selected
/// operator, subtotal and the low/mid/high pending expressions. One
/// evaluator serves one calculation session; independent sessions use
/// independent evaluators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluator {
    input: InputBuffer,
    selection: Selection,
    subtotal: Option<f64>,
    low: PendingExpression,
    mid: PendingExpression,
    high: PendingExpression,
}

impl Evaluator {
    /// Creates an evaluator showing `0` with nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Accessors =====

    /// Operand text
    #[must_use]
    pub fn input(&self) -> &str {
        self.input.text()
    }

    /// Most recent operator keystroke
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Running subtotal, absent until an operator has been applied
    #[must_use]
    pub fn subtotal(&self) -> Option<f64> {
        self.subtotal
    }

    /// Pending expression of a tier
    #[must_use]
    pub fn expression(&self, tier: Tier) -> &PendingExpression {
        match tier {
            Tier::Low => &self.low,
            Tier::Mid => &self.mid,
            Tier::High => &self.high,
        }
    }

    // ===== Driving operations =====

    /// Dispatches one keystroke
    pub fn press(&mut self, key: Key) -> Readout {
        trace!(key = %key, selection = %self.selection.symbol(), input = %self.input, "keystroke");
        match key {
            Key::Digit(d) => self.on_digit(d),
            Key::Decimal => self.on_decimal(),
            Key::Sign => self.on_sign(),
            Key::Operator(op) => self.on_operator(op),
            Key::Equals => self.on_equals(),
            Key::Clear => self.on_clear(),
        }
    }

    /// Digit keystroke; digits above 9 are ignored
    pub fn on_digit(&mut self, digit: u8) -> Readout {
        match Key::Digit(digit).input_token() {
            Some(token) => self.on_input(token),
            None => Readout::Input(self.input.text().to_string()),
        }
    }

    /// Decimal point keystroke
    pub fn on_decimal(&mut self) -> Readout {
        self.on_input(InputToken::Decimal)
    }

    /// Sign toggle keystroke
    pub fn on_sign(&mut self) -> Readout {
        self.on_input(InputToken::Sign)
    }

    /// Operator keystroke.
    ///
    /// The operator is selected before evaluating, so the pending input is
    /// threaded only through tiers at or above the new operator's tier.
    /// Pressing another operator without new input re-evaluates from the
    /// same suspended operands.
    pub fn on_operator(&mut self, operator: Operator) -> Readout {
        self.selection = Selection::Operator(operator);
        Readout::Subtotal(self.commit_subtotal(operator.tier()))
    }

    /// Equals keystroke; repeated presses leave the total unchanged
    pub fn on_equals(&mut self) -> Readout {
        self.evaluate_subtotal();
        self.evaluate_total();
        Readout::Input(self.input.text().to_string())
    }

    /// Resets all state
    pub fn on_clear(&mut self) -> Readout {
        debug!("clear");
        *self = Self::new();
        Readout::Input(self.input.text().to_string())
    }

    fn on_input(&mut self, token: InputToken) -> Readout {
        self.clear_after_equals();
        self.set_variables();
        self.build_input(token);
        Readout::Input(self.input.text().to_string())
    }

    // ===== State transitions =====

    /// Starts a fresh calculation if the last keystroke was `=`
    pub fn clear_after_equals(&mut self) {
        if self.selection == Selection::Total {
            self.input.reset();
            self.subtotal = None;
        }
    }

    /// Threads the input through the tiers of the selected operator and
    /// stores the rounded subtotal. Does nothing after a total.
    pub fn evaluate_subtotal(&mut self) {
        if let Some(tier) = self.selection.tier() {
            self.commit_subtotal(tier);
        }
    }

    /// Commits the subtotal as the left operand of the selected operator's
    /// tier and resets every tighter tier, then clears the operator and
    /// the input.
    pub fn set_variables(&mut self) {
        let operator = match self.selection {
            Selection::Empty => return,
            Selection::Total => None,
            Selection::Operator(op) => Some(op),
        };

        if let Some(operator) = operator {
            // An absent subtotal behaves as a NaN operand
            let left = self.subtotal.unwrap_or(f64::NAN);
            let tier = operator.tier();
            let captured = tier.fixed_operator().unwrap_or(operator);
            match tier {
                Tier::Low => {
                    self.low.partial_apply(left, captured);
                    self.mid.reset();
                    self.high.reset();
                }
                Tier::Mid => {
                    self.mid.partial_apply(left, captured);
                    self.high.reset();
                }
                Tier::High => self.high.partial_apply(left, captured),
            }
            debug!(left, operator = %captured, tier = ?tier, "operand suspended");
        }

        self.selection = Selection::Empty;
        self.input.reset();
    }

    /// Loads the subtotal into the input and resets every tier
    pub fn evaluate_total(&mut self) {
        let total = self.subtotal.unwrap_or(f64::NAN);
        self.input.load(canonical_text(total));
        self.low.reset();
        self.mid.reset();
        self.high.reset();
        self.selection = Selection::Total;
        debug!(total, "total");
    }

    /// Routes an operand-building token into the input
    pub fn build_input(&mut self, token: InputToken) {
        match token {
            InputToken::Sign => self.input.toggle_sign(),
            InputToken::Decimal => self.input.push_decimal(),
            InputToken::Digit(c) => self.input.push_digit(c),
        }
    }

    fn commit_subtotal(&mut self, tier: Tier) -> f64 {
        let value = round(self.thread(tier));
        self.subtotal = Some(value);
        debug!(subtotal = value, tier = ?tier, "subtotal");
        value
    }

    /// Highest tier first, stopping after `tier`
    fn thread(&self, tier: Tier) -> f64 {
        let operand = coerce(self.input.text());
        let high = self.high.evaluate(operand);
        if tier == Tier::High {
            return high;
        }
        let mid = self.mid.evaluate(high);
        if tier == Tier::Mid {
            return mid;
        }
        self.low.evaluate(mid)
    }
}
