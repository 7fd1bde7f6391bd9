//! Binary operators and their precedence tiers

/// Type-safe operator enum - compile-time guarantee of valid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

/// Precedence bucket holding one pending expression.
///
/// Ordered from loosest to tightest binding, so `Tier::Low < Tier::High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// `+` and `-`
    Low,
    /// `/`
    Mid,
    /// `*`
    High,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Parses an operator symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Returns the precedence tier this operator suspends into
    #[must_use]
    pub const fn tier(&self) -> Tier {
        match self {
            Self::Add | Self::Subtract => Tier::Low,
            Self::Divide => Tier::Mid,
            Self::Multiply => Tier::High,
        }
    }

    /// Applies the operator with IEEE semantics.
    ///
    /// Division by zero yields an infinity or NaN rather than an error.
    #[must_use]
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Tier {
    /// Fixed operator of a single-operator tier; the low tier serves two
    #[must_use]
    pub const fn fixed_operator(&self) -> Option<Operator> {
        match self {
            Self::Low => None,
            Self::Mid => Some(Operator::Divide),
            Self::High => Some(Operator::Multiply),
        }
    }
}
