//! Suspended expressions, one per precedence tier
//!
//! A pending expression holds a left operand (and, for the low tier, the
//! operator that goes with it) until a right operand arrives. Lower tiers
//! wait inside higher ones, which is how `2 + 3 * 4` defers the addition
//! until the product is known.

use crate::core::number::round;
use crate::core::Operator;

/// A tier's suspended computation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PendingExpression {
    /// Nothing suspended: the right operand passes through
    #[default]
    Identity,
    /// `left <operator> _` waiting for its right operand
    Pending {
        /// Operator captured when the left operand was committed
        operator: Operator,
        /// Left operand, already rounded
        left: f64,
    },
}

impl PendingExpression {
    /// Feeds a right operand through the expression.
    ///
    /// Pending expressions round their result; identity returns the operand
    /// as is.
    #[must_use]
    pub fn evaluate(&self, right: f64) -> f64 {
        match self {
            Self::Identity => right,
            Self::Pending { operator, left } => round(operator.apply(*left, right)),
        }
    }

    /// Captures `left` and `operator`, replacing whatever was suspended
    pub fn partial_apply(&mut self, left: f64, operator: Operator) {
        *self = Self::Pending { operator, left };
    }

    /// Restores the identity expression
    pub fn reset(&mut self) {
        *self = Self::Identity;
    }

    /// Returns true if an operand is suspended
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_passes_operand_through() {
        let expr = PendingExpression::default();
        assert_eq!(expr, PendingExpression::Identity);
        assert_eq!(expr.evaluate(7.5), 7.5);
        assert!(!expr.is_pending());
    }

    #[test]
    fn test_identity_does_not_round() {
        let expr = PendingExpression::Identity;
        assert_eq!(expr.evaluate(0.1 + 0.2), 0.1 + 0.2);
    }

    #[test]
    fn test_partial_apply_then_evaluate() {
        let mut expr = PendingExpression::Identity;
        expr.partial_apply(10.0, Operator::Subtract);
        assert!(expr.is_pending());
        assert_eq!(expr.evaluate(4.0), 6.0);
        // Evaluation does not consume the suspended operand
        assert_eq!(expr.evaluate(1.0), 9.0);
    }

    #[test]
    fn test_pending_result_is_rounded() {
        let mut expr = PendingExpression::Identity;
        expr.partial_apply(0.1, Operator::Add);
        assert_eq!(expr.evaluate(0.2), 0.3);
    }

    #[test]
    fn test_partial_apply_replaces_previous() {
        let mut expr = PendingExpression::Identity;
        expr.partial_apply(2.0, Operator::Add);
        expr.partial_apply(8.0, Operator::Divide);
        assert_eq!(
            expr,
            PendingExpression::Pending {
                operator: Operator::Divide,
                left: 8.0
            }
        );
        assert_eq!(expr.evaluate(4.0), 2.0);
    }

    #[test]
    fn test_reset_restores_identity() {
        let mut expr = PendingExpression::Identity;
        expr.partial_apply(3.0, Operator::Multiply);
        expr.reset();
        assert_eq!(expr, PendingExpression::Identity);
        assert_eq!(expr.evaluate(5.0), 5.0);
    }

    #[test]
    fn test_division_by_zero_yields_non_finite() {
        let mut expr = PendingExpression::Identity;
        expr.partial_apply(1.0, Operator::Divide);
        assert_eq!(expr.evaluate(0.0), f64::INFINITY);
        expr.partial_apply(0.0, Operator::Divide);
        assert!(expr.evaluate(0.0).is_nan());
    }
}
