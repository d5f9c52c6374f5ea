//! Simplification rules for the prefix operators and math functions.

use calc_parser::parser::token::op::UnaryOpKind;
use crate::symbolic::SymExpr;
use super::fold;

/// `+a = a`
///
/// Math functions are folded if their operand is constant.
pub fn unary(op: UnaryOpKind, operand: SymExpr) -> SymExpr {
    match op {
        UnaryOpKind::Plus => operand,
        UnaryOpKind::Negate => negate(operand),
        _ => fold(SymExpr::unary(op, operand)),
    }
}

/// `-0 = 0`
/// `-(-a) = a`
pub fn negate(operand: SymExpr) -> SymExpr {
    if operand.is_zero() {
        return SymExpr::Number(0.0);
    }

    match operand {
        SymExpr::Unary(UnaryOpKind::Negate, inner) => *inner,
        operand => fold(-operand),
    }
}
