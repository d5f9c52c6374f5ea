//! Simplification rules for exponentiation.

use crate::symbolic::SymExpr;
use super::fold;

/// `a^0 = 1`
/// `a^1 = a`
/// `0^a = 0`
/// `1^a = 1`
pub fn pow(base: SymExpr, exponent: SymExpr) -> SymExpr {
    if exponent.is_zero() {
        return SymExpr::Number(1.0);
    }
    if exponent.is_one() {
        return base;
    }
    if base.is_zero() {
        return SymExpr::Number(0.0);
    }
    if base.is_one() {
        return SymExpr::Number(1.0);
    }

    fold(base.pow(exponent))
}
