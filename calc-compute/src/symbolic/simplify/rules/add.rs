//! Simplification rules for addition and subtraction.

use crate::symbolic::SymExpr;
use super::{fold, unary::negate};

/// `0+a = a`
/// `a+0 = a`
pub fn add(lhs: SymExpr, rhs: SymExpr) -> SymExpr {
    if lhs.is_zero() {
        return rhs;
    }
    if rhs.is_zero() {
        return lhs;
    }

    fold(lhs + rhs)
}

/// `a-0 = a`
/// `0-a = -a`
pub fn sub(lhs: SymExpr, rhs: SymExpr) -> SymExpr {
    if rhs.is_zero() {
        return lhs;
    }
    if lhs.is_zero() {
        return negate(rhs);
    }

    fold(lhs - rhs)
}
