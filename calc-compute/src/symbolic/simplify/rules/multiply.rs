//! Simplification rules for multiplication and division, including merging of numeric
//! coefficients.

use calc_error::Error;
use calc_parser::parser::token::op::BinOpKind;
use crate::numerical::error::kind::DivisionByZero;
use crate::symbolic::SymExpr;
use super::fold;

/// Splits a product with exactly one number factor into the number and the other factor.
///
/// - `3*x` -> `(3, x)`
/// - `x*3` -> `(3, x)`
/// - `x*y` -> `None`
fn split_coefficient(expr: &SymExpr) -> Option<(f64, &SymExpr)> {
    let SymExpr::Binary(BinOpKind::Mul, lhs, rhs) = expr else {
        return None;
    };

    match (lhs.as_number(), rhs.as_number()) {
        (Some(coeff), None) => Some((coeff, rhs)),
        (None, Some(coeff)) => Some((coeff, lhs)),
        _ => None,
    }
}

/// Merges the number `coeff` into the product `expr` if `expr` has a number factor.
///
/// `a*(b*x) = (ab)*x`
fn merge_coefficient(coeff: f64, expr: &SymExpr) -> Option<SymExpr> {
    let (inner, factor) = split_coefficient(expr)?;
    let merged = coeff * inner;
    merged.is_finite().then(|| mul(SymExpr::Number(merged), factor.clone()))
}

/// `0*a = 0`
/// `a*0 = 0`
/// `1*a = a`
/// `a*1 = a`
/// `a*(b*x) = (ab)*x`
pub fn mul(lhs: SymExpr, rhs: SymExpr) -> SymExpr {
    if lhs.is_zero() || rhs.is_zero() {
        return SymExpr::Number(0.0);
    }
    if lhs.is_one() {
        return rhs;
    }
    if rhs.is_one() {
        return lhs;
    }
    if lhs.is_constant() && rhs.is_constant() {
        return fold(lhs * rhs);
    }

    let merged = match (lhs.as_number(), rhs.as_number()) {
        (Some(coeff), None) => merge_coefficient(coeff, &rhs),
        (None, Some(coeff)) => merge_coefficient(coeff, &lhs),
        _ => None,
    };

    merged.unwrap_or_else(|| lhs * rhs)
}

/// `a/0` is an error
/// `0/a = 0`
/// `a/1 = a`
/// `(b*x)/a = (b/a)*x`
pub fn div(lhs: SymExpr, rhs: SymExpr) -> Result<SymExpr, Error> {
    if rhs.is_zero() {
        return Err(Error::unspanned(DivisionByZero));
    }
    if lhs.is_zero() {
        return Ok(SymExpr::Number(0.0));
    }
    if rhs.is_one() {
        return Ok(lhs);
    }
    if lhs.is_constant() && rhs.is_constant() {
        return Ok(fold(lhs / rhs));
    }

    if let Some(divisor) = rhs.as_number() {
        if let Some((coeff, factor)) = split_coefficient(&lhs) {
            let quotient = coeff / divisor;
            if quotient.is_finite() {
                return Ok(mul(SymExpr::Number(quotient), factor.clone()));
            }
        }
    }

    Ok(lhs / rhs)
}
