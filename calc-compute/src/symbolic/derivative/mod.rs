//! Symbolic differentiation.
//!
//! The derivative is built by structural recursion over the expression, applying the sum,
//! product, quotient, power and chain rules. The result is not simplified; use
//! [`simplify`](super::simplify()) to clean it up.

mod function;

use calc_error::Error;
use calc_parser::parser::token::op::BinOpKind;
use crate::numerical::eval::Eval;
use super::{error::UnsupportedDifferentiation, SymExpr};

/// Creates an [`UnsupportedDifferentiation`] error with the given reason.
fn unsupported(reason: impl Into<String>) -> Error {
    Error::unspanned(UnsupportedDifferentiation { reason: reason.into() })
}

/// `(f * g)' = f * g' + g * f'`
fn product_rule(f: &SymExpr, g: &SymExpr, with: &str) -> Result<SymExpr, Error> {
    Ok(f.clone() * derivative(g, with)? + g.clone() * derivative(f, with)?)
}

/// `(f / g)' = (g * f' - f * g') / g^2`
fn quotient_rule(f: &SymExpr, g: &SymExpr, with: &str) -> Result<SymExpr, Error> {
    let numerator = g.clone() * derivative(f, with)? - f.clone() * derivative(g, with)?;
    Ok(numerator / g.clone().pow(SymExpr::Number(2.0)))
}

/// `(f^n)' = n * f^(n - 1) * f'`, where `n` must be constant.
fn power_rule(base: &SymExpr, exponent: &SymExpr, with: &str) -> Result<SymExpr, Error> {
    if !exponent.is_constant() {
        return Err(unsupported(format!(
            "the exponent `{}` is not constant; only constant exponents can be differentiated",
            exponent,
        )));
    }

    let n = exponent.eval_default().map_err(|err| unsupported(format!(
        "the exponent `{}` cannot be evaluated: {}",
        exponent,
        err.message(),
    )))?;
    Ok(SymExpr::Number(n) * base.clone().pow(SymExpr::Number(n - 1.0)) * derivative(base, with)?)
}

/// Computes the derivative of the given expression with respect to the variable `with`.
///
/// Returns [`Err`] with [`UnsupportedDifferentiation`] if the derivative could not be computed
/// symbolically.
pub fn derivative(f: &SymExpr, with: &str) -> Result<SymExpr, Error> {
    if f.is_constant() {
        return Ok(SymExpr::Number(0.0));
    }

    match f {
        SymExpr::Number(_) => Ok(SymExpr::Number(0.0)),
        SymExpr::Variable(name) => Ok(SymExpr::Number(if name == with { 1.0 } else { 0.0 })),
        SymExpr::Binary(op, lhs, rhs) => match op {
            BinOpKind::Add | BinOpKind::Sub => Ok(SymExpr::binary(
                *op,
                derivative(lhs, with)?,
                derivative(rhs, with)?,
            )),
            BinOpKind::Mul => product_rule(lhs, rhs, with),
            BinOpKind::Div => quotient_rule(lhs, rhs, with),
            BinOpKind::Pow => power_rule(lhs, rhs, with),
        },
        SymExpr::Unary(op, operand) => function::unary_derivative(*op, operand, with),
        SymExpr::Call(name, args) => function::call_derivative(name, args, with),
    }
}

impl SymExpr {
    /// Differentiates the expression with respect to the given variable. See [`derivative()`].
    pub fn differentiate(&self, with: &str) -> Result<SymExpr, Error> {
        derivative(self, with)
    }
}
