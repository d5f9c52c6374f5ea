//! Symbolic derivatives of the math functions, applied with the chain rule.

use calc_error::Error;
use calc_parser::parser::token::op::UnaryOpKind;
use crate::symbolic::SymExpr;
use super::{derivative, unsupported};

/// Returns the derivative of the outer function `op`, evaluated at `u`.
fn outer_derivative(op: UnaryOpKind, u: &SymExpr) -> Result<SymExpr, Error> {
    let one = || SymExpr::Number(1.0);
    Ok(match op {
        // sin(u)' = cos(u)
        UnaryOpKind::Sin => SymExpr::unary(UnaryOpKind::Cos, u.clone()),
        // cos(u)' = -sin(u)
        UnaryOpKind::Cos => -SymExpr::unary(UnaryOpKind::Sin, u.clone()),
        // tan(u)' = sec^2(u) = 1 / cos^2(u)
        UnaryOpKind::Tan => one() / SymExpr::unary(UnaryOpKind::Cos, u.clone()).pow(SymExpr::Number(2.0)),
        // ln(u)' = 1 / u
        UnaryOpKind::Ln => one() / u.clone(),
        // sqrt(u)' = 1 / (2 * sqrt(u))
        UnaryOpKind::Sqrt => one() / (SymExpr::Number(2.0) * SymExpr::unary(UnaryOpKind::Sqrt, u.clone())),
        UnaryOpKind::Plus | UnaryOpKind::Negate | UnaryOpKind::Log10 | UnaryOpKind::Abs => {
            return Err(unsupported(format!("the derivative of `{}` is not supported", op)));
        },
    })
}

/// Computes the derivative of a unary operation, applying the chain rule for math functions.
pub(super) fn unary_derivative(op: UnaryOpKind, operand: &SymExpr, with: &str) -> Result<SymExpr, Error> {
    match op {
        UnaryOpKind::Plus => derivative(operand, with),
        UnaryOpKind::Negate => Ok(-derivative(operand, with)?),
        _ => Ok(outer_derivative(op, operand)? * derivative(operand, with)?),
    }
}

/// Computes the derivative of a function call. Only single-argument calls to `sin`, `cos` and
/// `ln` are supported; the result uses the [`SymExpr::Unary`] form of the function.
pub(super) fn call_derivative(name: &str, args: &[SymExpr], with: &str) -> Result<SymExpr, Error> {
    let op = match name {
        "sin" => UnaryOpKind::Sin,
        "cos" => UnaryOpKind::Cos,
        "ln" => UnaryOpKind::Ln,
        _ => return Err(unsupported(format!("the derivative of `{}` is not supported", name))),
    };

    match args {
        [arg] => unary_derivative(op, arg, with),
        _ => Err(unsupported(format!(
            "`{}` takes exactly one argument, but {} were given",
            name,
            args.len(),
        ))),
    }
}
