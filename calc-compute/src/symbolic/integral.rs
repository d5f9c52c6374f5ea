//! Symbolic integration.
//!
//! Only a small set of forms can be integrated: sums and differences of terms, constant multiples,
//! `c / x`, powers `x^n`, and `sin`, `cos` and `ln` of the bare integration variable. Every other
//! form is reported as [`UnsupportedIntegration`]. The constant of integration is omitted.

use calc_error::Error;
use calc_parser::parser::token::op::{BinOpKind, UnaryOpKind};
use crate::numerical::eval::Eval;
use super::{error::UnsupportedIntegration, SymExpr};

/// Creates an [`UnsupportedIntegration`] error with the given reason.
fn unsupported(reason: impl Into<String>) -> Error {
    Error::unspanned(UnsupportedIntegration { reason: reason.into() })
}

/// `∫sin(x) = -cos(x)`
/// `∫cos(x) = sin(x)`
/// `∫ln(x) = x*ln(x) - x`
fn function_integral(op: UnaryOpKind, arg: &SymExpr, with: &str) -> Result<SymExpr, Error> {
    if !arg.is_var(with) {
        return Err(unsupported(format!(
            "only functions of `{}` itself can be integrated, not of `{}`",
            with, arg,
        )));
    }

    let x = || SymExpr::var(with);
    match op {
        UnaryOpKind::Sin => Ok(-SymExpr::unary(UnaryOpKind::Cos, x())),
        UnaryOpKind::Cos => Ok(SymExpr::unary(UnaryOpKind::Sin, x())),
        UnaryOpKind::Ln => Ok(x() * SymExpr::unary(UnaryOpKind::Ln, x()) - x()),
        _ => Err(unsupported(format!("the integral of `{}` is not supported", op))),
    }
}

/// `∫(c * f) = c * ∫f`, where exactly one of the factors is constant.
fn constant_multiple(lhs: &SymExpr, rhs: &SymExpr, with: &str) -> Result<SymExpr, Error> {
    match (lhs.is_constant(), rhs.is_constant()) {
        (true, false) => Ok(lhs.clone() * integral(rhs, with)?),
        (false, true) => Ok(integral(lhs, with)? * rhs.clone()),
        _ => Err(unsupported("products can only be integrated if one factor is constant")),
    }
}

/// `∫(c / x) = c * ln(x)`
fn reciprocal(lhs: &SymExpr, rhs: &SymExpr, with: &str) -> Result<SymExpr, Error> {
    if lhs.is_constant() && rhs.is_var(with) {
        Ok(lhs.clone() * SymExpr::unary(UnaryOpKind::Ln, SymExpr::var(with)))
    } else {
        Err(unsupported(format!(
            "only quotients of the form `c / {}` with a constant `c` can be integrated",
            with,
        )))
    }
}

/// `∫x^-1 = ln(x)`
/// `∫x^n = x^(n+1) / (n+1)`
fn power(base: &SymExpr, exponent: &SymExpr, with: &str) -> Result<SymExpr, Error> {
    if !base.is_var(with) || !exponent.is_constant() {
        return Err(unsupported(format!(
            "only powers of the form `{}^n` with a constant `n` can be integrated",
            with,
        )));
    }

    let n = exponent.eval_default()?;
    let x = SymExpr::var(with);
    if n == -1.0 {
        Ok(SymExpr::unary(UnaryOpKind::Ln, x))
    } else {
        Ok(x.pow(SymExpr::Number(n + 1.0)) / SymExpr::Number(n + 1.0))
    }
}

/// Computes the antiderivative of the given expression with respect to the variable `with`.
///
/// Variables other than `with` are treated as constants.
pub fn integral(f: &SymExpr, with: &str) -> Result<SymExpr, Error> {
    if f.is_constant() {
        return Ok(f.clone() * SymExpr::var(with));
    }

    match f {
        SymExpr::Variable(name) if name == with => {
            Ok(SymExpr::var(with).pow(SymExpr::Number(2.0)) / SymExpr::Number(2.0))
        },
        SymExpr::Number(_) | SymExpr::Variable(_) => Ok(f.clone() * SymExpr::var(with)),
        SymExpr::Binary(op, lhs, rhs) => match op {
            BinOpKind::Add | BinOpKind::Sub => Ok(SymExpr::binary(
                *op,
                integral(lhs, with)?,
                integral(rhs, with)?,
            )),
            BinOpKind::Mul => constant_multiple(lhs, rhs, with),
            BinOpKind::Div => reciprocal(lhs, rhs, with),
            BinOpKind::Pow => power(lhs, rhs, with),
        },
        SymExpr::Unary(UnaryOpKind::Plus, operand) => integral(operand, with),
        SymExpr::Unary(UnaryOpKind::Negate, operand) => Ok(-integral(operand, with)?),
        SymExpr::Unary(op, operand) => function_integral(*op, operand, with),
        SymExpr::Call(name, args) => {
            let op = match name.as_str() {
                "sin" => UnaryOpKind::Sin,
                "cos" => UnaryOpKind::Cos,
                "ln" => UnaryOpKind::Ln,
                _ => return Err(unsupported(format!("the integral of `{}` is not supported", name))),
            };

            match args.as_slice() {
                [arg] => function_integral(op, arg, with),
                _ => Err(unsupported(format!(
                    "`{}` takes exactly one argument, but {} were given",
                    name,
                    args.len(),
                ))),
            }
        },
    }
}

impl SymExpr {
    /// Integrates the expression with respect to the given variable. See [`integral()`].
    pub fn integrate(&self, with: &str) -> Result<SymExpr, Error> {
        integral(self, with)
    }
}
