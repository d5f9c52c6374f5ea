//! Numeric implementations of the operators and math functions.
//!
//! Both the AST evaluator and the symbolic evaluator go through these functions, so that a math
//! function behaves the same whether it was written as a [`UnaryOpKind`] or as a function call.

use calc_error::Error;
use calc_parser::parser::token::op::{BinOpKind, UnaryOpKind};
use crate::numerical::error::kind::{DivisionByZero, DomainError};
use std::ops::Range;

/// An error produced by a numeric operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// The divisor of a division was zero.
    DivisionByZero,

    /// The input is outside of the domain of the function.
    Domain {
        /// The name of the function.
        operation: &'static str,

        /// The input that was given to the function.
        value: f64,
    },
}

impl MathError {
    /// Converts the math error into an [`Error`] pointing at the given spans.
    pub fn into_error(self, spans: Vec<Range<usize>>) -> Error {
        match self {
            Self::DivisionByZero => Error::new(spans, DivisionByZero),
            Self::Domain { operation, value } => Error::new(spans, DomainError { operation, value }),
        }
    }
}

/// Applies a binary operator to two numbers.
///
/// Division by zero is an error. Every other operation returns its IEEE result, even if it is not
/// finite (e.g. `0 ^ -1`).
pub fn apply_binary(op: BinOpKind, lhs: f64, rhs: f64) -> Result<f64, MathError> {
    Ok(match op {
        BinOpKind::Add => lhs + rhs,
        BinOpKind::Sub => lhs - rhs,
        BinOpKind::Mul => lhs * rhs,
        BinOpKind::Div => {
            if rhs == 0.0 {
                return Err(MathError::DivisionByZero);
            }
            lhs / rhs
        },
        BinOpKind::Pow => lhs.powf(rhs),
    })
}

/// Applies a unary operator or math function to a number.
pub fn apply_unary(op: UnaryOpKind, value: f64) -> Result<f64, MathError> {
    Ok(match op {
        UnaryOpKind::Plus => value,
        UnaryOpKind::Negate => -value,
        UnaryOpKind::Sin => value.sin(),
        UnaryOpKind::Cos => value.cos(),
        UnaryOpKind::Tan => value.tan(),
        UnaryOpKind::Log10 => positive("log", value)?.log10(),
        UnaryOpKind::Ln => positive("ln", value)?.ln(),
        UnaryOpKind::Sqrt => {
            if value < 0.0 {
                return Err(MathError::Domain { operation: "sqrt", value });
            }
            value.sqrt()
        },
        UnaryOpKind::Abs => value.abs(),
    })
}

/// Returns the value if it is strictly positive, or a domain error for the given function.
fn positive(operation: &'static str, value: f64) -> Result<f64, MathError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(MathError::Domain { operation, value })
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn binary_operators() {
        assert_eq!(apply_binary(BinOpKind::Add, 2.0, 3.0), Ok(5.0));
        assert_eq!(apply_binary(BinOpKind::Sub, 2.0, 3.0), Ok(-1.0));
        assert_eq!(apply_binary(BinOpKind::Mul, 2.0, 3.0), Ok(6.0));
        assert_eq!(apply_binary(BinOpKind::Div, 3.0, 2.0), Ok(1.5));
        assert_eq!(apply_binary(BinOpKind::Pow, 2.0, 9.0), Ok(512.0));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(apply_binary(BinOpKind::Div, 1.0, 0.0), Err(MathError::DivisionByZero));
        assert_eq!(apply_binary(BinOpKind::Div, 0.0, -0.0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn non_finite_power_is_not_an_error() {
        let result = apply_binary(BinOpKind::Pow, 0.0, -1.0).unwrap();
        assert!(result.is_infinite());
    }

    #[test]
    fn functions() {
        assert_float_absolute_eq!(apply_unary(UnaryOpKind::Sin, 0.0).unwrap(), 0.0);
        assert_float_absolute_eq!(apply_unary(UnaryOpKind::Cos, 0.0).unwrap(), 1.0);
        assert_float_absolute_eq!(apply_unary(UnaryOpKind::Log10, 1000.0).unwrap(), 3.0);
        assert_float_absolute_eq!(apply_unary(UnaryOpKind::Ln, std::f64::consts::E).unwrap(), 1.0);
        assert_float_absolute_eq!(apply_unary(UnaryOpKind::Sqrt, 16.0).unwrap(), 4.0);
        assert_float_absolute_eq!(apply_unary(UnaryOpKind::Abs, -2.5).unwrap(), 2.5);
        assert_float_absolute_eq!(apply_unary(UnaryOpKind::Negate, 2.5).unwrap(), -2.5);
    }

    #[test]
    fn domain_errors() {
        assert_eq!(
            apply_unary(UnaryOpKind::Sqrt, -1.0),
            Err(MathError::Domain { operation: "sqrt", value: -1.0 }),
        );
        assert_eq!(
            apply_unary(UnaryOpKind::Ln, 0.0),
            Err(MathError::Domain { operation: "ln", value: 0.0 }),
        );
        assert_eq!(
            apply_unary(UnaryOpKind::Log10, -3.0),
            Err(MathError::Domain { operation: "log", value: -3.0 }),
        );
        assert_eq!(apply_unary(UnaryOpKind::Sqrt, 0.0), Ok(0.0));
    }
}
