//! Errors produced by symbolic manipulation. These errors are not associated with any region of
//! source code.

use calc_attrs::ErrorKind;
use calc_error::ErrorKind;

/// The derivative of the expression could not be computed symbolically.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot differentiate this expression",
    help = reason,
)]
pub struct UnsupportedDifferentiation {
    /// Why the derivative could not be computed.
    pub reason: String,
}

/// The antiderivative of the expression could not be computed symbolically.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot integrate this expression",
    help = reason,
)]
pub struct UnsupportedIntegration {
    /// Why the antiderivative could not be computed.
    pub reason: String,
}

/// The equation is not a linear equation that can be solved.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot solve this equation",
    help = reason,
)]
pub struct UnsupportedEquation {
    /// Why the equation could not be solved.
    pub reason: String,
}

/// An operation was requested before an expression was parsed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "there is no expression to work with",
    help = "parse an expression first",
)]
pub struct NoExpression;

/// An AST node that has no symbolic counterpart was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unrecognized expression node",
    labels = ["this expression"],
)]
pub struct UnrecognizedNode;
