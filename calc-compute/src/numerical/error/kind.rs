use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::{ErrorKind, EXPR};

/// The variable is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", name),
    labels = ["this variable"],
    help = if suggestions.is_empty() {
        format!("to define it, type: {} {} = {}", "let".fg(EXPR), name.fg(EXPR), "<expression>".fg(EXPR))
    } else {
        format!(
            "did you mean: {}?",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,

    /// Defined variables with a similar name.
    pub suggestions: Vec<String>,
}

/// The function is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function does not exist", name),
    labels = ["this function"],
    help = "the available functions are: sin, cos, tan, log, ln, sqrt, abs",
)]
pub struct UndefinedFunction {
    /// The name of the function that was undefined.
    pub name: String,
}

/// A function was called with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` takes exactly one argument, but {} were given", name, given),
    labels = ["this function call"],
)]
pub struct WrongArgumentCount {
    /// The name of the function.
    pub name: String,

    /// The number of arguments that were given.
    pub given: usize,
}

/// Division by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this divisor is zero"],
)]
pub struct DivisionByZero;

/// A function was given an input outside of its domain.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined for {}", operation, value),
    labels = ["this expression"],
    help = if *operation == "sqrt" {
        "the input to `sqrt` must not be negative"
    } else {
        "the input to a logarithm must be positive"
    },
)]
pub struct DomainError {
    /// The name of the function.
    pub operation: &'static str,

    /// The input that was given to the function.
    pub value: f64,
}
