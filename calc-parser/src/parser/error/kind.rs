use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

/// The end of the input was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the input was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of expression",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A character that does not begin any token was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid character",
    labels = [format!("`{}` cannot be used in an expression", lexeme)],
    help = "expressions may only contain numbers, names, `+ - * / ^`, parentheses, and commas",
)]
pub struct InvalidToken {
    /// The text of the invalid token.
    pub lexeme: String,
}

/// A number literal could not be converted to a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid number literal",
    labels = [format!("`{}` is not a valid number", lexeme)],
)]
pub struct InvalidNumber {
    /// The text of the literal.
    pub lexeme: String,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parentheses",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// A function name was not followed by its argument list.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected opening parenthesis after function name",
    labels = [format!("`{}` must be called with parentheses", name)],
    help = format!("write the arguments in parentheses, as in {}", format!("{}(x)", name).fg(EXPR)),
)]
pub struct MissingCallParenthesis {
    /// The name of the function.
    pub name: String,
}
