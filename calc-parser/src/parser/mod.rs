pub mod ast;
pub mod error;
pub mod fmt;
pub mod token;

use calc_error::ErrorKind;
use error::{Error, kind};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use token::op::{BinOp, BinOpKind};

/// A high-level parser for mathematical expressions. This is the type to use to parse an
/// arbitrary piece of text into an abstract syntax tree.
///
/// The grammar, from lowest to highest binding:
///
/// ```text
/// Expression := Term ( ('+' | '-') Term )*
/// Term       := Power ( ('*' | '/')? Power )*
/// Power      := Primary ( '^' Power )?
/// Primary    := Number | Variable
///             | Function '(' ( Expression ( ',' Expression )* )? ')'
///             | '(' Expression ')'
///             | ('+' | '-') Primary
/// ```
///
/// Two powers written next to each other with no operator in between (`2x`, `x sin(x)`) are
/// multiplied.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The length of the source code, used to point errors at the end of the input.
    source_len: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            source_len: source.len(),
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.source_len..self.source_len
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns true if the current token is of the given kind.
    pub fn next_is(&self, kind: TokenKind) -> bool {
        self.current_token().is_some_and(|token| token.kind == kind)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        let token = self.tokens
            .get(self.cursor)
            .cloned()
            .ok_or_else(|| self.error(kind::UnexpectedEof))?;
        self.cursor += 1;
        Ok(token)
    }

    /// Advances past the current token if it is of the given kind, returning it.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token<'source>> {
        if self.next_is(kind) {
            self.next_token().ok()
        } else {
            None
        }
    }

    /// Parses the closing parenthesis that matches the opening parenthesis at `open`, returning
    /// its span.
    pub fn close_paren(&mut self, open: Range<usize>) -> Result<Range<usize>, Error> {
        if let Some(token) = self.eat(TokenKind::RParen) {
            return Ok(token.span);
        }

        match self.current_token() {
            Some(token) if token.kind == TokenKind::Invalid => Err(self.error(kind::InvalidToken {
                lexeme: token.lexeme.to_owned(),
            })),
            _ => Err(Error::new(vec![open], kind::UnclosedParenthesis { opening: true })),
        }
    }

    /// Parses the binary operator at the cursor if it has the given precedence.
    ///
    /// At [`Precedence::Factor`], a token that can begin a power produces an implicit
    /// multiplication operator without being consumed.
    pub fn next_binary_op(&mut self, precedence: Precedence) -> Option<BinOp> {
        let start = self.cursor;
        match self.try_parse::<BinOp>() {
            Ok(op) if op.precedence() == precedence => return Some(op),
            Ok(_) => self.cursor = start,
            Err(_) => (),
        }

        let token = self.current_token()?;
        if precedence == Precedence::Factor && token.kind.starts_power() {
            let at = token.span.start;
            Some(BinOp {
                kind: BinOpKind::Mul,
                implicit: true,
                span: at..at,
            })
        } else {
            None
        }
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        match T::parse(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        match self.current_token() {
            None => Ok(value),
            Some(token) => Err(match token.kind {
                TokenKind::RParen => self.error(kind::UnclosedParenthesis { opening: false }),
                TokenKind::Invalid => self.error(kind::InvalidToken {
                    lexeme: token.lexeme.to_owned(),
                }),
                _ => self.error(kind::ExpectedEof),
            }),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// The precedence of a binary operation, in order from lowest precedence (evaluated last) to
/// highest precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors. Implicit
    /// multiplication also has this precedence.
    Factor,

    /// Precedence of exponentiation (`^`).
    Exp,
}

impl Precedence {
    /// Returns the next-higher precedence level, or [`None`] for the highest level, whose
    /// operands are primaries.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Term => Some(Self::Factor),
            Self::Factor => Some(Self::Exp),
            Self::Exp => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{binary::Binary, call::Call, expr::Expr, literal::{LitNum, LitSym}, unary::Unary};
    use token::op::{UnaryOp, UnaryOpKind};

    /// Parses the full input, panicking on failure.
    fn parse(input: &str) -> Expr {
        Parser::new(input).try_parse_full::<Expr>().unwrap()
    }

    /// Parses the full input, expecting failure.
    fn parse_err(input: &str) -> Error {
        Parser::new(input).try_parse_full::<Expr>().unwrap_err()
    }

    fn num(value: f64, span: Range<usize>) -> Expr {
        Expr::Number(LitNum { value, span })
    }

    fn var(name: &str, span: Range<usize>) -> Expr {
        Expr::Variable(LitSym { name: name.to_string(), span })
    }

    fn binary(lhs: Expr, kind: BinOpKind, implicit: bool, op_span: Range<usize>, rhs: Expr) -> Expr {
        Expr::Binary(Binary::new(lhs, BinOp { kind, implicit, span: op_span }, rhs))
    }

    #[test]
    fn literal_int() {
        assert_eq!(parse("16"), num(16.0, 0..2));
    }

    #[test]
    fn literal_float() {
        assert_eq!(parse("3.14"), num(3.14, 0..4));
    }

    #[test]
    fn literal_exponent() {
        assert_eq!(parse("2.5e3"), num(2500.0, 0..5));
    }

    #[test]
    fn literal_symbol() {
        assert_eq!(parse("pi_2"), var("pi_2", 0..4));
    }

    #[test]
    fn binary_left_associative() {
        assert_eq!(
            parse("1 - 2 - 3"),
            binary(
                binary(num(1.0, 0..1), BinOpKind::Sub, false, 2..3, num(2.0, 4..5)),
                BinOpKind::Sub,
                false,
                6..7,
                num(3.0, 8..9),
            ),
        );
    }

    #[test]
    fn binary_precedence() {
        assert_eq!(
            parse("2 + 3 * 4"),
            binary(
                num(2.0, 0..1),
                BinOpKind::Add,
                false,
                2..3,
                binary(num(3.0, 4..5), BinOpKind::Mul, false, 6..7, num(4.0, 8..9)),
            ),
        );
    }

    #[test]
    fn power_right_associative() {
        assert_eq!(
            parse("2^3^2"),
            binary(
                num(2.0, 0..1),
                BinOpKind::Pow,
                false,
                1..2,
                binary(num(3.0, 2..3), BinOpKind::Pow, false, 3..4, num(2.0, 4..5)),
            ),
        );
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(
            parse("2x"),
            binary(num(2.0, 0..1), BinOpKind::Mul, true, 1..1, var("x", 1..2)),
        );
    }

    #[test]
    fn implicit_multiplication_binds_like_explicit() {
        assert_eq!(parse("2x^2").to_string(), "(2 * (x ^ 2))");
        assert_eq!(parse("x sin(x)").to_string(), "(x * sin(x))");
        assert_eq!(parse("2(x + 1)").to_string(), "(2 * (x + 1))");
        assert_eq!(parse("6 / 2x").to_string(), "((6 / 2) * x)");
    }

    #[test]
    fn minus_is_never_implicit() {
        assert_eq!(parse("2 -3").to_string(), "(2 - 3)");
    }

    #[test]
    fn unary_binds_tightest() {
        assert_eq!(
            parse("-x^2"),
            binary(
                Expr::Unary(Unary {
                    operand: Box::new(var("x", 1..2)),
                    op: UnaryOp { kind: UnaryOpKind::Negate, span: 0..1 },
                    span: 0..2,
                }),
                BinOpKind::Pow,
                false,
                2..3,
                num(2.0, 3..4),
            ),
        );
    }

    #[test]
    fn nested_unary() {
        assert_eq!(parse("-+-3").to_string(), "-+-3");
    }

    #[test]
    fn parenthesized() {
        assert_eq!(parse("((1 + 9) / 5) * 3").to_string(), "(((1 + 9) / 5) * 3)");
    }

    #[test]
    fn function_call() {
        assert_eq!(
            parse("sin(x)"),
            Expr::Call(Call {
                name: LitSym { name: "sin".to_string(), span: 0..3 },
                args: vec![var("x", 4..5)],
                span: 0..6,
                paren_span: 3..6,
            }),
        );
    }

    #[test]
    fn function_call_many_args() {
        assert_eq!(parse("log(2, x + 1)").to_string(), "log(2, (x + 1))");
    }

    #[test]
    fn function_call_no_args() {
        assert_eq!(parse("abs()").to_string(), "abs()");
    }

    #[test]
    fn unexpected_eof() {
        let err = parse_err("2 +");
        assert!(err.is::<kind::UnexpectedEof>());
        assert_eq!(err.offset(), 3);
        assert_eq!(err.message(), "unexpected end of input");
    }

    #[test]
    fn empty_input() {
        let err = parse_err("   ");
        assert!(err.is::<kind::UnexpectedEof>());
        assert_eq!(err.offset(), 3);
    }

    #[test]
    fn unclosed_paren() {
        let err = parse_err("(1 + 2");
        assert_eq!(
            err.downcast_ref::<kind::UnclosedParenthesis>(),
            Some(&kind::UnclosedParenthesis { opening: true }),
        );
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn unopened_paren() {
        let err = parse_err("1 + 2)");
        assert_eq!(
            err.downcast_ref::<kind::UnclosedParenthesis>(),
            Some(&kind::UnclosedParenthesis { opening: false }),
        );
        assert_eq!(err.offset(), 5);
    }

    #[test]
    fn empty_paren() {
        let err = parse_err("2 * ()");
        assert!(err.is::<kind::EmptyParenthesis>());
        assert_eq!(err.spans, vec![4..6]);
    }

    #[test]
    fn call_without_paren() {
        let err = parse_err("sin x");
        assert_eq!(
            err.downcast_ref::<kind::MissingCallParenthesis>(),
            Some(&kind::MissingCallParenthesis { name: "sin".to_string() }),
        );
        assert_eq!(err.message(), "expected opening parenthesis after function name");
    }

    #[test]
    fn invalid_character() {
        let err = parse_err("2 $ 3");
        assert_eq!(
            err.downcast_ref::<kind::InvalidToken>(),
            Some(&kind::InvalidToken { lexeme: "$".to_string() }),
        );
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn unexpected_operator() {
        let err = parse_err("* 2");
        assert!(err.is::<kind::UnexpectedToken>());
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn trailing_input() {
        let err = parse_err("1, 2");
        assert!(err.is::<kind::ExpectedEof>());
        assert_eq!(err.offset(), 1);
    }
}
