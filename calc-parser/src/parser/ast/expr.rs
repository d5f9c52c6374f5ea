use crate::{
    parser::{
        ast::{binary::Binary, call::Call, literal::{LitNum, LitSym}, unary::Unary},
        error::{kind, Error},
        Associativity,
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt::{self, Display}, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression.
///
/// An expression is any valid piece of code that can be evaluated to produce a value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Expr {
    /// A number literal.
    Number(LitNum),

    /// A variable, such as `x`.
    Variable(LitSym),

    /// A binary operation.
    Binary(Binary),

    /// A unary operation.
    Unary(Unary),

    /// A function call.
    Call(Call),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Number(num) => num.span.clone(),
            Expr::Variable(sym) => sym.span.clone(),
            Expr::Binary(binary) => binary.span.clone(),
            Expr::Unary(unary) => unary.span.clone(),
            Expr::Call(call) => call.span(),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        parse_binary(input, Precedence::Term)
    }
}

/// Parses the operand of a binary operation at the given precedence level. The operands of the
/// highest level are primaries.
fn parse_operand(input: &mut Parser, precedence: Precedence) -> Result<Expr, Error> {
    match precedence.next() {
        Some(next) => parse_binary(input, next),
        None => parse_primary(input),
    }
}

/// Parses a chain of binary operations that all have the given precedence.
fn parse_binary(input: &mut Parser, precedence: Precedence) -> Result<Expr, Error> {
    let mut lhs = parse_operand(input, precedence)?;

    while let Some(op) = input.next_binary_op(precedence) {
        let rhs = match op.kind.associativity() {
            Associativity::Left => parse_operand(input, precedence)?,
            Associativity::Right => parse_binary(input, precedence)?,
        };
        lhs = Expr::Binary(Binary::new(lhs, op, rhs));
    }

    Ok(lhs)
}

/// Parses a primary expression: a literal, a function call, a prefix operation, or an expression
/// in parentheses.
pub(crate) fn parse_primary(input: &mut Parser) -> Result<Expr, Error> {
    let Some(token) = input.current_token().cloned() else {
        return Err(input.error(kind::UnexpectedEof));
    };

    match token.kind {
        TokenKind::Number => input.try_parse::<LitNum>().map(Expr::Number),
        TokenKind::Variable => input.try_parse::<LitSym>().map(Expr::Variable),
        TokenKind::Function => input.try_parse::<Call>().map(Expr::Call),
        TokenKind::Plus | TokenKind::Minus => input.try_parse::<Unary>().map(Expr::Unary),
        TokenKind::LParen => {
            input.next_token()?;
            if let Some(close) = input.eat(TokenKind::RParen) {
                return Err(Error::new(vec![token.span.start..close.span.end], kind::EmptyParenthesis));
            }

            let expr = input.try_parse::<Expr>()?;
            input.close_paren(token.span)?;
            Ok(expr)
        },
        TokenKind::Invalid => Err(input.error(kind::InvalidToken {
            lexeme: token.lexeme.to_owned(),
        })),
        found => Err(input.error(kind::UnexpectedToken {
            expected: &[
                TokenKind::Number,
                TokenKind::Variable,
                TokenKind::Function,
                TokenKind::LParen,
                TokenKind::Plus,
                TokenKind::Minus,
            ],
            found,
        })),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Number(num) => num.fmt(f),
            Expr::Variable(sym) => sym.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Call(call) => call.fmt(f),
        }
    }
}
