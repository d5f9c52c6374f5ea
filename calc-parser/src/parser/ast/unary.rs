use crate::parser::{
    ast::expr::{parse_primary, Expr},
    error::Error,
    token::op::UnaryOp,
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary operation, such as `-x`.
///
/// The parser produces unary operations for the prefix `+` and `-` operators only. Trees built
/// by hand may also use the function kinds of [`UnaryOpKind`](crate::parser::token::op::UnaryOpKind).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary operation.
    pub operand: Box<Expr>,

    /// The operator of the unary operation.
    pub op: UnaryOp,

    /// The region of the source code that this unary operation was parsed from.
    pub span: Range<usize>,
}

impl Parse for Unary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let op = input.try_parse::<UnaryOp>()?;
        let operand = parse_primary(input)?;
        let span = op.span.start..operand.span().end;

        Ok(Self {
            operand: Box::new(operand),
            op,
            span,
        })
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.op.kind.is_prefix() {
            write!(f, "{}{}", self.op.kind, self.operand)
        } else {
            write!(f, "{}({})", self.op.kind, self.operand)
        }
    }
}
