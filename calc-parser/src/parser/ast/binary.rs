use crate::parser::{ast::expr::Expr, token::op::BinOp};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary operation, such as `1 + 2` or the implicit multiplication in `2x`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary operation.
    pub lhs: Box<Expr>,

    /// The operator of the binary operation.
    pub op: BinOp,

    /// The right-hand side of the binary operation.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary operation was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Creates a binary operation spanning from the start of `lhs` to the end of `rhs`.
    pub fn new(lhs: Expr, op: BinOp, rhs: Expr) -> Self {
        let span = lhs.span().start..rhs.span().end;
        Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {} {})", self.lhs, self.op.kind, self.rhs)
    }
}
