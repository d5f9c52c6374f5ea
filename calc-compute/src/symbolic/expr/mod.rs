//! A representation of mathematical expressions that carries the algebraic operations.
//!
//! [`SymExpr`] has the same five shapes as the [`Expr`](AstExpr) produced by `calc_parser`, but
//! drops all span information. Conversion from the AST is a one-to-one structural mapping done
//! through [`TryFrom`]:
//!
//! ```
//! use calc_compute::symbolic::SymExpr;
//! use calc_parser::parser::{ast::Expr, Parser};
//!
//! let ast = Parser::new("2x + sin(x)").try_parse_full::<Expr>().unwrap();
//! let expr = SymExpr::try_from(&ast).unwrap();
//! assert_eq!(
//!     expr,
//!     SymExpr::num(2.0) * SymExpr::var("x") + SymExpr::call("sin", vec![SymExpr::var("x")]),
//! );
//! ```
//!
//! Every operation produces a new tree; a [`SymExpr`] is never modified in place.

mod fmt;

use calc_error::Error;
use calc_parser::parser::{
    ast::expr::Expr as AstExpr,
    token::op::{BinOpKind, UnaryOpKind},
};
use std::ops::{Add, Div, Mul, Neg, Sub};
use super::error::UnrecognizedNode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A symbolic mathematical expression.
///
/// The [`PartialEq`] implementation compares the trees structurally: `x + 1` and `1 + x` are
/// not equal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymExpr {
    /// A number, such as `2` or `0.5`.
    Number(f64),

    /// A variable, such as `x`.
    Variable(String),

    /// A binary operation, such as `x + 1`.
    Binary(BinOpKind, Box<SymExpr>, Box<SymExpr>),

    /// A prefix operator or math function applied to one operand, such as `-x` or `sin(x)`.
    Unary(UnaryOpKind, Box<SymExpr>),

    /// A function call by name, such as `ln(x)`. This is how the parser encodes calls; it
    /// evaluates exactly like the [`SymExpr::Unary`] form of the same function.
    Call(String, Vec<SymExpr>),
}

impl SymExpr {
    /// Creates a number.
    pub fn num(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a variable.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a binary operation.
    pub fn binary(op: BinOpKind, lhs: SymExpr, rhs: SymExpr) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Creates a unary operation.
    pub fn unary(op: UnaryOpKind, operand: SymExpr) -> Self {
        Self::Unary(op, Box::new(operand))
    }

    /// Creates a function call.
    pub fn call(name: impl Into<String>, args: Vec<SymExpr>) -> Self {
        Self::Call(name.into(), args)
    }

    /// Raises the expression to the given power.
    pub fn pow(self, exponent: SymExpr) -> Self {
        Self::binary(BinOpKind::Pow, self, exponent)
    }

    /// Returns the value of the expression if it is a [`SymExpr::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is the given variable.
    pub fn is_var(&self, name: &str) -> bool {
        matches!(self, Self::Variable(var) if var == name)
    }

    /// Returns true if every leaf of the expression is a number.
    pub fn is_constant(&self) -> bool {
        match self {
            Self::Number(_) => true,
            Self::Variable(_) => false,
            Self::Binary(_, lhs, rhs) => lhs.is_constant() && rhs.is_constant(),
            Self::Unary(_, operand) => operand.is_constant(),
            Self::Call(_, args) => args.iter().all(Self::is_constant),
        }
    }

    /// Returns true if the expression is clearly zero.
    ///
    /// This only looks at numbers and the prefix operators, so it can return `false` for
    /// expressions that do evaluate to zero, such as `x - x`.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Number(value) => *value == 0.0,
            Self::Unary(UnaryOpKind::Plus | UnaryOpKind::Negate, operand) => operand.is_zero(),
            _ => false,
        }
    }

    /// Returns true if the expression is clearly one. Like [`SymExpr::is_zero`], this can return
    /// `false` for expressions that evaluate to one.
    pub fn is_one(&self) -> bool {
        match self {
            Self::Number(value) => *value == 1.0,
            Self::Unary(UnaryOpKind::Plus, operand) => operand.is_one(),
            Self::Unary(UnaryOpKind::Negate, operand) => {
                matches!(**operand, Self::Number(value) if value == -1.0)
            },
            _ => false,
        }
    }
}

impl TryFrom<&AstExpr> for SymExpr {
    type Error = Error;

    fn try_from(expr: &AstExpr) -> Result<Self, Self::Error> {
        Ok(match expr {
            AstExpr::Number(num) => Self::Number(num.value),
            AstExpr::Variable(sym) => Self::Variable(sym.name.clone()),
            AstExpr::Binary(binary) => Self::binary(
                binary.op.kind,
                Self::try_from(&*binary.lhs)?,
                Self::try_from(&*binary.rhs)?,
            ),
            AstExpr::Unary(unary) => Self::unary(unary.op.kind, Self::try_from(&*unary.operand)?),
            AstExpr::Call(call) => Self::Call(
                call.name.name.clone(),
                call.args
                    .iter()
                    .map(Self::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            _ => return Err(Error::new(vec![expr.span()], UnrecognizedNode)),
        })
    }
}

impl TryFrom<AstExpr> for SymExpr {
    type Error = Error;

    fn try_from(expr: AstExpr) -> Result<Self, Self::Error> {
        Self::try_from(&expr)
    }
}

impl From<f64> for SymExpr {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Implements an arithmetic operator for [`SymExpr`] that builds the [`SymExpr::Binary`] node
/// without simplifying it.
macro_rules! binary_op {
    ($trait:ident, $method:ident, $kind:ident) => {
        impl $trait for SymExpr {
            type Output = SymExpr;

            fn $method(self, rhs: SymExpr) -> SymExpr {
                SymExpr::binary(BinOpKind::$kind, self, rhs)
            }
        }
    };
}

binary_op!(Add, add, Add);
binary_op!(Sub, sub, Sub);
binary_op!(Mul, mul, Mul);
binary_op!(Div, div, Div);

impl Neg for SymExpr {
    type Output = SymExpr;

    fn neg(self) -> SymExpr {
        SymExpr::unary(UnaryOpKind::Negate, self)
    }
}
