//! Bottom-up simplification of expressions.
//!
//! The children of a node are simplified first, then the rules for the node's operator in
//! [`rules`] are applied to the simplified children. The rules remove identity elements, fold
//! constant subexpressions into numbers, collapse double negation and merge numeric coefficients,
//! so that `2 * (3 * x)` becomes `6x` and `(4 * x) / 2` becomes `2x`.
//!
//! ```
//! use calc_compute::symbolic::{simplify, SymExpr};
//! use calc_parser::parser::{ast::Expr, Parser};
//!
//! let ast = Parser::new("0 + 2 * (x * 3) ^ 1").try_parse_full::<Expr>().unwrap();
//! let simplified = simplify(&SymExpr::try_from(ast).unwrap()).unwrap();
//! assert_eq!(simplified.to_string(), "6x");
//! ```
//!
//! Simplification never fails, except for a division whose divisor simplifies to the number
//! zero. Constant subexpressions that cannot be evaluated, such as `sqrt(-1)`, are left as they
//! are.

pub mod rules;

use calc_error::Error;
use super::SymExpr;

/// Simplifies the given expression.
pub fn simplify(expr: &SymExpr) -> Result<SymExpr, Error> {
    let simplified = match expr {
        SymExpr::Number(_) | SymExpr::Variable(_) => return Ok(expr.clone()),
        SymExpr::Binary(op, lhs, rhs) => rules::binary(*op, simplify(lhs)?, simplify(rhs)?)?,
        SymExpr::Unary(op, operand) => rules::unary::unary(*op, simplify(operand)?),
        SymExpr::Call(name, args) => {
            let args = args.iter().map(simplify).collect::<Result<Vec<_>, _>>()?;
            rules::call(name, args)
        },
    };

    if simplified != *expr {
        log::trace!("simplified `{}` to `{}`", expr, simplified);
    }

    Ok(simplified)
}

impl SymExpr {
    /// Simplifies the expression. See [`simplify()`].
    pub fn simplify(&self) -> Result<SymExpr, Error> {
        simplify(self)
    }
}
