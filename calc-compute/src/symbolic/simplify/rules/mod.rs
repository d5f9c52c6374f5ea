//! Simplification rules.
//!
//! Each rule takes the operands of a node, which must already be simplified, and returns the
//! simplified node. Rules that rebuild a node out of existing operands call other rules instead
//! of the node constructors, so the result is simplified too.

pub mod add;
pub mod multiply;
pub mod power;
pub mod unary;

use calc_error::Error;
use calc_parser::parser::token::op::BinOpKind;
use crate::numerical::eval::Eval;
use crate::symbolic::SymExpr;

/// Replaces a constant expression with its value. The expression is returned unchanged if it is
/// not constant, fails to evaluate, or evaluates to a non-finite number.
pub(crate) fn fold(expr: SymExpr) -> SymExpr {
    if !expr.is_constant() {
        return expr;
    }

    match expr.eval_default() {
        Ok(value) if value.is_finite() => SymExpr::Number(value),
        _ => expr,
    }
}

/// Applies the rules of the given binary operator.
pub fn binary(op: BinOpKind, lhs: SymExpr, rhs: SymExpr) -> Result<SymExpr, Error> {
    Ok(match op {
        BinOpKind::Add => add::add(lhs, rhs),
        BinOpKind::Sub => add::sub(lhs, rhs),
        BinOpKind::Mul => multiply::mul(lhs, rhs),
        BinOpKind::Div => multiply::div(lhs, rhs)?,
        BinOpKind::Pow => power::pow(lhs, rhs),
    })
}

/// Folds a function call whose arguments are all constant.
pub fn call(name: &str, args: Vec<SymExpr>) -> SymExpr {
    fold(SymExpr::call(name, args))
}
