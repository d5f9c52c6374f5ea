//! Factoring of a few fixed shapes.
//!
//! This is not a general factoring algorithm. A simplified product is split into its two
//! operands, and `v^2 + v` is rewritten as `v * (v + 1)`. Every other expression is returned as
//! its own single factor, which does not mean that it cannot be factored.

use calc_error::Error;
use calc_parser::parser::token::op::BinOpKind;
use super::{simplify, SymExpr};

/// If the expression is `v^2 + v` for some variable `v`, returns `v`.
fn square_plus_self(expr: &SymExpr) -> Option<&str> {
    let SymExpr::Binary(BinOpKind::Add, lhs, rhs) = expr else {
        return None;
    };
    let (SymExpr::Binary(BinOpKind::Pow, base, exponent), SymExpr::Variable(var)) = (&**lhs, &**rhs) else {
        return None;
    };

    (base.is_var(var) && exponent.as_number() == Some(2.0)).then_some(var.as_str())
}

/// Factors the expression. The product of the returned factors evaluates to the same value as
/// the expression.
pub fn factor(expr: &SymExpr) -> Result<Vec<SymExpr>, Error> {
    let simplified = simplify(expr)?;

    if let Some(var) = square_plus_self(&simplified) {
        return Ok(vec![
            SymExpr::var(var),
            SymExpr::var(var) + SymExpr::Number(1.0),
        ]);
    }

    match simplified {
        SymExpr::Binary(BinOpKind::Mul, lhs, rhs) => Ok(vec![*lhs, *rhs]),
        other => Ok(vec![other]),
    }
}

impl SymExpr {
    /// Factors the expression. See [`factor()`].
    pub fn factor(&self) -> Result<Vec<SymExpr>, Error> {
        factor(self)
    }
}

#[cfg(test)]
mod tests {
    use calc_parser::parser::{ast::Expr, Parser};
    use crate::numerical::{ctxt::Ctxt, eval::Eval};
    use pretty_assertions::assert_eq;
    use super::*;

    fn convert(input: &str) -> SymExpr {
        let ast = Parser::new(input).try_parse_full::<Expr>().unwrap();
        SymExpr::try_from(ast).unwrap()
    }

    fn factored(input: &str) -> Vec<String> {
        factor(&convert(input))
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn square_plus_variable() {
        assert_eq!(factored("x^2 + x"), vec!["x", "(x + 1)"]);
        assert_eq!(factored("t^2 + t"), vec!["t", "(t + 1)"]);
        assert_eq!(factored("x^2 + x + 0"), vec!["x", "(x + 1)"]);
    }

    #[test]
    fn products() {
        assert_eq!(factored("(x + 1)(x - 1)"), vec!["(x + 1)", "(x - 1)"]);
        assert_eq!(factored("2 * 3x"), vec!["6", "x"]);
    }

    #[test]
    fn other_shapes_are_single_factors() {
        assert_eq!(factored("x^2 + y"), vec!["((x ^ 2) + y)"]);
        assert_eq!(factored("x + x^2"), vec!["(x + (x ^ 2))"]);
        assert_eq!(factored("x - 0"), vec!["x"]);
    }

    #[test]
    fn product_recreates_the_expression() {
        let ctxt = [("x", 1.7)].into_iter().collect::<Ctxt>();
        for input in ["x^2 + x", "3x(x + 2)", "sin(x) + 1"] {
            let expr = convert(input);
            let product = factor(&expr)
                .unwrap()
                .iter()
                .map(|factor| factor.eval(&ctxt).unwrap())
                .product::<f64>();
            assert!((product - expr.eval(&ctxt).unwrap()).abs() < 1e-12, "factoring `{}`", input);
        }
    }
}
