//! Solving linear equations in one variable.

use calc_error::Error;
use calc_parser::parser::token::op::{BinOpKind, UnaryOpKind};
use super::{error::UnsupportedEquation, simplify, SymExpr};

/// Creates an [`UnsupportedEquation`] error with the given reason.
fn unsupported(reason: impl Into<String>) -> Error {
    Error::unspanned(UnsupportedEquation { reason: reason.into() })
}

/// Returns the coefficient `a` of the term `a*v`, if the expression is a term of that form.
///
/// The accepted forms are `v`, `c*v`, `v*c`, `v/c`, `-t` and `+t`, where `c` is constant and `t`
/// is itself one of these forms.
fn linear_coefficient(term: &SymExpr, var: &str) -> Option<SymExpr> {
    match term {
        SymExpr::Variable(name) if name == var => Some(SymExpr::Number(1.0)),
        SymExpr::Binary(BinOpKind::Mul, lhs, rhs) => {
            if lhs.is_var(var) && rhs.is_constant() {
                Some((**rhs).clone())
            } else if rhs.is_var(var) && lhs.is_constant() {
                Some((**lhs).clone())
            } else {
                None
            }
        },
        SymExpr::Binary(BinOpKind::Div, lhs, rhs) if lhs.is_var(var) && rhs.is_constant() => {
            Some(SymExpr::Number(1.0) / (**rhs).clone())
        },
        SymExpr::Unary(UnaryOpKind::Negate, operand) => linear_coefficient(operand, var).map(|a| -a),
        SymExpr::Unary(UnaryOpKind::Plus, operand) => linear_coefficient(operand, var),
        _ => None,
    }
}

/// Solves the equation `expr = 0` for the variable `var`, returning the simplified root.
///
/// The simplified expression must be the sum or difference of a linear term in `var` and a
/// constant, such as `2x - 3` or `4 + x/2`:
///
/// - `a*v + c = 0` and `c + a*v = 0` give `v = -c/a`.
/// - `a*v - c = 0` and `c - a*v = 0` give `v = c/a`.
///
/// Every other equation is reported as [`UnsupportedEquation`].
pub fn solve(expr: &SymExpr, var: &str) -> Result<SymExpr, Error> {
    let root = simplify(expr)?;
    log::trace!("solving `{} = 0` for `{}`", root, var);

    let SymExpr::Binary(op @ (BinOpKind::Add | BinOpKind::Sub), lhs, rhs) = &root else {
        return Err(unsupported(
            "the equation must be a sum or difference of a linear term and a constant",
        ));
    };

    let (term, constant) = if rhs.is_constant() {
        (&**lhs, (**rhs).clone())
    } else if lhs.is_constant() {
        (&**rhs, (**lhs).clone())
    } else {
        return Err(unsupported("one side of the sum or difference must be constant"));
    };

    let coefficient = linear_coefficient(term, var)
        .ok_or_else(|| unsupported(format!("`{}` is not a linear term in `{}`", term, var)))?;
    let coefficient = simplify(&coefficient)?;
    if coefficient.is_zero() {
        return Err(unsupported(format!("the coefficient of `{}` is zero", var)));
    }
    log::trace!("isolating `{}` with coefficient `{}`", var, coefficient);

    let numerator = match op {
        BinOpKind::Add => -constant,
        _ => constant,
    };
    simplify(&(numerator / coefficient))
}

impl SymExpr {
    /// Solves `self = 0` for the given variable. See [`solve()`].
    pub fn solve(&self, var: &str) -> Result<SymExpr, Error> {
        solve(self, var)
    }
}

#[cfg(test)]
mod tests {
    use calc_parser::parser::{ast::Expr, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    fn convert(input: &str) -> SymExpr {
        let ast = Parser::new(input).try_parse_full::<Expr>().unwrap();
        SymExpr::try_from(ast).unwrap()
    }

    fn solved(input: &str) -> String {
        solve(&convert(input), "x").unwrap().to_string()
    }

    #[test]
    fn linear_forms() {
        assert_eq!(solved("2*x - 3"), "1.5");
        assert_eq!(solved("2x + 4"), "-2");
        assert_eq!(solved("3 + x"), "-3");
        assert_eq!(solved("6 - 3x"), "2");
        assert_eq!(solved("x/4 - 1"), "4");
        assert_eq!(solved("-x + 5"), "5");
        assert_eq!(solved("x * 0.5 + 1"), "-2");
    }

    #[test]
    fn simplifies_before_solving() {
        assert_eq!(solved("0 + 2 * (x * 5) - 20"), "2");
        assert_eq!(solved("x - (1 + 2)"), "3");
    }

    #[test]
    fn other_variables() {
        assert_eq!(solve(&convert("2y - 8"), "y").unwrap().to_string(), "4");
        assert!(solve(&convert("2y - 8"), "x").unwrap_err().is::<UnsupportedEquation>());
    }

    #[test]
    fn unsupported_equations() {
        for input in ["x", "x^2 - 4", "x + y", "x * x + 1", "sin(x) - 1", "0x + 1", "5", "2x * 3"] {
            let err = solve(&convert(input), "x").unwrap_err();
            assert!(err.is::<UnsupportedEquation>(), "solving `{}`", input);
        }
    }
}
