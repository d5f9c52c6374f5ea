use calc_parser::parser::{fmt::fmt_number, token::op::{BinOpKind, UnaryOpKind}};
use std::fmt::{Display, Formatter, Result};
use super::SymExpr;

/// Writes a product where `coeff` is a number and `operand` is not, attaching the coefficient to
/// the operand as in `2x` or `-sin(x)`.
fn fmt_coefficient(f: &mut Formatter, coeff: f64, operand: &SymExpr) -> Result {
    // prefix operands are parenthesized so that `2 * -x` does not print as `2-x`
    let wrap = matches!(operand, SymExpr::Unary(op, _) if op.is_prefix());

    if coeff == 1.0 {
        return write!(f, "{}", operand);
    } else if coeff == -1.0 {
        write!(f, "-")?;
    } else {
        fmt_number(f, coeff)?;
    }

    if wrap {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl Display for SymExpr {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Number(value) => fmt_number(f, *value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Binary(BinOpKind::Mul, lhs, rhs) => match (lhs.as_number(), rhs.as_number()) {
                (Some(lhs), Some(rhs)) => fmt_number(f, lhs * rhs),
                (Some(coeff), None) if !rhs.is_constant() => fmt_coefficient(f, coeff, rhs),
                (None, Some(coeff)) if !lhs.is_constant() => fmt_coefficient(f, coeff, lhs),
                _ => write!(f, "({} * {})", lhs, rhs),
            },
            Self::Binary(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
            Self::Unary(op @ (UnaryOpKind::Plus | UnaryOpKind::Negate), operand) => {
                write!(f, "{}{}", op, operand)
            },
            Self::Unary(op, operand) => write!(f, "{}({})", op, operand),
            Self::Call(name, args) => {
                write!(f, "{}(", name)?;
                let mut iter = args.iter();
                if let Some(arg) = iter.next() {
                    write!(f, "{}", arg)?;
                    for arg in iter {
                        write!(f, ", {}", arg)?;
                    }
                }
                write!(f, ")")
            },
        }
    }
}
