mod binary;
mod call;
mod expr;
mod literal;
mod unary;

use super::{ctxt::Ctxt, error::Error};

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a number, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a number, using an empty context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Ctxt::default())
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use calc_parser::parser::{ast::expr::Expr, Parser};
    use crate::numerical::error::kind::{
        DivisionByZero,
        DomainError,
        UndefinedFunction,
        UndefinedVariable,
        WrongArgumentCount,
    };
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(input: &str) -> Expr {
        Parser::new(input).try_parse_full::<Expr>().unwrap()
    }

    fn eval_with(input: &str, vars: &[(&str, f64)]) -> Result<f64, Error> {
        let ctxt = vars.iter().copied().collect::<Ctxt>();
        parse(input).eval(&ctxt)
    }

    #[test]
    fn binary_expr() {
        assert_eq!(parse("1 + 2").eval_default().unwrap(), 3.0);
    }

    #[test]
    fn precedence() {
        assert_eq!(parse("2 + 3 * 4").eval_default().unwrap(), 14.0);
    }

    #[test]
    fn right_associative_power() {
        assert_eq!(parse("2^3^2").eval_default().unwrap(), 512.0);
    }

    #[test]
    fn parenthesized() {
        assert_eq!(parse("((1 + 9) / 5) * 3").eval_default().unwrap(), 6.0);
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(eval_with("2x", &[("x", 5.0)]).unwrap(), 10.0);
        assert_eq!(eval_with("2*x", &[("x", 5.0)]).unwrap(), 10.0);
        assert_eq!(eval_with("3(x + 1)", &[("x", 1.0)]).unwrap(), 6.0);
    }

    #[test]
    fn unary_operators() {
        assert_eq!(parse("-2^2").eval_default().unwrap(), 4.0);
        assert_eq!(parse("-(2^2)").eval_default().unwrap(), -4.0);
        assert_eq!(parse("+-+3").eval_default().unwrap(), -3.0);
    }

    #[test]
    fn functions() {
        assert_float_absolute_eq!(parse("sin(0) + cos(0)").eval_default().unwrap(), 1.0);
        assert_float_absolute_eq!(parse("sqrt(16) * log(100)").eval_default().unwrap(), 8.0);
        assert_float_absolute_eq!(parse("abs(-3) - ln(1)").eval_default().unwrap(), 3.0);
        assert_float_absolute_eq!(eval_with("tan(x)", &[("x", 0.5)]).unwrap(), 0.5f64.tan());
    }

    #[test]
    fn undefined_variable() {
        let err = eval_with("3 * y", &[("x", 1.0), ("yy", 2.0)]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<UndefinedVariable>(),
            Some(&UndefinedVariable {
                name: "y".to_string(),
                suggestions: vec!["x".to_string(), "yy".to_string()],
            }),
        );
        assert_eq!(err.spans, vec![4..5]);
    }

    #[test]
    fn division_by_zero() {
        let err = parse("1/0").eval_default().unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.spans, vec![2..3]);

        let err = parse("4 / (2 - 2)").eval_default().unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.spans, vec![5..10]);
    }

    #[test]
    fn domain_errors() {
        let err = parse("sqrt(-1)").eval_default().unwrap_err();
        assert_eq!(
            err.downcast_ref::<DomainError>(),
            Some(&DomainError { operation: "sqrt", value: -1.0 }),
        );
        assert_eq!(err.spans, vec![0..8]);

        assert!(parse("ln(0)").eval_default().unwrap_err().is::<DomainError>());
        assert!(parse("log(-5)").eval_default().unwrap_err().is::<DomainError>());
    }

    #[test]
    fn wrong_argument_count() {
        let err = parse("sin(1, 2)").eval_default().unwrap_err();
        assert_eq!(
            err.downcast_ref::<WrongArgumentCount>(),
            Some(&WrongArgumentCount { name: "sin".to_string(), given: 2 }),
        );
        assert!(parse("abs()").eval_default().unwrap_err().is::<WrongArgumentCount>());
    }

    #[test]
    fn undefined_function() {
        use calc_parser::parser::ast::{call::Call, literal::LitSym};

        let call = Expr::Call(Call {
            name: LitSym { name: "f".to_string(), span: 0..1 },
            args: vec![parse("1")],
            span: 0..4,
            paren_span: 1..4,
        });
        let err = call.eval_default().unwrap_err();
        assert!(err.is::<UndefinedFunction>());
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn error_messages() {
        let err = eval_with("z", &[]).unwrap_err();
        assert_eq!(err.message(), "`z` is not defined");

        let err = parse("sqrt(-4)").eval_default().unwrap_err();
        assert_eq!(err.message(), "`sqrt` is not defined for -4");
    }
}
