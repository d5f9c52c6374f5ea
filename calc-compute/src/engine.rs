//! A single entry point that parses an expression and applies the symbolic operations to it.

use calc_error::Error;
use calc_parser::parser::{ast::expr::Expr as AstExpr, Parser};
use crate::numerical::{ctxt::Ctxt, eval::Eval};
use crate::symbolic::{self, error::NoExpression, SymExpr};

/// Holds one expression and applies operations to it.
///
/// The expression is replaced by every call to [`Engine::parse_from_string`]. If parsing fails,
/// the engine holds no expression, and every other operation fails with [`NoExpression`] until
/// an expression is parsed successfully.
///
/// ```
/// use calc_compute::{numerical::ctxt::Ctxt, Engine};
///
/// let mut engine = Engine::new();
/// engine.parse_from_string("2*x - 3").unwrap();
/// assert_eq!(engine.solve("x").unwrap().to_string(), "1.5");
///
/// let ctxt = [("x", 2.0)].into_iter().collect::<Ctxt>();
/// assert_eq!(engine.evaluate(&ctxt).unwrap(), 1.0);
///
/// assert!(engine.parse_from_string("2 +").is_err());
/// assert_eq!(engine.last_error(), Some("unexpected end of input"));
/// assert!(engine.simplify().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    /// The expression being worked on.
    expr: Option<SymExpr>,

    /// The message of the error that caused the last parse to fail.
    last_error: Option<String>,
}

impl Engine {
    /// Creates an engine that holds no expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the input and converts it to a symbolic expression, which replaces the held
    /// expression.
    ///
    /// On failure, the engine is left without an expression and the error message is kept in
    /// [`Engine::last_error`].
    pub fn parse_from_string(&mut self, input: &str) -> Result<&SymExpr, Error> {
        self.expr = None;

        let parsed = Parser::new(input)
            .try_parse_full::<AstExpr>()
            .and_then(|ast| SymExpr::try_from(&ast));

        match parsed {
            Ok(expr) => {
                log::debug!("parsed `{}` as `{}`", input, expr);
                self.last_error = None;
                Ok(self.expr.insert(expr))
            },
            Err(err) => {
                log::debug!("failed to parse `{}`: {}", input, err);
                self.last_error = Some(err.message());
                Err(err)
            },
        }
    }

    /// Returns the held expression, if any.
    pub fn expression(&self) -> Option<&SymExpr> {
        self.expr.as_ref()
    }

    /// Returns the message of the error that caused the last parse to fail. This is cleared by a
    /// successful parse.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns the held expression, or a [`NoExpression`] error.
    fn held(&self) -> Result<&SymExpr, Error> {
        self.expr.as_ref().ok_or_else(|| Error::unspanned(NoExpression))
    }

    /// Differentiates the held expression with respect to the given variable.
    pub fn differentiate(&self, with: &str) -> Result<SymExpr, Error> {
        symbolic::derivative(self.held()?, with)
    }

    /// Integrates the held expression with respect to the given variable.
    pub fn integrate(&self, with: &str) -> Result<SymExpr, Error> {
        symbolic::integral(self.held()?, with)
    }

    /// Simplifies the held expression.
    pub fn simplify(&self) -> Result<SymExpr, Error> {
        symbolic::simplify(self.held()?)
    }

    /// Evaluates the held expression under the given bindings.
    pub fn evaluate(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        self.held()?.eval(ctxt)
    }

    /// Renders the held expression.
    pub fn to_display_string(&self) -> Result<String, Error> {
        Ok(self.held()?.to_string())
    }

    /// Solves `expr = 0` for the given variable, where `expr` is the held expression.
    pub fn solve(&self, var: &str) -> Result<SymExpr, Error> {
        symbolic::solve(self.held()?, var)
    }

    /// Factors the held expression.
    pub fn factor(&self) -> Result<Vec<SymExpr>, Error> {
        symbolic::factor(self.held()?)
    }
}
