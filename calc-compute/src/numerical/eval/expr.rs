use calc_parser::parser::ast::expr::Expr;
use crate::numerical::{ctxt::Ctxt, error::Error, eval::Eval};
use crate::symbolic::error::UnrecognizedNode;

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Expr::Number(num) => num.eval(ctxt),
            Expr::Variable(sym) => sym.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
            _ => Err(Error::new(vec![self.span()], UnrecognizedNode)),
        }
    }
}
