use calc_parser::parser::ast::unary::Unary;
use crate::funcs::apply_unary;
use crate::numerical::{ctxt::Ctxt, error::Error, eval::Eval};

impl Eval for Unary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let operand = self.operand.eval(ctxt)?;
        apply_unary(self.op.kind, operand)
            .map_err(|err| err.into_error(vec![self.span.clone()]))
    }
}
