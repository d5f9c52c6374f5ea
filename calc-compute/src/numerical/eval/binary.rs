use calc_parser::parser::ast::binary::Binary;
use crate::funcs::apply_binary;
use crate::numerical::{ctxt::Ctxt, error::Error, eval::Eval};

impl Eval for Binary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let left = self.lhs.eval(ctxt)?;
        let right = self.rhs.eval(ctxt)?;

        // the only failing binary operation is division, so point at the divisor
        apply_binary(self.op.kind, left, right)
            .map_err(|err| err.into_error(vec![self.rhs.span()]))
    }
}
