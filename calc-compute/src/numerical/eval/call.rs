use calc_parser::parser::{ast::call::Call, token::op::UnaryOpKind};
use crate::funcs::apply_unary;
use crate::numerical::{
    ctxt::Ctxt,
    error::{kind::{UndefinedFunction, WrongArgumentCount}, Error},
    eval::Eval,
};

impl Eval for Call {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let kind = UnaryOpKind::from_function_name(&self.name.name).ok_or_else(|| {
            Error::new(vec![self.name.span.clone()], UndefinedFunction {
                name: self.name.name.clone(),
            })
        })?;

        let [arg] = self.args.as_slice() else {
            return Err(Error::new(self.outer_span().to_vec(), WrongArgumentCount {
                name: self.name.name.clone(),
                given: self.args.len(),
            }));
        };

        let value = arg.eval(ctxt)?;
        apply_unary(kind, value).map_err(|err| err.into_error(vec![self.span()]))
    }
}
