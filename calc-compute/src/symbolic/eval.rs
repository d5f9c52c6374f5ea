use calc_parser::parser::token::op::UnaryOpKind;
use crate::funcs::{apply_binary, apply_unary};
use crate::numerical::{
    ctxt::Ctxt,
    error::{kind::{UndefinedFunction, UndefinedVariable, WrongArgumentCount}, Error},
    eval::Eval,
};
use super::SymExpr;

/// Evaluates symbolic expressions with the same semantics as the AST. Errors carry no spans.
impl Eval for SymExpr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Variable(name) => ctxt.get_var(name).ok_or_else(|| {
                Error::unspanned(UndefinedVariable {
                    name: name.clone(),
                    suggestions: ctxt.get_similar_vars(name),
                })
            }),
            Self::Binary(op, lhs, rhs) => {
                let left = lhs.eval(ctxt)?;
                let right = rhs.eval(ctxt)?;
                apply_binary(*op, left, right).map_err(|err| err.into_error(Vec::new()))
            },
            Self::Unary(op, operand) => {
                let value = operand.eval(ctxt)?;
                apply_unary(*op, value).map_err(|err| err.into_error(Vec::new()))
            },
            Self::Call(name, args) => {
                let kind = UnaryOpKind::from_function_name(name)
                    .ok_or_else(|| Error::unspanned(UndefinedFunction { name: name.clone() }))?;
                let [arg] = args.as_slice() else {
                    return Err(Error::unspanned(WrongArgumentCount {
                        name: name.clone(),
                        given: args.len(),
                    }));
                };

                let value = arg.eval(ctxt)?;
                apply_unary(kind, value).map_err(|err| err.into_error(Vec::new()))
            },
        }
    }
}

impl SymExpr {
    /// Evaluates the expression under the given variable bindings.
    pub fn evaluate(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        self.eval(ctxt)
    }
}
