//! Numerical evaluation of the AST produced by [`calc_parser`].
//!
//! Errors produced here point at the node of the source code that failed to evaluate.

pub mod ctxt;
pub mod error;
pub mod eval;
