//! The abstract syntax tree produced by the [`Parser`](super::Parser).
//!
//! Every node records the region of the source code it was parsed from, so that errors found
//! while working with the tree can point back at the input.

pub mod binary;
pub mod call;
pub mod expr;
pub mod literal;
pub mod unary;

pub use binary::Binary;
pub use call::Call;
pub use expr::Expr;
pub use literal::{LitNum, LitSym};
pub use unary::Unary;
