//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Algebraic expressions in this module are represented as a tree of [`SymExpr`] nodes. It
//! mirrors the [`calc_parser::parser::ast::Expr`] nodes produced by [`calc_parser`] one-to-one,
//! but without span information. Use [`TryFrom`] to convert an AST into a [`SymExpr`].
//!
//! # Operations
//!
//! - [`derivative()`]: differentiation with the sum, product, quotient, power and chain rules.
//! - [`integral()`]: integration of a small set of closed forms.
//! - [`simplify()`]: bottom-up removal of identities, constant folding and coefficient merging.
//! - [`solve()`]: the root of a linear equation in one variable.
//! - [`factor()`]: splitting of a few fixed shapes into factors.
//!
//! Evaluation goes through the same [`Eval`](crate::numerical::eval::Eval) trait as the AST.
//! None of these operations modify the expression they are given.
//!
//! ```
//! use calc_compute::symbolic::SymExpr;
//! use calc_parser::parser::{ast::Expr, Parser};
//!
//! let ast = Parser::new("x^2").try_parse_full::<Expr>().unwrap();
//! let expr = SymExpr::try_from(ast).unwrap();
//!
//! let antiderivative = expr.integrate("x").unwrap();
//! assert_eq!(antiderivative.simplify().unwrap().to_string(), "((x ^ 3) / 3)");
//!
//! let back = antiderivative.differentiate("x").unwrap();
//! assert_eq!(back.simplify().unwrap().to_string(), "(x ^ 2)");
//! ```

pub mod derivative;
pub mod error;
pub mod eval;
pub mod expr;
pub mod factor;
pub mod integral;
pub mod simplify;
pub mod solve;

pub use derivative::derivative;
pub use expr::SymExpr;
pub use factor::factor;
pub use integral::integral;
pub use simplify::simplify;
pub use solve::solve;
