//! Evaluation and symbolic manipulation of the expressions produced by [`calc_parser`].
//!
//! - [`numerical`] evaluates the AST directly under a [`Ctxt`](numerical::ctxt::Ctxt) of
//!   variable bindings, reporting errors that point back at the source code.
//! - [`symbolic`] converts the AST into a [`SymExpr`](symbolic::SymExpr), which supports
//!   differentiation, integration, simplification, linear equation solving and factoring.
//! - [`Engine`] ties both together behind a single parse-then-manipulate API.
//!
//! ```
//! use calc_compute::Engine;
//!
//! let mut engine = Engine::new();
//! engine.parse_from_string("x^2 + 3x").unwrap();
//!
//! let derivative = engine.differentiate("x").unwrap();
//! assert_eq!(derivative.simplify().unwrap().to_string(), "(2x + 3)");
//! ```

pub mod engine;
pub mod funcs;
pub mod numerical;
pub mod symbolic;

pub use engine::Engine;
