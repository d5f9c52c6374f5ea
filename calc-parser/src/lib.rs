//! Lexer and recursive-descent parser for mathematical expressions such as `2x^2 + sin(x) / 3`.
//!
//! The [`tokenizer`] turns source text into [`Token`](tokenizer::Token)s, and the [`parser`]
//! builds an abstract syntax tree ([`parser::ast::Expr`]) from them:
//!
//! ```
//! use calc_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("2^3^2");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.to_string(), "(2 ^ (3 ^ 2))");
//! ```

pub mod parser;
pub mod tokenizer;
