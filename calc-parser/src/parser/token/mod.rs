//! Operator tokens of the expression grammar.

pub mod op;
