//! Sexl IR - shared data types for the evaluation pipeline.
//!
//! This crate contains the types every stage exchanges:
//! - [`Token`]: lexer output
//! - [`Node`]: parser output (the AST)
//! - [`Value`] and [`ValueMap`]: the dynamic value model produced by evaluation
//!
//! All types are plain owned data: an AST never changes after parsing, so the
//! same tree can be evaluated any number of times.

pub mod ast;
mod token;
pub mod value;

pub use ast::Node;
pub use token::Token;
pub use value::{Value, ValueMap};
