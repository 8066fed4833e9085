//! Expression parser
//!
//! This module transforms a line of text into an expression tree:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser state, helpers and the [`parse_exp`] entry point
//! - `expressions`: one recursive-descent method per grammar level
//! - [`ast`]: Expression tree definitions
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser. Binary levels loop to build
//! left-associative chains; assignment recurses to the right.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;

pub use parse::parse_exp;
