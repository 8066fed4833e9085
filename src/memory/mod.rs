//! Memory model for the interpreter
//!
//! This module provides the storage abstractions:
//! - [`value`]: the [`Address`] type and the [`Binding`] view row
//! - [`context`]: the [`EvaluationContext`] symbol table
//!
//! # Addressing
//!
//! Every variable name owns one synthetic address, handed out from a fixed
//! base (1000 by default) in order of first use:
//!
//! ```text
//! name  ──address_of──▶  address  ──value_at──▶  value
//! ```
//!
//! `&x` yields the middle column, plain `x` the right one, and `*p` walks the
//! chain twice: the value stored for `p` is used as the next address.

pub mod context;
pub mod value;

pub use context::EvaluationContext;
pub use value::{Address, Binding};
