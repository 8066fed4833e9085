//! Expression evaluator
//!
//! This module provides the core evaluation logic:
//! - [`engine`]: the [`Interpreter`](engine::Interpreter) and the [`evaluate`] entry point
//! - [`errors`]: Runtime error types
//! - [`constants`]: Address-space and session defaults
//!
//! # Evaluation Model
//!
//! The evaluator walks the tree recursively. Compound nodes evaluate their right
//! operand first; assignment then stores into its target without evaluating it,
//! arithmetic evaluates the left operand and combines with checked math.

pub mod constants;
pub mod engine;
pub mod errors;
mod ops;

pub use engine::evaluate;
