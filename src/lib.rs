//! # Introduction
//!
//! ptrcalc parses and evaluates single-line integer expressions over named
//! variables, with C-style `&x` (address of) and `*p` (dereference) operators
//! acting on a flat, synthetic address space.
//!
//! ## Evaluation pipeline
//!
//! ```text
//! Source → Lexer → Parser → Expression → Evaluator ⇄ EvaluationContext
//!                               └──────→ Printer
//! ```
//!
//! 1. [`parser`]: tokenises a line and builds an [`Expression`] tree.
//! 2. [`interpreter`]: walks the tree against an [`EvaluationContext`],
//!    right operand first.
//! 3. [`memory`]: the symbol table handing out consecutive addresses from a
//!    base (1000 by default) and the address → value store.
//! 4. [`printer`]: renders a tree back to text with minimal parentheses.
//! 5. [`session`]: a long-lived context plus a bounded transcript, shared by
//!    the command-line front ends.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use ptrcalc::{evaluate, parse_exp, render, EvaluationContext};
//!
//! let mut ctx = EvaluationContext::new();
//! evaluate(&parse_exp("x = 5").unwrap(), &mut ctx).unwrap();
//! evaluate(&parse_exp("p = &x").unwrap(), &mut ctx).unwrap();
//!
//! let expr = parse_exp("(*p) * ((2))").unwrap();
//! assert_eq!(render(&expr), "*p * 2");
//! assert_eq!(evaluate(&expr, &mut ctx), Ok(10));
//! ```

pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod printer;
pub mod session;
pub mod ui;

pub use interpreter::errors::RuntimeError;
pub use interpreter::evaluate;
pub use memory::EvaluationContext;
pub use parser::ast::Expression;
pub use parser::parse_exp;
pub use printer::render;
pub use session::Session;
