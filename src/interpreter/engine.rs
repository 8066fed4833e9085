//! Tree-walking evaluator
//!
//! [`Interpreter`] borrows an [`EvaluationContext`] for the duration of one
//! evaluation and walks the tree recursively. Operator handling is split over
//! the `ops` modules as further `impl Interpreter` blocks:
//! - `ops::assign`: `=` including writes through `*p`
//! - `ops::binary`: checked `+ - * /`
//! - `ops::unary`: `&x` and `*p`

use crate::interpreter::errors::RuntimeError;
use crate::memory::EvaluationContext;
use crate::parser::ast::{BinOp, Expression};

/// Evaluate `expr` against `context` and return its integer value.
///
/// On error nothing more is evaluated; stores already performed by nested
/// assignments that completed before the failure are kept.
pub fn evaluate(expr: &Expression, context: &mut EvaluationContext) -> Result<i32, RuntimeError> {
    Interpreter::new(context).evaluate_expr(expr)
}

/// Evaluator state for a single expression
pub struct Interpreter<'ctx> {
    pub(crate) context: &'ctx mut EvaluationContext,
}

impl<'ctx> Interpreter<'ctx> {
    pub fn new(context: &'ctx mut EvaluationContext) -> Self {
        Interpreter { context }
    }

    /// Evaluate an expression and return its value
    pub fn evaluate_expr(&mut self, expr: &Expression) -> Result<i32, RuntimeError> {
        match expr {
            Expression::Constant(value) => Ok(*value),

            Expression::Identifier(name) => self.evaluate_identifier(name),

            Expression::Compound { op, lhs, rhs } => {
                // The right operand always goes first, for every operator
                let right = self.evaluate_expr(rhs)?;

                match op {
                    BinOp::Assign => self.evaluate_assignment(lhs, right),
                    BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div => {
                        let left = self.evaluate_expr(lhs)?;
                        self.evaluate_arithmetic(*op, left, right)
                    }
                }
            }

            Expression::UnaryOp { op, operand } => self.evaluate_unary_op(*op, operand),
        }
    }

    fn evaluate_identifier(&mut self, name: &str) -> Result<i32, RuntimeError> {
        if !self.context.is_defined(name) {
            return Err(RuntimeError::UndefinedVariable {
                name: name.to_string(),
            });
        }

        let address = self.context.address_of(name);
        self.context.value_at(address)
    }
}
