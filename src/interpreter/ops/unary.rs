//! Unary pointer operator evaluation

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::{Expression, UnOp};

impl Interpreter<'_> {
    pub(crate) fn evaluate_unary_op(
        &mut self,
        op: UnOp,
        operand: &Expression,
    ) -> Result<i32, RuntimeError> {
        match op {
            UnOp::AddrOf => self.evaluate_addr_of_op(operand),
            UnOp::Deref => self.evaluate_deref_op(operand),
        }
    }

    /// `&x`: the address of `x`, allocating one if `x` is new
    fn evaluate_addr_of_op(&mut self, operand: &Expression) -> Result<i32, RuntimeError> {
        match operand {
            Expression::Identifier(name) => Ok(self.context.address_of(name)),
            _ => Err(RuntimeError::InvalidOperation {
                message: format!("Cannot take the address of {}", operand),
            }),
        }
    }

    /// `*p`: the value stored at the address stored in `p`
    fn evaluate_deref_op(&mut self, operand: &Expression) -> Result<i32, RuntimeError> {
        let name = match operand {
            Expression::Identifier(name) if self.context.is_defined(name) => name,
            _ => {
                return Err(RuntimeError::InvalidOperation {
                    message: format!("Cannot dereference {}", operand),
                })
            }
        };

        let slot = self.context.address_of(name);
        let target = self
            .context
            .value_at(slot)
            .map_err(|_| RuntimeError::InvalidOperation {
                message: format!("Cannot dereference {}: it holds no address", name),
            })?;

        self.context
            .value_at(target)
            .map_err(|_| RuntimeError::InvalidOperation {
                message: format!("Cannot dereference {}: nothing stored at address {}", name, target),
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::engine::evaluate;
    use crate::interpreter::errors::RuntimeError;
    use crate::memory::EvaluationContext;
    use crate::parser::ast::Expression;
    use crate::parser::parse_exp;

    fn run(ctx: &mut EvaluationContext, source: &str) -> Result<i32, RuntimeError> {
        evaluate(&parse_exp(source).expect("parse failed"), ctx)
    }

    #[test]
    fn test_address_of_allocates_fresh_name() {
        let mut ctx = EvaluationContext::new();
        run(&mut ctx, "a = 1").unwrap();

        let addr = run(&mut ctx, "&x").unwrap();
        assert_eq!(addr, 1001);
        assert!(ctx.is_defined("x"));
        // Idempotent
        assert_eq!(run(&mut ctx, "&x"), Ok(addr));
        assert_eq!(run(&mut ctx, "&a"), Ok(1000));
    }

    #[test]
    fn test_deref_before_write_fails() {
        let mut ctx = EvaluationContext::new();
        run(&mut ctx, "&x").unwrap();

        assert!(matches!(
            run(&mut ctx, "*x"),
            Err(RuntimeError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn test_single_indirection() {
        let mut ctx = EvaluationContext::new();
        run(&mut ctx, "x = 5").unwrap();
        run(&mut ctx, "p = &x").unwrap();
        assert_eq!(run(&mut ctx, "*p"), Ok(5));
        assert_eq!(run(&mut ctx, "*p * 2 + 1"), Ok(11));
    }

    #[test]
    fn test_deref_to_unwritten_target_fails() {
        let mut ctx = EvaluationContext::new();
        run(&mut ctx, "p = &y").unwrap();
        assert!(matches!(
            run(&mut ctx, "*p"),
            Err(RuntimeError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn test_deref_undefined_name_fails_without_declaring() {
        let mut ctx = EvaluationContext::new();
        assert!(matches!(
            run(&mut ctx, "*nowhere"),
            Err(RuntimeError::InvalidOperation { .. })
        ));
        assert!(!ctx.is_defined("nowhere"));
    }

    #[test]
    fn test_non_identifier_operands() {
        let mut ctx = EvaluationContext::new();
        run(&mut ctx, "x = 1").unwrap();
        for source in ["&3", "&(x + 1)", "*(x + 1)", "*5"] {
            assert!(
                matches!(run(&mut ctx, source), Err(RuntimeError::InvalidOperation { .. })),
                "{}",
                source
            );
        }
        // `&(x)` is just `&x` once parenthesized identifiers are unwrapped
        assert_eq!(run(&mut ctx, "&(x)"), Ok(1000));

        let nested = Expression::address_of(Expression::address_of(Expression::identifier("x")));
        assert!(matches!(
            evaluate(&nested, &mut ctx),
            Err(RuntimeError::InvalidOperation { .. })
        ));
    }
}
