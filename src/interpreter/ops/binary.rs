use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::BinOp;

impl Interpreter<'_> {
    /// Apply an arithmetic operator to two already-evaluated operands
    pub(crate) fn evaluate_arithmetic(
        &self,
        op: BinOp,
        left: i32,
        right: i32,
    ) -> Result<i32, RuntimeError> {
        let result = match op {
            BinOp::Add => left.checked_add(right),
            BinOp::Sub => left.checked_sub(right),
            BinOp::Mul => left.checked_mul(right),
            BinOp::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left.checked_div(right)
            }
            BinOp::Assign => {
                return Err(RuntimeError::InvalidOperation {
                    message: "Illegal operator in expression".to_string(),
                })
            }
        };

        result.ok_or_else(|| RuntimeError::IntegerOverflow {
            operation: format!("{} {} {}", left, op.symbol(), right),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::engine::{evaluate, Interpreter};
    use crate::interpreter::errors::RuntimeError;
    use crate::memory::EvaluationContext;
    use crate::parser::ast::BinOp;
    use crate::parser::parse_exp;

    fn run(ctx: &mut EvaluationContext, source: &str) -> Result<i32, RuntimeError> {
        evaluate(&parse_exp(source).expect("parse failed"), ctx)
    }

    #[test]
    fn test_operators() {
        let mut ctx = EvaluationContext::new();
        assert_eq!(run(&mut ctx, "7 + 5"), Ok(12));
        assert_eq!(run(&mut ctx, "7 - 9"), Ok(-2));
        assert_eq!(run(&mut ctx, "6 * 7"), Ok(42));
        // Integer division truncates toward zero
        assert_eq!(run(&mut ctx, "7 / 2"), Ok(3));
        assert_eq!(run(&mut ctx, "(0 - 7) / 2"), Ok(-3));
    }

    #[test]
    fn test_division_by_zero_leaves_context_unchanged() {
        let mut ctx = EvaluationContext::new();
        run(&mut ctx, "y = 7").unwrap();
        let before = ctx.clone();

        assert_eq!(run(&mut ctx, "y / 0"), Err(RuntimeError::DivisionByZero));
        assert_eq!(run(&mut ctx, "y / (3 - 3)"), Err(RuntimeError::DivisionByZero));
        assert_eq!(ctx, before);
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut ctx = EvaluationContext::new();
        let err = run(&mut ctx, "2147483647 + 1").unwrap_err();
        assert_eq!(
            err,
            RuntimeError::IntegerOverflow {
                operation: "2147483647 + 1".to_string()
            }
        );

        run(&mut ctx, "m = 0 - 2147483647 - 1").unwrap();
        assert!(matches!(
            run(&mut ctx, "m / (0 - 1)"),
            Err(RuntimeError::IntegerOverflow { .. })
        ));
        assert!(matches!(
            run(&mut ctx, "65536 * 65536"),
            Err(RuntimeError::IntegerOverflow { .. })
        ));
    }

    #[test]
    fn test_assign_is_not_arithmetic() {
        let mut ctx = EvaluationContext::new();
        let interpreter = Interpreter::new(&mut ctx);
        assert!(matches!(
            interpreter.evaluate_arithmetic(BinOp::Assign, 1, 2),
            Err(RuntimeError::InvalidOperation { .. })
        ));
    }
}
