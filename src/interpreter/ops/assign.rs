//! Assignment
//!
//! Two target shapes are accepted: a plain identifier, and a dereference of an
//! identifier (`*p = v`), which writes to the address stored in `p`. The value
//! has already been computed by the caller, so nothing here runs before the
//! right-hand side is known to be good.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::{Expression, UnOp};

impl Interpreter<'_> {
    /// Store `value` into the location named by `target`; returns `value`
    pub(crate) fn evaluate_assignment(
        &mut self,
        target: &Expression,
        value: i32,
    ) -> Result<i32, RuntimeError> {
        match target {
            Expression::UnaryOp {
                op: UnOp::Deref,
                operand,
            } => self.assign_through_pointer(operand, value)?,

            _ => {
                let name = target.identifier_name()?;
                let address = self.context.address_of(name);
                self.context.set_value(address, value);
            }
        }

        Ok(value)
    }

    /// `*p = value`
    ///
    /// Only the definedness of `p` itself is checked before the write; a `p`
    /// that was named but never written fails on the read of its slot.
    fn assign_through_pointer(&mut self, pointer: &Expression, value: i32) -> Result<(), RuntimeError> {
        let name = pointer.identifier_name()?;

        if !self.context.is_defined(name) {
            return Err(RuntimeError::UndefinedReference {
                name: name.to_string(),
            });
        }

        let slot = self.context.address_of(name);
        let target = self.context.value_at(slot)?;

        if !self.context.is_allocated(target) {
            return Err(RuntimeError::InvalidOperation {
                message: format!(
                    "*{} = {}: address {} does not belong to any variable",
                    name, value, target
                ),
            });
        }

        self.context.set_value(target, value);
        Ok(())
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
    fn test_assignment_returns_value_and_chains() {
        let mut ctx = EvaluationContext::new();
        assert_eq!(run(&mut ctx, "a = b = 7"), Ok(7));
        assert_eq!(run(&mut ctx, "a"), Ok(7));
        assert_eq!(run(&mut ctx, "b"), Ok(7));
        // Right-to-left: b was touched first
        assert_eq!(ctx.name_at(1000), Some("b"));
        assert_eq!(ctx.name_at(1001), Some("a"));
    }

    #[test]
    fn test_write_through_pointer() {
        let mut ctx = EvaluationContext::new();
        run(&mut ctx, "x = 1").unwrap();
        run(&mut ctx, "p = &x").unwrap();

        assert_eq!(run(&mut ctx, "*p = 42"), Ok(42));
        assert_eq!(run(&mut ctx, "x"), Ok(42));
        // p still points at x
        assert_eq!(run(&mut ctx, "p"), Ok(1000));
    }

    #[test]
    fn test_write_through_undefined_pointer() {
        let mut ctx = EvaluationContext::new();
        assert_eq!(
            run(&mut ctx, "*q = 3"),
            Err(RuntimeError::UndefinedReference {
                name: "q".to_string()
            })
        );
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_write_through_pointer_checks_only_pointer_definedness() {
        // Quirk: `q` only needs a name. Its slot is then read, which fails
        // because nothing was ever stored there.
        let mut ctx = EvaluationContext::new();
        run(&mut ctx, "&q").unwrap();
        assert_eq!(
            run(&mut ctx, "*q = 3"),
            Err(RuntimeError::UndefinedValue { address: 1000 })
        );
    }

    #[test]
    fn test_write_through_dangling_pointer_refused() {
        let mut ctx = EvaluationContext::new();
        run(&mut ctx, "p = 5").unwrap();

        let err = run(&mut ctx, "*p = 1").unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidOperation { .. }));
        assert_eq!(ctx.value_at(5), Err(RuntimeError::UndefinedValue { address: 5 }));
    }

    #[test]
    fn test_invalid_targets() {
        let mut ctx = EvaluationContext::new();
        for source in ["3 = 4", "a + b = 1", "&x = 2", "*(p) + 1 = 2"] {
            let err = run(&mut ctx, source).unwrap_err();
            assert!(
                matches!(err, RuntimeError::InvalidOperation { .. }),
                "{} gave {:?}",
                source,
                err
            );
        }

        // Dereference of a non-identifier on the left
        let tree = Expression::binary(
            crate::parser::ast::BinOp::Assign,
            Expression::deref(Expression::constant(1000)),
            Expression::constant(1),
        );
        assert!(matches!(
            evaluate(&tree, &mut ctx),
            Err(RuntimeError::InvalidOperation { .. })
        ));
    }

    struct CapturingLogger {
        lines: std::sync::Mutex<Vec<String>>,
    }

    impl log::Log for CapturingLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger {
        lines: std::sync::Mutex::new(Vec::new()),
    };

    #[test]
    fn test_each_store_is_logged_once() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Debug);

        // Distinctive value and base so records from other tests don't match
        let mut ctx = EvaluationContext::with_base(737_000);
        run(&mut ctx, "x = 424242").unwrap();
        run(&mut ctx, "p = &x").unwrap();
        run(&mut ctx, "*p = 535353").unwrap();

        let lines = LOGGER.lines.lock().unwrap();
        let count = |needle: &str| lines.iter().filter(|l| l.contains(needle)).count();
        assert_eq!(count("424242"), 1);
        assert_eq!(count("535353"), 1);
    }

    #[test]
    fn test_failed_right_side_stores_nothing() {
        let mut ctx = EvaluationContext::new();
        run(&mut ctx, "x = 1").unwrap();
        let before = ctx.clone();

        assert_eq!(run(&mut ctx, "x = 1 / 0"), Err(RuntimeError::DivisionByZero));
        assert_eq!(ctx, before);
    }
}
