//! Unparser
//!
//! [`render`] turns an expression tree back into infix text with as few
//! parentheses as the grammar allows. A compound child is wrapped when its
//! operator binds more loosely than the enclosing one, or equally loosely on
//! the side where the enclosing operator does not group:
//!
//! ```text
//! (a + b) * c     a - (b - c)     (a = b) = c     a = b = c
//! ```
//!
//! The equal-precedence case is deliberate. Wrapping only on strictly higher
//! precedence would print `a - (b - c)` as `a - b - c`, which parses back as
//! `(a - b) - c`; with it, rendered text always parses back to the same tree.

use crate::parser::ast::{BinOp, Expression};

/// Which operand of the enclosing operator is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Render `expr` as minimally parenthesized infix text
pub fn render(expr: &Expression) -> String {
    let mut out = String::new();
    render_into(&mut out, expr, None);
    out
}

/// Precedence of the operator enclosing a subtree; 0 at top level
pub fn enclosing_precedence(parent: Option<BinOp>) -> u8 {
    parent.map_or(0, BinOp::precedence)
}

fn needs_parens(child: BinOp, parent: Option<(BinOp, Side)>) -> bool {
    let Some((parent_op, side)) = parent else {
        return false;
    };

    let child_prec = child.precedence();
    let parent_prec = enclosing_precedence(Some(parent_op));

    if parent_prec > child_prec {
        return true;
    }

    if parent_prec == child_prec {
        // Equal binding strength only reads back the same way on the side the
        // operator groups toward
        return match side {
            Side::Left => parent_op.is_right_associative(),
            Side::Right => !parent_op.is_right_associative(),
        };
    }

    false
}

fn render_into(out: &mut String, expr: &Expression, parent: Option<(BinOp, Side)>) {
    match expr {
        Expression::Constant(value) => out.push_str(&value.to_string()),
        Expression::Identifier(name) => out.push_str(name),
        Expression::Compound { op, lhs, rhs } => {
            let wrap = needs_parens(*op, parent);
            if wrap {
                out.push('(');
            }
            render_into(out, lhs, Some((*op, Side::Left)));
            out.push(' ');
            out.push_str(op.symbol());
            out.push(' ');
            render_into(out, rhs, Some((*op, Side::Right)));
            if wrap {
                out.push(')');
            }
        }
        Expression::UnaryOp { op, operand } => {
            out.push_str(op.symbol());
            // A unary prefix applies to a primary only
            if let Expression::Compound { .. } = operand.as_ref() {
                out.push('(');
                render_into(out, operand, None);
                out.push(')');
            } else {
                render_into(out, operand, None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_exp;

    fn ident(name: &str) -> Expression {
        Expression::identifier(name)
    }

    fn round_trip(source: &str) -> String {
        let first = render(&parse_exp(source).expect("parse failed"));
        let second = render(&parse_exp(&first).expect("reparse failed"));
        assert_eq!(first, second, "render is not stable for {}", source);
        first
    }

    #[test]
    fn test_no_parens_at_top_level() {
        let tree = Expression::binary(
            BinOp::Add,
            Expression::constant(3),
            Expression::binary(BinOp::Mul, Expression::constant(4), Expression::constant(2)),
        );
        assert_eq!(render(&tree), "3 + 4 * 2");
    }

    #[test]
    fn test_lower_precedence_child_is_wrapped() {
        let tree = Expression::binary(
            BinOp::Mul,
            Expression::binary(BinOp::Add, ident("a"), ident("b")),
            ident("c"),
        );
        assert_eq!(render(&tree), "(a + b) * c");
    }

    #[test]
    fn test_equal_precedence_on_non_grouping_side() {
        let tree = Expression::binary(
            BinOp::Sub,
            ident("a"),
            Expression::binary(BinOp::Sub, ident("b"), ident("c")),
        );
        assert_eq!(render(&tree), "a - (b - c)");

        let tree = Expression::binary(
            BinOp::Sub,
            Expression::binary(BinOp::Sub, ident("a"), ident("b")),
            ident("c"),
        );
        assert_eq!(render(&tree), "a - b - c");
    }

    #[test]
    fn test_assignment_groups_right() {
        assert_eq!(round_trip("a = b = 3"), "a = b = 3");
        assert_eq!(round_trip("x = (y = 2) + 1"), "x = (y = 2) + 1");

        let tree = Expression::binary(
            BinOp::Assign,
            Expression::binary(BinOp::Assign, ident("a"), ident("b")),
            ident("c"),
        );
        assert_eq!(render(&tree), "(a = b) = c");
    }

    #[test]
    fn test_unary_forms() {
        assert_eq!(round_trip("p = &x"), "p = &x");
        assert_eq!(round_trip("*p = *q * 2"), "*p = *q * 2");
        assert_eq!(round_trip("&(x + 1)"), "&(x + 1)");
        assert_eq!(round_trip("*(p)"), "*p");
    }

    #[test]
    fn test_redundant_parens_are_dropped() {
        assert_eq!(round_trip("((1)) + (2 * 3)"), "1 + 2 * 3");
        assert_eq!(round_trip("(a + b) + c"), "a + b + c");
        assert_eq!(round_trip("a / (b * c)"), "a / (b * c)");
    }

    #[test]
    fn test_render_preserves_tree() {
        for source in ["a - (b - c) * d", "x = y = z / (2 - w)", "*p + &q - (1 - 2)"] {
            let tree = parse_exp(source).unwrap();
            assert_eq!(parse_exp(&render(&tree)).unwrap(), tree);
        }
    }

    #[test]
    fn test_enclosing_precedence_table() {
        assert_eq!(enclosing_precedence(None), 0);
        assert!(enclosing_precedence(Some(BinOp::Mul)) > enclosing_precedence(Some(BinOp::Add)));
        assert_eq!(
            enclosing_precedence(Some(BinOp::Div)),
            enclosing_precedence(Some(BinOp::Mul))
        );
        assert!(enclosing_precedence(Some(BinOp::Sub)) > enclosing_precedence(Some(BinOp::Assign)));
    }
}
