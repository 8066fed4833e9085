//! Expression parsing implementation
//!
//! One method per grammar level, lowest precedence first:
//!
//! ```text
//! expr     ::= assign
//! assign   ::= compound ('=' assign)?
//! compound ::= term (('+' | '-') term)*
//! term     ::= unary (('*' | '/') unary)*
//! unary    ::= ('&' | '*')? primary
//! primary  ::= number | identifier | '(' expr ')'
//! ```
//!
//! Assignment is right-associative; the arithmetic levels are left-associative.
//! Every chained operator, `=` and `(` charges one level of depth while the
//! rest of its expression is parsed, which bounds the height of the tree.
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.parse_assignment()
    }

    /// Parse assignment (right-associative)
    fn parse_assignment(&mut self) -> Result<Expression, ParseError> {
        let expr = self.parse_additive()?;

        let loc = self.current_location();
        if self.match_token(&Token::Eq(loc)) {
            self.descend()?;
            let rhs = self.parse_assignment()?;
            self.ascend(1);
            return Ok(Expression::binary(BinOp::Assign, expr, rhs));
        }

        Ok(expr)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_multiplicative()?;
        let mut chained = 0;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Plus(loc)) {
                BinOp::Add
            } else if self.match_token(&Token::Minus(loc)) {
                BinOp::Sub
            } else {
                break;
            };

            self.descend()?;
            chained += 1;
            let right = self.parse_multiplicative()?;
            left = Expression::binary(op, left, right);
        }

        self.ascend(chained);
        Ok(left)
    }

    /// Parse multiplicative (* /)
    fn parse_multiplicative(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_unary()?;
        let mut chained = 0;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Star(loc)) {
                BinOp::Mul
            } else if self.match_token(&Token::Slash(loc)) {
                BinOp::Div
            } else {
                break;
            };

            self.descend()?;
            chained += 1;
            let right = self.parse_unary()?;
            left = Expression::binary(op, left, right);
        }

        self.ascend(chained);
        Ok(left)
    }

    /// Parse a single optional `&` or `*` prefix.
    ///
    /// Prefixes do not stack: `**p` and `&*p` are rejected.
    fn parse_unary(&mut self) -> Result<Expression, ParseError> {
        let loc = self.current_location();

        if self.match_token(&Token::Amp(loc)) {
            let operand = self.parse_primary()?;
            return Ok(Expression::address_of(operand));
        }

        if self.match_token(&Token::Star(loc)) {
            let operand = self.parse_primary()?;
            return Ok(Expression::deref(operand));
        }

        self.parse_primary()
    }

    /// Parse primary expressions (literals, identifiers, parenthesized)
    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        let loc = self.current_location();

        if let Token::IntLiteral(n, _) = self.peek_token() {
            self.advance();
            return Ok(Expression::constant(n));
        }

        if let Token::Ident(name, _) = self.peek_token() {
            self.advance();
            return Ok(Expression::identifier(name));
        }

        if self.match_token(&Token::LParen(loc)) {
            self.descend()?;
            let expr = self.parse_expression()?;
            self.expect_token(
                &Token::RParen(self.current_location()),
                "Expected ')' after expression",
            )?;
            self.ascend(1);
            return Ok(expr);
        }

        Err(ParseError {
            message: format!("Unexpected token: {}", self.peek()),
            location: loc,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::constants::MAX_EXPRESSION_DEPTH;
    use crate::parser::ast::*;
    use crate::parser::parse::parse_exp;

    fn ident(name: &str) -> Expression {
        Expression::identifier(name)
    }

    #[test]
    fn test_precedence() {
        let expr = parse_exp("1 + 2 * 3 - 4").unwrap();
        assert_eq!(expr.to_text(), "((1 + (2 * 3)) - 4)");
    }

    #[test]
    fn test_left_associative_arithmetic() {
        let expr = parse_exp("8 / 4 / 2").unwrap();
        assert_eq!(expr.to_text(), "((8 / 4) / 2)");
    }

    #[test]
    fn test_right_associative_assignment() {
        let expr = parse_exp("a = b = 3").unwrap();
        let expected = Expression::binary(
            BinOp::Assign,
            ident("a"),
            Expression::binary(BinOp::Assign, ident("b"), Expression::constant(3)),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_parentheses_override_precedence() {
        let expr = parse_exp("(1 + 2) * 3").unwrap();
        assert_eq!(expr.to_text(), "((1 + 2) * 3)");
    }

    #[test]
    fn test_pointer_forms() {
        let expr = parse_exp("*p = &x").unwrap();
        let expected = Expression::binary(
            BinOp::Assign,
            Expression::deref(ident("p")),
            Expression::address_of(ident("x")),
        );
        assert_eq!(expr, expected);

        // '*' after an operand is multiplication, before a primary it is a dereference
        let expr = parse_exp("a * *p").unwrap();
        assert_eq!(expr.to_text(), "(a * *p)");
    }

    #[test]
    fn test_unary_prefix_does_not_stack() {
        assert!(parse_exp("**p").is_err());
        assert!(parse_exp("&*p").is_err());
    }

    #[test]
    fn test_unbalanced_parentheses() {
        let err = parse_exp("(1 + 2").unwrap_err();
        assert!(err.message.contains("Expected ')'"));
        assert!(parse_exp("1 + 2)").is_err());
    }

    #[test]
    fn test_long_operator_chain_rejected() {
        let line = vec!["1"; 5_000].join("+");
        let err = parse_exp(&line).unwrap_err();
        assert!(err.message.contains("nested too deeply"), "{}", err.message);

        let line = vec!["x"; 5_000].join(" * ");
        assert!(parse_exp(&line).unwrap_err().message.contains("nested too deeply"));

        let line = vec!["a"; 5_000].join(" = ");
        assert!(parse_exp(&line).unwrap_err().message.contains("nested too deeply"));
    }

    #[test]
    fn test_deep_parentheses_rejected() {
        let line = format!("{}1{}", "(".repeat(5_000), ")".repeat(5_000));
        let err = parse_exp(&line).unwrap_err();
        assert!(err.message.contains("nested too deeply"));
    }

    #[test]
    fn test_depth_is_released_between_groups() {
        // Many shallow groups side by side stay within the limit
        let group = format!("({})", vec!["1"; 100].join(" + "));
        let line = vec![group.as_str(); 2].join(" * ");
        let expr = parse_exp(&line).unwrap();
        assert_eq!(expr.operator_symbol().unwrap(), "*");

        let at_limit = vec!["1"; MAX_EXPRESSION_DEPTH + 1].join("+");
        assert!(parse_exp(&at_limit).is_ok());
        let past_limit = vec!["1"; MAX_EXPRESSION_DEPTH + 2].join("+");
        assert!(parse_exp(&past_limit).is_err());
    }

    #[test]
    fn test_missing_operand() {
        let err = parse_exp("1 +").unwrap_err();
        assert!(err.message.contains("Unexpected token"));
    }
}
