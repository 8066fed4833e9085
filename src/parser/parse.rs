//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the line-level entry point.
//!
//! # Implementation
//!
//! Grammar rules live in `expressions` as a separate `impl Parser` block,
//! sharing the token cursor defined here.

use crate::interpreter::constants::MAX_EXPRESSION_DEPTH;
use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            location: err.location,
        }
    }
}

/// Recursive descent parser for expression lines
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    /// Nesting charged so far; see [`MAX_EXPRESSION_DEPTH`]
    pub(crate) depth: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
            depth: 0,
        })
    }

    /// Parse the whole input as a single expression.
    ///
    /// Anything left over after the expression is an error.
    pub fn parse_expression_line(&mut self) -> Result<Expression, ParseError> {
        let expr = self.parse_expression()?;

        if !self.is_at_end() {
            return Err(ParseError {
                message: format!("Unexpected {} after expression", self.peek()),
                location: self.current_location(),
            });
        }

        Ok(expr)
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(self.peek()) == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek(), Token::Eof(_))
    }

    pub(crate) fn peek(&self) -> &Token {
        // The lexer always terminates the stream with Eof and advance() never
        // moves past it.
        &self.tokens[self.position]
    }

    pub(crate) fn peek_token(&self) -> Token {
        self.peek().clone()
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    /// Charge one level of nesting, failing past [`MAX_EXPRESSION_DEPTH`]
    pub(crate) fn descend(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_EXPRESSION_DEPTH {
            return Err(ParseError {
                message: format!(
                    "Expression nested too deeply (limit {})",
                    MAX_EXPRESSION_DEPTH
                ),
                location: self.previous().location(),
            });
        }
        Ok(())
    }

    pub(crate) fn ascend(&mut self, levels: usize) {
        self.depth -= levels;
    }

    pub(crate) fn expect_token(&mut self, token: &Token, message: &str) -> Result<(), ParseError> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError {
                message: format!("{}, found {}", message, self.peek()),
                location: self.current_location(),
            })
        }
    }
}

/// Parse one line of source text into an expression tree.
pub fn parse_exp(source: &str) -> Result<Expression, ParseError> {
    Parser::new(source)?.parse_expression_line()
}
