//! Runtime error types for the interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! while evaluating an expression tree (as opposed to lexer or parse errors).
//!
//! Every runtime error aborts the current evaluation. The session reports it and
//! carries on with the next line; the context keeps whatever bindings it had.

use crate::memory::Address;
use std::fmt;

/// Runtime errors that can occur during evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Wrong-kind accessor use, bad `&`/`*` target, unknown operator
    InvalidOperation { message: String },

    /// Identifier read before it was ever named
    UndefinedVariable { name: String },

    /// Address read before anything was written to it
    UndefinedValue { address: Address },

    /// `*p = v` where `p` has never been named
    UndefinedReference { name: String },

    DivisionByZero,

    /// Result does not fit in a 32-bit integer
    IntegerOverflow { operation: String },
}

impl RuntimeError {
    /// Short category name, shown in the UI status bar badge
    pub fn kind(&self) -> &'static str {
        match self {
            RuntimeError::InvalidOperation { .. } => "InvalidOperation",
            RuntimeError::UndefinedVariable { .. } => "UndefinedVariable",
            RuntimeError::UndefinedValue { .. } => "UndefinedValue",
            RuntimeError::UndefinedReference { .. } => "UndefinedReference",
            RuntimeError::DivisionByZero => "DivisionByZero",
            RuntimeError::IntegerOverflow { .. } => "IntegerOverflow",
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::InvalidOperation { message } => write!(f, "{}", message),
            RuntimeError::UndefinedVariable { name } => write!(f, "{} is undefined", name),
            RuntimeError::UndefinedValue { address } => {
                write!(f, "No value stored at address {}", address)
            }
            RuntimeError::UndefinedReference { name } => {
                write!(f, "Undefined reference to {}", name)
            }
            RuntimeError::DivisionByZero => write!(f, "Division by 0"),
            RuntimeError::IntegerOverflow { operation } => {
                write!(f, "Integer overflow in operation: {}", operation)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = RuntimeError::UndefinedVariable {
            name: "z".to_string(),
        };
        assert_eq!(err.to_string(), "z is undefined");
        assert_eq!(err.kind(), "UndefinedVariable");

        assert_eq!(RuntimeError::DivisionByZero.to_string(), "Division by 0");
        assert_eq!(
            RuntimeError::UndefinedValue { address: 1003 }.to_string(),
            "No value stored at address 1003"
        );
    }
}
