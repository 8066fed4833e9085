// Expression tree definitions for the interpreter

use crate::interpreter::errors::RuntimeError;
use crate::memory::EvaluationContext;
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Binary operators, assignment included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Look up the operator for a source symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(BinOp::Assign),
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Assign => "=",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    /// Binding strength used by the printer. Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Assign => 1,
            BinOp::Add | BinOp::Sub => 2,
            BinOp::Mul | BinOp::Div => 3,
        }
    }

    /// `=` groups to the right, everything else to the left
    pub fn is_right_associative(self) -> bool {
        matches!(self, BinOp::Assign)
    }
}

/// Unary pointer operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    AddrOf, // &x
    Deref,  // *x
}

impl UnOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::AddrOf => "&",
            UnOp::Deref => "*",
        }
    }
}

/// Node kind tag returned by [`Expression::kind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionKind {
    Constant,
    Identifier,
    Compound,
    UnaryOp,
}

/// An expression tree.
///
/// Interior nodes own their children through `Box`, so a tree is released
/// depth-first when its root is dropped and no node can observe its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Constant(i32),
    Identifier(String),
    Compound {
        op: BinOp,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
    UnaryOp {
        op: UnOp,
        operand: Box<Expression>,
    },
}

impl Expression {
    pub fn constant(value: i32) -> Self {
        Expression::Constant(value)
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    pub fn binary(op: BinOp, lhs: Expression, rhs: Expression) -> Self {
        Expression::Compound {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Build a compound node from an operator symbol such as `"+"`.
    ///
    /// Unknown symbols are rejected here, so an evaluated tree never carries
    /// an operator the interpreter does not understand.
    pub fn compound(symbol: &str, lhs: Expression, rhs: Expression) -> Result<Self, RuntimeError> {
        let op = BinOp::from_symbol(symbol).ok_or_else(|| RuntimeError::InvalidOperation {
            message: format!("Illegal operator '{}' in expression", symbol),
        })?;
        Ok(Self::binary(op, lhs, rhs))
    }

    pub fn unary(op: UnOp, operand: Expression) -> Self {
        Expression::UnaryOp {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn address_of(operand: Expression) -> Self {
        Self::unary(UnOp::AddrOf, operand)
    }

    pub fn deref(operand: Expression) -> Self {
        Self::unary(UnOp::Deref, operand)
    }

    pub fn kind(&self) -> ExpressionKind {
        match self {
            Expression::Constant(_) => ExpressionKind::Constant,
            Expression::Identifier(_) => ExpressionKind::Identifier,
            Expression::Compound { .. } => ExpressionKind::Compound,
            Expression::UnaryOp { .. } => ExpressionKind::UnaryOp,
        }
    }

    /// Fully parenthesized text, one pair of parentheses per compound node
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Evaluate this tree against `context`
    pub fn evaluate(&self, context: &mut EvaluationContext) -> Result<i32, RuntimeError> {
        crate::interpreter::engine::evaluate(self, context)
    }

    pub fn constant_value(&self) -> Result<i32, RuntimeError> {
        match self {
            Expression::Constant(value) => Ok(*value),
            _ => Err(illegal_type("constant_value")),
        }
    }

    pub fn identifier_name(&self) -> Result<&str, RuntimeError> {
        match self {
            Expression::Identifier(name) => Ok(name.as_str()),
            _ => Err(illegal_type("identifier_name")),
        }
    }

    pub fn operator_symbol(&self) -> Result<&'static str, RuntimeError> {
        match self {
            Expression::Compound { op, .. } => Ok(op.symbol()),
            _ => Err(illegal_type("operator_symbol")),
        }
    }

    pub fn left_child(&self) -> Result<&Expression, RuntimeError> {
        match self {
            Expression::Compound { lhs, .. } => Ok(lhs.as_ref()),
            _ => Err(illegal_type("left_child")),
        }
    }

    pub fn right_child(&self) -> Result<&Expression, RuntimeError> {
        match self {
            Expression::Compound { rhs, .. } => Ok(rhs.as_ref()),
            _ => Err(illegal_type("right_child")),
        }
    }

    pub fn unary_symbol(&self) -> Result<&'static str, RuntimeError> {
        match self {
            Expression::UnaryOp { op, .. } => Ok(op.symbol()),
            _ => Err(illegal_type("unary_symbol")),
        }
    }

    pub fn operand(&self) -> Result<&Expression, RuntimeError> {
        match self {
            Expression::UnaryOp { operand, .. } => Ok(operand.as_ref()),
            _ => Err(illegal_type("operand")),
        }
    }
}

fn illegal_type(accessor: &str) -> RuntimeError {
    RuntimeError::InvalidOperation {
        message: format!("{}: illegal expression type", accessor),
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(value) => write!(f, "{}", value),
            Expression::Identifier(name) => write!(f, "{}", name),
            Expression::Compound { op, lhs, rhs } => {
                write!(f, "({} {} {})", lhs, op.symbol(), rhs)
            }
            Expression::UnaryOp { op, operand } => write!(f, "{}{}", op.symbol(), operand),
        }
    }
}
