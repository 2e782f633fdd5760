use crate::Expression;
use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A prefix unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperation {
    /// Arithmetic negation, i.e. `-x`.
    Negate,
    /// Unary plus, i.e. `+x`. A no-op at the value level but distinct in
    /// the tree from its operand, matching what the grammar parses.
    UnaryPlus,
    /// Logical negation, i.e. `!x`.
    LogicalNot,
}

impl AsRef<str> for UnaryOperation {
    fn as_ref(&self) -> &'static str {
        match self {
            UnaryOperation::Negate => "-",
            UnaryOperation::UnaryPlus => "+",
            UnaryOperation::LogicalNot => "!",
        }
    }
}

/// A unary expression applying a prefix operator to an inner expression,
/// e.g. `-x`, `+x`, `!x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    pub receiver: Box<Expression>,
    pub op: UnaryOperation,
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for UnaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op.as_ref(), self.receiver)
    }
}

crate::simple_node_impl!(UnaryExpression);

/// Whether an increment/decrement expression appears before (`++x`) or
/// after (`x--`) its operand. The grammar only ever produces the prefix
/// form of increment and the postfix form of decrement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncDecOperation {
    PreIncrement,
    PostDecrement,
}

/// A `++x` or `x--` expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncDecExpression {
    pub target: Box<Expression>,
    pub op: IncDecOperation,
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for IncDecExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            IncDecOperation::PreIncrement => write!(f, "++{}", self.target),
            IncDecOperation::PostDecrement => write!(f, "{}--", self.target),
        }
    }
}

crate::simple_node_impl!(IncDecExpression);
