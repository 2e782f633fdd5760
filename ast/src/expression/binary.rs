use crate::Expression;
use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary operator. Precedence and associativity are defined by the
/// parser's production hierarchy, not by this type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    GreaterThan,
    LessEqual,
    LogicalAnd,
    Equal,
    Assign,
    PlusAssign,
}

impl AsRef<str> for BinaryOperation {
    fn as_ref(&self) -> &'static str {
        match self {
            BinaryOperation::Add => "+",
            BinaryOperation::Subtract => "-",
            BinaryOperation::Multiply => "*",
            BinaryOperation::Divide => "/",
            BinaryOperation::Modulo => "%",
            BinaryOperation::GreaterThan => ">",
            BinaryOperation::LessEqual => "<=",
            BinaryOperation::LogicalAnd => "&&",
            BinaryOperation::Equal => "==",
            BinaryOperation::Assign => "=",
            BinaryOperation::PlusAssign => "+=",
        }
    }
}

/// A binary expression `left op right`, e.g. `foo + bar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpression {
    /// The left operand of the expression.
    pub left: Box<Expression>,
    /// The right operand of the expression.
    pub right: Box<Expression>,
    /// The operator joining `left` and `right`.
    pub op: BinaryOperation,
    /// The span from `left` to `right`.
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for BinaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.op.as_ref(), self.right)
    }
}

crate::simple_node_impl!(BinaryExpression);
