use crate::{Expression, Type};
use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cast expression `(Type) expr`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastOpExpression {
    pub target_type: Type,
    pub expression: Box<Expression>,
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for CastOpExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.target_type, self.expression)
    }
}

crate::simple_node_impl!(CastOpExpression);

/// An `expr instanceof Type` expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceOfExpression {
    pub expression: Box<Expression>,
    pub checked_type: Type,
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for InstanceOfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} instanceof {}", self.expression, self.checked_type)
    }
}

crate::simple_node_impl!(InstanceOfExpression);
