use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal value as written in source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiteralValue {
    Int(String),
    Char(String),
    String(String),
    True,
    False,
    Null,
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Int(s) => write!(f, "{s}"),
            LiteralValue::Char(s) => write!(f, "'{s}'"),
            LiteralValue::String(s) => write!(f, "\"{s}\""),
            LiteralValue::True => write!(f, "true"),
            LiteralValue::False => write!(f, "false"),
            LiteralValue::Null => write!(f, "null"),
        }
    }
}

/// A literal expression, e.g. `42`, `'a'`, `"hi"`, `true`, `false`, `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralExpression {
    pub value: LiteralValue,
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for LiteralExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

crate::simple_node_impl!(LiteralExpression);
