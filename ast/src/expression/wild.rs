use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A placeholder substituted wherever an expression production failed to
/// parse. Preserves the tree's shape so that later siblings and the
/// remainder of the file can still be parsed and checked for further
/// errors, without ever fabricating a plausible-looking expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildExpression {
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for WildExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<error>")
    }
}

crate::simple_node_impl!(WildExpression);
