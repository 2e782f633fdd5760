use crate::Expression;
use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A statement-expression, e.g. `foo();`, `x = 1;`, `x++;`.
///
/// The parser only ever builds one of these around an expression for which
/// [`Expression::is_valid_statement_expression`] holds; otherwise it emits
/// a diagnostic and still wraps the (side-effect-free) expression here so
/// the tree shape is preserved for later passes.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StatementExpression {
    pub expression: Expression,
    pub span: Span,
}

impl fmt::Display for StatementExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};", self.expression)
    }
}

crate::simple_node_impl!(StatementExpression);
