use crate::Expression;
use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `return [expression];` statement. `expression` is absent for a `void` method.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ReturnStatement {
    pub expression: Option<Expression>,
    pub span: Span,
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expression {
            Some(expr) => write!(f, "return {expr};"),
            None => write!(f, "return;"),
        }
    }
}

crate::simple_node_impl!(ReturnStatement);
