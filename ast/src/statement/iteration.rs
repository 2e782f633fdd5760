use crate::{Expression, Statement};
use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `while (condition) body` statement.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

impl fmt::Display for WhileStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "while ({}) {}", self.condition, self.body)
    }
}

crate::simple_node_impl!(WhileStatement);
