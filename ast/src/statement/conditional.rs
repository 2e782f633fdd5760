use crate::{Expression, Statement};
use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An `if (condition) then (else otherwise)?` statement.
///
/// Unlike a block-structured `if`, the grammar here allows any statement
/// (not just a block) on either arm, so `then`/`otherwise` are boxed
/// statements rather than `Block`s.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct IfStatement {
    pub condition: Expression,
    pub then: Box<Statement>,
    pub otherwise: Option<Box<Statement>>,
    pub span: Span,
}

impl fmt::Display for IfStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if ({}) {}", self.condition, self.then)?;
        if let Some(otherwise) = &self.otherwise {
            write!(f, " else {otherwise}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(IfStatement);
