use crate::Statement;
use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A block `{ stmt* }` consisting of a list of statements to execute in order.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Block {
    pub statements: Vec<Statement>,
    /// The span from `{` to `}`.
    pub span: Span,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for statement in &self.statements {
            writeln!(f, "\t{statement}")?;
        }
        write!(f, "}}")
    }
}

crate::simple_node_impl!(Block);
