use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The empty statement `;`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct EmptyStatement {
    pub span: Span,
}

impl fmt::Display for EmptyStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ";")
    }
}

crate::simple_node_impl!(EmptyStatement);
