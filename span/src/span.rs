use serde::{Deserialize, Serialize};
use std::fmt;

/// The source line a token or AST node originated on.
///
/// The grammar this crate supports never needs anything finer than a line
/// number: diagnostics are reported as `file:line: message`, and no node
/// needs a byte offset or column. `Span` exists as its own type rather than
/// a bare `u32` so that call sites read as "this is source position
/// information" and so a future column/offset field has somewhere to live.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    line: u32,
}

impl Span {
    /// Constructs a span pointing at `line`.
    pub const fn new(line: u32) -> Self {
        Self { line }
    }

    /// The dummy span used for synthetic nodes that have no real source
    /// location, e.g. the implicit `Object` superclass of a class with no
    /// `extends` clause.
    pub const fn dummy() -> Self {
        Self { line: 0 }
    }

    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.line)
    }
}

impl From<u32> for Span {
    fn from(line: u32) -> Self {
        Self::new(line)
    }
}
