use crate::Node;
use minijava_span::{Span, Symbol};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// A single identifier, e.g. `foo`.
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct Identifier {
    pub name: Symbol,
    pub span: Span,
}

crate::simple_node_impl!(Identifier);

impl Identifier {
    pub fn new(name: Symbol, span: Span) -> Self {
        Self { name, span }
    }

    /// Compares two identifiers by their interned text, ignoring position.
    pub fn matches(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// A dotted sequence of identifiers, e.g. `java.lang.Object`.
///
/// The parser never resolves what a qualified name denotes (package,
/// class, or a chain of field accesses); it only records the dotted text
/// as written. `QualifiedName::matches` is used by `Type::eq_flat`-style
/// structural comparisons; actual name resolution is out of scope here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
    pub parts: Vec<Identifier>,
}

impl QualifiedName {
    pub fn new(parts: Vec<Identifier>) -> Self {
        debug_assert!(!parts.is_empty());
        Self { parts }
    }

    pub fn single(id: Identifier) -> Self {
        Self { parts: vec![id] }
    }

    pub fn span(&self) -> Span {
        self.parts[0].span
    }

    /// The final segment, e.g. `Object` in `java.lang.Object`.
    pub fn last(&self) -> &Identifier {
        self.parts.last().expect("QualifiedName is never empty")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}
