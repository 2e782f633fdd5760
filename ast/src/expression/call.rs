use crate::{Expression, Identifier};
use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A method call, e.g. `foo.bar(1, 2)` or the bare `bar(1, 2)`.
///
/// Exactly one of `target` and `ambiguous` is meaningful for a given call,
/// mirroring the two productions that build this node:
/// - `target.name(args)` (a `.` selector after an already-parsed primary)
///   sets `target` and leaves `ambiguous` empty.
/// - a bare `a.b.c(args)` sets `ambiguous` to the dotted prefix `a.b` (or
///   leaves it empty for an unqualified `c(args)`) and leaves `target`
///   `None`; whether that prefix denotes a variable, a chain of field
///   accesses, or part of a package-qualified name is resolved later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageExpression {
    pub target: Option<Box<Expression>>,
    pub ambiguous: Vec<Identifier>,
    pub name: Identifier,
    pub arguments: Vec<Expression>,
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for MessageExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(target) = &self.target {
            write!(f, "{target}.")?;
        } else {
            for part in &self.ambiguous {
                write!(f, "{part}.")?;
            }
        }
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")
    }
}

crate::simple_node_impl!(MessageExpression);
