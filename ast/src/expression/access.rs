use crate::{Expression, Identifier};
use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bare name reference, e.g. `x`. Whether `x` denotes a local variable,
/// a field, or something else is left to semantic analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableExpression {
    pub name: Identifier,
    pub span: Span,
    /// Set once this node is used as a statement in its own right rather
    /// than nested inside a larger expression.
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for VariableExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

crate::simple_node_impl!(VariableExpression);

/// A field access `target.name`.
///
/// For a dotted chain like `a.b.c` where `a` cannot yet be resolved to a
/// variable or a package/class qualifier, the parser still produces a
/// `FieldSelection` with `target` holding the parsed prefix; resolving
/// whether that prefix is itself a variable, a field chain, or a
/// package-qualified type name is left to semantic analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSelectionExpression {
    pub target: Box<Expression>,
    pub name: Identifier,
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for FieldSelectionExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.target, self.name)
    }
}

crate::simple_node_impl!(FieldSelectionExpression);

/// An array index expression `target[index]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpression {
    pub target: Box<Expression>,
    pub index: Box<Expression>,
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for ArrayExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.target, self.index)
    }
}

crate::simple_node_impl!(ArrayExpression);
