use crate::{Expression, Identifier, Type};
use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One `name = initializer?` binding within a local variable declaration.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct VariableDeclarator {
    pub name: Identifier,
    pub declared_type: Type,
    pub initializer: Option<Expression>,
    pub span: Span,
}

impl fmt::Display for VariableDeclarator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(init) = &self.initializer {
            write!(f, " = {init}")?;
        }
        Ok(())
    }
}

/// A local variable declaration statement, e.g. `int x = 1, y;`.
///
/// Every declarator shares the same base `declared_type`; an individual
/// declarator's own `declared_type` additionally carries any trailing
/// `[]` written directly after its name (`int x[], y;` declares `x` as
/// `int[]` and `y` as plain `int`), matching the grammar's
/// `variableDeclarators` production.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct VariableDeclarationStatement {
    pub declarators: Vec<VariableDeclarator>,
    pub span: Span,
}

impl fmt::Display for VariableDeclarationStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decl) in self.declarators.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{decl}")?;
        }
        write!(f, ";")
    }
}

crate::simple_node_impl!(VariableDeclarationStatement);
