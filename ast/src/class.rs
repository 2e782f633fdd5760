use crate::{Block, Identifier, Type};
use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An access/storage modifier as written before a class or member declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Abstract,
}

impl Modifier {
    pub fn name(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Static => "static",
            Modifier::Abstract => "abstract",
        }
    }

    pub fn is_access_modifier(&self) -> bool {
        matches!(self, Modifier::Public | Modifier::Protected | Modifier::Private)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single formal parameter of a method or constructor, e.g. `int x`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormalParameter {
    pub parameter_type: Type,
    pub name: Identifier,
    pub span: Span,
}

impl fmt::Display for FormalParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.parameter_type, self.name)
    }
}

/// A field declaration, e.g. `private int x, y[];`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub modifiers: Vec<Modifier>,
    pub declared_type: Type,
    pub declarators: Vec<crate::VariableDeclarator>,
    pub span: Span,
}

/// A method declaration, e.g. `public int f(int x) { ... }` or the
/// abstract/native form with no body, `void f();`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub modifiers: Vec<Modifier>,
    pub return_type: Type,
    pub name: Identifier,
    pub parameters: Vec<FormalParameter>,
    pub body: Option<Block>,
    pub span: Span,
}

/// A constructor declaration, e.g. `public C(int x) { ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDecl {
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    pub parameters: Vec<FormalParameter>,
    pub body: Block,
    pub span: Span,
}

/// A single member of a class body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
}

impl Member {
    pub fn span(&self) -> Span {
        match self {
            Member::Field(m) => m.span,
            Member::Method(m) => m.span,
            Member::Constructor(m) => m.span,
        }
    }
}

/// A class declaration: `modifiers class Name [extends Super] { members }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    /// Defaults to `Type::object()` when no `extends` clause is present.
    pub super_class: Type,
    pub members: Vec<Member>,
    pub span: Span,
}

/// A top-level type declaration. Presently the grammar supports only classes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TypeDecl {
    Class(ClassDecl),
}
