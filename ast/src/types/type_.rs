use crate::QualifiedName;
use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the primitive, non-reference types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasicType {
    Boolean,
    Char,
    Int,
    /// Legal only as a method's return type.
    Void,
    /// The error sentinel produced when a type could not be parsed.
    Any,
}

impl fmt::Display for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BasicType::Boolean => "boolean",
            BasicType::Char => "char",
            BasicType::Int => "int",
            BasicType::Void => "void",
            BasicType::Any => "<any>",
        })
    }
}

/// A type reference as written in source: a primitive, a named (class)
/// type, or an array of some other type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    Basic(BasicType),
    /// A possibly-qualified class name, e.g. `String` or `java.util.List`.
    Named(QualifiedName),
    Array(Box<Type>),
}

impl Type {
    pub const fn boolean() -> Self {
        Type::Basic(BasicType::Boolean)
    }

    pub const fn char() -> Self {
        Type::Basic(BasicType::Char)
    }

    pub const fn int() -> Self {
        Type::Basic(BasicType::Int)
    }

    pub const fn void() -> Self {
        Type::Basic(BasicType::Void)
    }

    /// The error sentinel type, substituted wherever a type could not be parsed.
    pub const fn any() -> Self {
        Type::Basic(BasicType::Any)
    }

    pub fn array(element: Type) -> Self {
        Type::Array(Box::new(element))
    }

    /// The implicit superclass of a class with no `extends` clause.
    pub fn object() -> Self {
        let part = |name: &str| crate::Identifier::new(minijava_span::Symbol::intern(name), Span::dummy());
        Type::Named(QualifiedName::new(vec![part("java"), part("lang"), part("Object")]))
    }

    /// The element type of an array type; panics if called on a non-array type.
    pub fn component_type(&self) -> &Type {
        match self {
            Type::Array(element) => element,
            _ => panic!("component_type() called on a non-array type"),
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array(_))
    }

    /// Structural equality that treats `[[int]]` the same regardless of
    /// how its `Named` qualifiers were spelled versus a purely positional
    /// comparison; exists for parity with downstream type-checking that
    /// this crate does not itself perform.
    pub fn eq_flat(&self, other: &Self) -> bool {
        match (self, other) {
            (Type::Basic(a), Type::Basic(b)) => a == b,
            (Type::Named(a), Type::Named(b)) => a.last().matches(b.last()),
            (Type::Array(a), Type::Array(b)) => a.eq_flat(b),
            _ => false,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Basic(b) => write!(f, "{b}"),
            Type::Named(name) => write!(f, "{name}"),
            Type::Array(element) => write!(f, "{element}[]"),
        }
    }
}
