use crate::{Expression, Type};
use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The bare `this` expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThisExpression {
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for ThisExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "this")
    }
}

crate::simple_node_impl!(ThisExpression);

/// The bare `super` expression, legal only as the receiver of a selector
/// such as `super.foo()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperExpression {
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for SuperExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "super")
    }
}

crate::simple_node_impl!(SuperExpression);

/// An explicit same-class constructor call `this(args)`, legal only as the
/// first statement of a constructor body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThisConstructionExpression {
    pub arguments: Vec<Expression>,
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for ThisConstructionExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "this(")?;
        write_args(f, &self.arguments)?;
        write!(f, ")")
    }
}

crate::simple_node_impl!(ThisConstructionExpression);

/// An explicit superclass constructor call `super(args)`, legal only as the
/// first statement of a constructor body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperConstructionExpression {
    pub arguments: Vec<Expression>,
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for SuperConstructionExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "super(")?;
        write_args(f, &self.arguments)?;
        write!(f, ")")
    }
}

crate::simple_node_impl!(SuperConstructionExpression);

/// An object-creation expression `new Type(args)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOpExpression {
    pub object_type: Type,
    pub arguments: Vec<Expression>,
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for NewOpExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "new {}(", self.object_type)?;
        write_args(f, &self.arguments)?;
        write!(f, ")")
    }
}

crate::simple_node_impl!(NewOpExpression);

/// An array-creation expression with explicit dimension sizes, e.g.
/// `new int[3][][]`. `array_type` is the fully-wrapped array type
/// (`int[][][]` in the example); `dims` holds only the dimension-size
/// expressions that were actually given (`[3]` above).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewArrayOpExpression {
    pub array_type: Type,
    pub dims: Vec<Expression>,
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for NewArrayOpExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "new {}", self.array_type.component_type())?;
        for dim in &self.dims {
            write!(f, "[{dim}]")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(NewArrayOpExpression);

/// One element of an array initializer: either a plain expression or a
/// nested initializer, e.g. the `{1, 2}` in `new int[][]{{1, 2}, {3}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrayInitializerElement {
    Expression(Expression),
    Nested(ArrayInitializerExpression),
}

impl fmt::Display for ArrayInitializerElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayInitializerElement::Expression(e) => write!(f, "{e}"),
            ArrayInitializerElement::Nested(n) => write!(f, "{n}"),
        }
    }
}

/// A brace-delimited array initializer, e.g. `new int[]{1, 2, 3}` or the
/// bare `{1, 2, 3}` form in `int[] a = {1, 2, 3};`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayInitializerExpression {
    pub array_type: Type,
    pub elements: Vec<ArrayInitializerElement>,
    pub span: Span,
    #[serde(default)]
    pub is_statement_expression: bool,
}

impl fmt::Display for ArrayInitializerExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, elem) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{elem}")?;
        }
        write!(f, "}}")
    }
}

crate::simple_node_impl!(ArrayInitializerExpression);

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Expression]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{arg}")?;
    }
    Ok(())
}
