use crate::Node;
use minijava_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

mod access;
pub use access::*;
mod binary;
pub use binary::*;
mod call;
pub use call::*;
mod cast;
pub use cast::*;
mod creation;
pub use creation::*;
mod literal;
pub use literal::*;
mod unary;
pub use unary::*;
mod wild;
pub use wild::*;

/// An expression that evaluates to a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Literal(LiteralExpression),
    Variable(VariableExpression),
    FieldSelection(FieldSelectionExpression),
    Array(ArrayExpression),
    Message(MessageExpression),
    This(ThisExpression),
    Super(SuperExpression),
    ThisConstruction(ThisConstructionExpression),
    SuperConstruction(SuperConstructionExpression),
    New(NewOpExpression),
    NewArray(NewArrayOpExpression),
    ArrayInitializer(ArrayInitializerExpression),
    Unary(UnaryExpression),
    IncDec(IncDecExpression),
    Binary(BinaryExpression),
    InstanceOf(InstanceOfExpression),
    Cast(CastOpExpression),
    /// An error placeholder substituted wherever an expression failed to parse.
    Wild(WildExpression),
}

impl Expression {
    /// Whether this node is one of the forms the grammar allows as a bare
    /// statement (assignment, increment/decrement, a call, or object
    /// creation) rather than a value-producing expression with no
    /// side-effect.
    pub fn is_valid_statement_expression(&self) -> bool {
        matches!(
            self,
            Expression::Binary(BinaryExpression { op: BinaryOperation::Assign | BinaryOperation::PlusAssign, .. })
                | Expression::IncDec(_)
                | Expression::Message(_)
                | Expression::ThisConstruction(_)
                | Expression::SuperConstruction(_)
                | Expression::New(_)
                | Expression::NewArray(_)
        )
    }

    /// Flips this node's `is_statement_expression` flag on. Called once,
    /// by the parser, on the outermost node of an expression accepted as a
    /// statement in its own right.
    pub fn mark_as_statement_expression(&mut self) {
        use Expression::*;
        match self {
            Literal(n) => n.is_statement_expression = true,
            Variable(n) => n.is_statement_expression = true,
            FieldSelection(n) => n.is_statement_expression = true,
            Array(n) => n.is_statement_expression = true,
            Message(n) => n.is_statement_expression = true,
            This(n) => n.is_statement_expression = true,
            Super(n) => n.is_statement_expression = true,
            ThisConstruction(n) => n.is_statement_expression = true,
            SuperConstruction(n) => n.is_statement_expression = true,
            New(n) => n.is_statement_expression = true,
            NewArray(n) => n.is_statement_expression = true,
            ArrayInitializer(n) => n.is_statement_expression = true,
            Unary(n) => n.is_statement_expression = true,
            IncDec(n) => n.is_statement_expression = true,
            Binary(n) => n.is_statement_expression = true,
            InstanceOf(n) => n.is_statement_expression = true,
            Cast(n) => n.is_statement_expression = true,
            Wild(n) => n.is_statement_expression = true,
        }
    }

    /// Whether the parser marked this node as a statement-expression; see
    /// [`Expression::mark_as_statement_expression`].
    pub fn is_statement_expression(&self) -> bool {
        use Expression::*;
        match self {
            Literal(n) => n.is_statement_expression,
            Variable(n) => n.is_statement_expression,
            FieldSelection(n) => n.is_statement_expression,
            Array(n) => n.is_statement_expression,
            Message(n) => n.is_statement_expression,
            This(n) => n.is_statement_expression,
            Super(n) => n.is_statement_expression,
            ThisConstruction(n) => n.is_statement_expression,
            SuperConstruction(n) => n.is_statement_expression,
            New(n) => n.is_statement_expression,
            NewArray(n) => n.is_statement_expression,
            ArrayInitializer(n) => n.is_statement_expression,
            Unary(n) => n.is_statement_expression,
            IncDec(n) => n.is_statement_expression,
            Binary(n) => n.is_statement_expression,
            InstanceOf(n) => n.is_statement_expression,
            Cast(n) => n.is_statement_expression,
            Wild(n) => n.is_statement_expression,
        }
    }
}

impl Node for Expression {
    fn span(&self) -> Span {
        use Expression::*;
        match self {
            Literal(n) => n.span(),
            Variable(n) => n.span(),
            FieldSelection(n) => n.span(),
            Array(n) => n.span(),
            Message(n) => n.span(),
            This(n) => n.span(),
            Super(n) => n.span(),
            ThisConstruction(n) => n.span(),
            SuperConstruction(n) => n.span(),
            New(n) => n.span(),
            NewArray(n) => n.span(),
            ArrayInitializer(n) => n.span(),
            Unary(n) => n.span(),
            IncDec(n) => n.span(),
            Binary(n) => n.span(),
            InstanceOf(n) => n.span(),
            Cast(n) => n.span(),
            Wild(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Expression::*;
        match self {
            Literal(n) => n.set_span(span),
            Variable(n) => n.set_span(span),
            FieldSelection(n) => n.set_span(span),
            Array(n) => n.set_span(span),
            Message(n) => n.set_span(span),
            This(n) => n.set_span(span),
            Super(n) => n.set_span(span),
            ThisConstruction(n) => n.set_span(span),
            SuperConstruction(n) => n.set_span(span),
            New(n) => n.set_span(span),
            NewArray(n) => n.set_span(span),
            ArrayInitializer(n) => n.set_span(span),
            Unary(n) => n.set_span(span),
            IncDec(n) => n.set_span(span),
            Binary(n) => n.set_span(span),
            InstanceOf(n) => n.set_span(span),
            Cast(n) => n.set_span(span),
            Wild(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expression::*;
        match self {
            Literal(n) => n.fmt(f),
            Variable(n) => n.fmt(f),
            FieldSelection(n) => n.fmt(f),
            Array(n) => n.fmt(f),
            Message(n) => n.fmt(f),
            This(n) => n.fmt(f),
            Super(n) => n.fmt(f),
            ThisConstruction(n) => n.fmt(f),
            SuperConstruction(n) => n.fmt(f),
            New(n) => n.fmt(f),
            NewArray(n) => n.fmt(f),
            ArrayInitializer(n) => n.fmt(f),
            Unary(n) => n.fmt(f),
            IncDec(n) => n.fmt(f),
            Binary(n) => n.fmt(f),
            InstanceOf(n) => n.fmt(f),
            Cast(n) => n.fmt(f),
            Wild(n) => n.fmt(f),
        }
    }
}
