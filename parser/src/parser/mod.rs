//! The recursive-descent parser that turns a token stream into a [`CompilationUnit`].
//!
//! This module contains the [`parse()`] entry point, which drives the
//! underlying [`tokenize()`] function and the grammar productions spread
//! across [`context`], [`type_`], [`expression`], [`statement`], and [`file`].

use minijava_ast::CompilationUnit;
use minijava_errors::Handler;

mod context;
pub use context::*;

pub mod expression;
pub mod file;
pub mod statement;
pub mod type_;

/// Parses `source` (attributed to `file_name` in diagnostics) into a
/// [`CompilationUnit`]. The returned tree is always structurally valid;
/// syntax errors surface as [`minijava_ast::WildExpression`] placeholders
/// and as `handler.error_has_occurred() == true`.
pub fn parse(source: &str, file_name: &str) -> (CompilationUnit, Handler) {
    let handler = Handler::new(file_name);
    let tokens = crate::tokenizer::tokenize(source, &handler);
    let mut context = ParserContext::new(&handler, tokens);
    let unit = context.parse_compilation_unit();
    (unit, handler)
}
