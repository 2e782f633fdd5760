//! Source-line tracking and identifier interning shared by the minijava
//! lexer, parser and AST crates.
//!
//! This crate is deliberately small: the parser only ever needs to recover
//! *which line* a token or AST node came from (there is no column tracking,
//! no multi-file span arithmetic), and it needs cheap, pointer-comparable
//! identifiers instead of repeatedly allocating and comparing `String`s.

mod span;
mod symbol;

pub use span::Span;
pub use symbol::Symbol;
