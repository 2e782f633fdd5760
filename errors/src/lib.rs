//! Diagnostics for the minijava compiler front end.
//!
//! Syntax errors are never propagated as a Rust `Result`: the parser is
//! total and always returns a structurally valid AST (see the recovery
//! design in the parser crate). Diagnostics instead flow out through the
//! [`emitter::Handler`] side channel. The one genuine `Result`-producing
//! error in this crate is [`ScanError`], used for the small set of
//! construction-time failures the lexer can hit (an unterminated literal,
//! an unrecognized byte) and for debug-only misuse such as an unbalanced
//! scanner bookmark.

pub mod emitter;
mod scan_error;

pub use emitter::Handler;
pub use scan_error::ScanError;

pub type Result<T> = std::result::Result<T, ScanError>;
