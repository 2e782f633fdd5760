use minijava_span::Span;
use thiserror::Error;

/// A failure the lexer cannot route through the ordinary diagnostic
/// channel because it has no token to attach the error to yet, plus the
/// handful of internal misuse checks (bookmark imbalance) that indicate a
/// bug in the parser rather than a malformed source file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("unrecognized character {character:?}")]
    UnrecognizedCharacter { character: char, span: Span },

    #[error("unterminated string literal")]
    UnterminatedString { span: Span },

    #[error("unterminated character literal")]
    UnterminatedChar { span: Span },

    #[error("unterminated block comment")]
    UnterminatedBlockComment { span: Span },

    #[error("empty character literal")]
    EmptyCharLiteral { span: Span },

    #[error("scanner bookmark stack was not balanced")]
    UnbalancedBookmark,
}

impl ScanError {
    pub fn span(&self) -> Option<Span> {
        match self {
            ScanError::UnrecognizedCharacter { span, .. }
            | ScanError::UnterminatedString { span, .. }
            | ScanError::UnterminatedChar { span, .. }
            | ScanError::UnterminatedBlockComment { span, .. }
            | ScanError::EmptyCharLiteral { span, .. } => Some(*span),
            ScanError::UnbalancedBookmark => None,
        }
    }
}
