use crate::tokenizer::{Token, TokenKind};
use minijava_ast::{Identifier, QualifiedName};
use minijava_errors::Handler;
use minijava_span::{Span, Symbol};

/// Drives the token cursor the grammar productions consume.
///
/// Tokens are scanned eagerly up front into a flat `Vec`, so "rewinding" to
/// try an alternative parse is just restoring an index: [`ParserContext::record_position`]
/// pushes the current index onto a bookmark stack and [`ParserContext::return_to_position`]
/// pops and restores it. Bookmarks are strictly LIFO; popping past an empty
/// stack is a parser bug, not a user-facing error, so it panics.
///
/// Error recovery follows the classic "one diagnostic per failure region"
/// discipline: once a mismatch has been reported, further mismatches are
/// swallowed silently until the parser resynchronizes on a token it
/// recognizes, so a single bad line doesn't produce a cascade of noise.
pub struct ParserContext<'a> {
    pub(crate) handler: &'a Handler,
    tokens: Vec<Token>,
    pos: usize,
    bookmarks: Vec<usize>,
    is_in_error: bool,
}

impl<'a> ParserContext<'a> {
    pub fn new(handler: &'a Handler, tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "token stream must end with Eof");
        Self { handler, tokens, pos: 0, bookmarks: Vec::new(), is_in_error: false }
    }

    pub fn file_name(&self) -> &str {
        self.handler.file_name()
    }

    /// The token the cursor is standing on.
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// The token the cursor just advanced past. Only valid after at least
    /// one [`ParserContext::advance`]; at the very start of the stream this
    /// is the same as [`ParserContext::current`].
    pub fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    pub fn span(&self) -> Span {
        Span::new(self.current().line)
    }

    pub fn prev_span(&self) -> Span {
        Span::new(self.previous().line)
    }

    /// Consumes and returns the current token, unless it is `Eof`, which
    /// never advances past itself.
    pub fn advance(&mut self) -> Token {
        let tok = self.current().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    /// Saves the current position so a tentative parse can be undone.
    pub fn record_position(&mut self) {
        self.bookmarks.push(self.pos);
    }

    /// Restores the position saved by the matching [`ParserContext::record_position`].
    pub fn return_to_position(&mut self) {
        self.pos = self.bookmarks.pop().expect("return_to_position with no matching record_position");
    }

    /// Discards the most recent bookmark without rewinding to it, i.e.
    /// commits to the tentative parse that created it.
    pub fn drop_bookmark(&mut self) {
        self.bookmarks.pop().expect("drop_bookmark with no matching record_position");
    }

    pub fn see(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    pub fn see_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current().kind)
    }

    /// Looks `dist` tokens ahead of the cursor without consuming anything.
    /// `dist == 0` is the current token.
    pub fn peek(&self, dist: usize) -> &Token {
        let idx = (self.pos + dist).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// `true` if the cursor is standing on an identifier immediately
    /// followed by `(`: the shape of a bare method call or, at the start
    /// of a class member, a constructor declaration.
    pub fn see_ident_lparen(&self) -> bool {
        self.see(TokenKind::Identifier) && self.peek(1).kind == TokenKind::LParen
    }

    /// Consumes the current token if it has kind `kind`.
    pub fn have(&mut self, kind: TokenKind) -> Option<Token> {
        self.see(kind).then(|| self.advance())
    }

    pub fn is_eof(&self) -> bool {
        self.see(TokenKind::Eof)
    }

    /// Requires the current token to have kind `kind`, consuming it.
    ///
    /// On a mismatch this reports at most one diagnostic per contiguous
    /// run of mismatches (the Turner-Morrison discipline). The *first*
    /// mismatch in a region only reports and flips to the not-recovered
    /// state; it does not consume anything, so whatever production runs
    /// next still sees the offending token and gets a chance to parse it
    /// on its own terms. Only a *second* consecutive mismatch — i.e. the
    /// next production didn't manage to consume past it either — starts
    /// silently skipping tokens, and it does so until it finds either
    /// `kind` itself or `Eof`. No other token is ever treated as a safe
    /// resynchronization point: the sought kind is the only anchor.
    pub fn must_be(&mut self, kind: TokenKind) -> Token {
        if self.see(kind) {
            self.is_in_error = false;
            return self.advance();
        }

        if !self.is_in_error {
            self.is_in_error = true;
            self.handler.emit_err(
                self.span(),
                format!("{} found where {} sought", self.current().display_image(), kind.image()),
            );
            return Token::new(kind, "", self.current().line);
        }

        while !self.see(kind) && !self.is_eof() {
            self.advance();
        }

        if self.see(kind) {
            self.is_in_error = false;
            self.advance()
        } else {
            Token::new(kind, "", self.current().line)
        }
    }

    pub fn expect_any(&mut self, kinds: &[TokenKind]) -> Token {
        if self.see_any(kinds) {
            self.is_in_error = false;
            return self.advance();
        }
        if !self.is_in_error {
            self.is_in_error = true;
            let expected = kinds.iter().map(|k| k.image()).collect::<Vec<_>>().join(" or ");
            self.handler.emit_err(self.span(), format!("{} found where {} sought", self.current().display_image(), expected));
            return Token::new(kinds[0], "", self.current().line);
        }
        while !self.see_any(kinds) && !self.is_eof() {
            self.advance();
        }
        if self.see_any(kinds) {
            self.is_in_error = false;
            self.advance()
        } else {
            Token::new(kinds[0], "", self.current().line)
        }
    }

    pub fn must_be_identifier(&mut self) -> Identifier {
        if self.see(TokenKind::Identifier) {
            self.is_in_error = false;
            let tok = self.advance();
            return Identifier { name: Symbol::intern(&tok.image), span: self.prev_span() };
        }
        let tok = self.must_be(TokenKind::Identifier);
        Identifier { name: Symbol::intern(&tok.image), span: Span::new(tok.line) }
    }

    /// Parses a dotted name: `a`, `a.b`, `a.b.c`, ...
    pub fn parse_qualified_name(&mut self) -> QualifiedName {
        let mut parts = vec![self.must_be_identifier()];
        while self.see(TokenKind::Dot) {
            self.advance();
            parts.push(self.must_be_identifier());
        }
        QualifiedName { parts }
    }

    pub fn emit_err(&self, span: Span, message: impl std::fmt::Display) {
        self.handler.emit_err(span, message);
    }
}
