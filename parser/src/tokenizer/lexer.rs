use super::token::{Token, TokenKind};
use minijava_errors::{Handler, ScanError};
use minijava_span::Span;
use std::{iter::Peekable, str::Chars};

/// Lexes `source` into a flat token stream, discarding whitespace and
/// comments. A malformed byte (an unrecognized character, an unterminated
/// literal) is reported through `handler` and then skipped so a single bad
/// character never aborts tokenization of an otherwise parseable file; the
/// resulting token stream simply omits the offending span.
pub fn tokenize(source: &str, handler: &Handler) -> Vec<Token> {
    let mut lexer = Lexer { chars: source.chars().peekable(), line: 1 };
    let mut tokens = Vec::new();
    loop {
        match lexer.next_token() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => break,
            Err(e) => {
                let span = e.span().unwrap_or_else(|| Span::new(lexer.line));
                handler.emit_err(span, &e.to_string());
            }
        }
    }
    tokens.push(Token::eof(lexer.line));
    tokens
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: u32,
}

impl<'a> Lexer<'a> {
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    fn eat_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes whitespace and comments. Comments never become tokens.
    fn skip_trivia(&mut self) -> Result<(), ScanError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') => {
                    let mut lookahead = self.chars.clone();
                    lookahead.next();
                    match lookahead.peek() {
                        Some('/') => {
                            self.bump();
                            self.bump();
                            while !matches!(self.peek(), Some('\n') | None) {
                                self.bump();
                            }
                        }
                        Some('*') => {
                            let start_line = self.line;
                            self.bump();
                            self.bump();
                            loop {
                                match self.bump() {
                                    Some('*') if self.peek() == Some('/') => {
                                        self.bump();
                                        break;
                                    }
                                    Some(_) => continue,
                                    None => {
                                        return Err(ScanError::UnterminatedBlockComment {
                                            span: Span::new(start_line),
                                        });
                                    }
                                }
                            }
                        }
                        _ => return Ok(()),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        self.skip_trivia()?;
        let line = self.line;
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(None),
        };

        if c.is_ascii_digit() {
            return Ok(Some(self.eat_int(line)));
        }
        if c == '_' || c.is_alphabetic() {
            return Ok(Some(self.eat_identifier_or_keyword(line)));
        }
        if c == '"' {
            return self.eat_string(line).map(Some);
        }
        if c == '\'' {
            return self.eat_char(line).map(Some);
        }

        self.bump();
        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LCurly,
            '}' => TokenKind::RCurly,
            '[' => TokenKind::LBrack,
            ']' => TokenKind::RBrack,
            ';' => TokenKind::Semi,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '*' => TokenKind::Star,
            '/' => TokenKind::Div,
            '%' => TokenKind::Mod,
            '!' => TokenKind::LNot,
            '=' => {
                if self.eat_if('=') {
                    TokenKind::Equal
                } else {
                    TokenKind::Assign
                }
            }
            '+' => {
                if self.eat_if('+') {
                    TokenKind::Inc
                } else if self.eat_if('=') {
                    TokenKind::PlusAssign
                } else {
                    TokenKind::Plus
                }
            }
            '-' => {
                if self.eat_if('-') {
                    TokenKind::Dec
                } else {
                    TokenKind::Minus
                }
            }
            '>' => TokenKind::Gt,
            '<' if self.eat_if('=') => TokenKind::Le,
            '&' if self.eat_if('&') => TokenKind::LAnd,
            other => {
                return Err(ScanError::UnrecognizedCharacter { character: other, span: Span::new(line) });
            }
        };
        let image = kind.image().trim_matches('\'').to_string();
        Ok(Some(Token::new(kind, image, line)))
    }

    fn eat_int(&mut self, line: u32) -> Token {
        let mut image = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                image.push(c);
                self.bump();
            } else {
                break;
            }
        }
        Token::new(TokenKind::IntLiteral, image, line)
    }

    fn eat_identifier_or_keyword(&mut self, line: u32) -> Token {
        let mut image = String::new();
        while let Some(c) = self.peek() {
            if c == '_' || c.is_alphanumeric() {
                image.push(c);
                self.bump();
            } else {
                break;
            }
        }
        match TokenKind::keyword_from_str(&image) {
            Some(kind) => Token::new(kind, image, line),
            None => Token::new(TokenKind::Identifier, image, line),
        }
    }

    /// Resolves a `\x` escape sequence. Returns `None` if the input ends
    /// right after the backslash.
    fn eat_escape(&mut self) -> Option<char> {
        Some(match self.bump()? {
            'n' => '\n',
            't' => '\t',
            '\\' => '\\',
            '\'' => '\'',
            '"' => '"',
            '0' => '\0',
            other => other,
        })
    }

    fn eat_string(&mut self, line: u32) -> Result<Token, ScanError> {
        self.bump(); // opening quote
        let mut image = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(Token::new(TokenKind::StringLiteral, image, line)),
                Some('\\') => match self.eat_escape() {
                    Some(c) => image.push(c),
                    None => return Err(ScanError::UnterminatedString { span: Span::new(line) }),
                },
                Some('\n') | None => return Err(ScanError::UnterminatedString { span: Span::new(line) }),
                Some(c) => image.push(c),
            }
        }
    }

    fn eat_char(&mut self, line: u32) -> Result<Token, ScanError> {
        self.bump(); // opening quote
        let value = match self.bump() {
            Some('\\') => match self.eat_escape() {
                Some(c) => c,
                None => return Err(ScanError::UnterminatedChar { span: Span::new(line) }),
            },
            Some('\'') => return Err(ScanError::EmptyCharLiteral { span: Span::new(line) }),
            Some(c) => c,
            None => return Err(ScanError::UnterminatedChar { span: Span::new(line) }),
        };
        if !self.eat_if('\'') {
            return Err(ScanError::UnterminatedChar { span: Span::new(line) });
        }
        Ok(Token::new(TokenKind::CharLiteral, value.to_string(), line))
    }
}
