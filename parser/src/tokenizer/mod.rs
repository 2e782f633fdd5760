//! Converts source text into the flat token stream the parser consumes.

pub mod token;
pub use token::*;

mod lexer;
pub use lexer::tokenize;

#[cfg(test)]
mod tests {
    use super::*;
    use minijava_errors::Handler;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new("test");
        tokenize(source, &handler).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn skips_whitespace_and_comments() {
        let source = "  // a line comment\n  /* a block\n comment */  class  ";
        assert_eq!(kinds(source), vec![TokenKind::Class, TokenKind::Eof]);
    }

    #[test]
    fn keywords_are_not_identifiers() {
        let source = "class extends void boolean char int if else while return new this super instanceof";
        use TokenKind::*;
        assert_eq!(
            kinds(source),
            vec![Class, Extends, Void, Boolean, Char, Int, If, Else, While, Return, New, This, Super, InstanceOf, Eof]
        );
    }

    #[test]
    fn literals_and_identifiers() {
        let source = "foo 123 'a' \"hi\"";
        use TokenKind::*;
        assert_eq!(kinds(source), vec![Identifier, IntLiteral, CharLiteral, StringLiteral, Eof]);
    }

    #[test]
    fn operators_maximal_munch() {
        let source = "+ ++ += - -- && == <= >";
        use TokenKind::*;
        assert_eq!(kinds(source), vec![Plus, Inc, PlusAssign, Minus, Dec, LAnd, Equal, Le, Gt, Eof]);
    }

    #[test]
    fn string_escapes() {
        let handler = Handler::new("test");
        let tokens = tokenize(r#""a\nb\"c""#, &handler);
        assert_eq!(tokens[0].image, "a\nb\"c");
        assert!(!handler.error_has_occurred());
    }

    #[test]
    fn unterminated_string_is_reported_and_skipped() {
        let (handler, buf) = Handler::new_with_buf("test");
        let tokens = tokenize("\"never closed\nclass", &handler);
        assert!(handler.error_has_occurred());
        assert!(buf.extract().contains("unterminated string"));
        // the lexer resumes after the bad literal and still finds `class`.
        assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), vec![TokenKind::Class, TokenKind::Eof]);
    }

    #[test]
    fn unrecognized_character_is_reported_and_skipped() {
        let (handler, buf) = Handler::new_with_buf("test");
        let tokens = tokenize("int x @ int y", &handler);
        assert!(handler.error_has_occurred());
        assert!(buf.extract().contains("unrecognized character"));
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Int,
                TokenKind::Identifier,
                TokenKind::Int,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn line_numbers_advance_on_newline() {
        let handler = Handler::new("test");
        let tokens = tokenize("int\nx\n;", &handler);
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2].line, 3);
    }
}
