//! String literal lexing.
//!
//! Handles the four quote styles and the shared machinery for suspending
//! an interpolating literal at `$` and resuming it afterwards.

use tracing::trace;

use crate::error::{
    LexError, LexResult, ILLEGAL_DOLLAR, ILLEGAL_DOLLAR_HINT, NEWLINE_IN_LITERAL,
    NEWLINE_IN_LITERAL_HINT,
};
use crate::lexer::state::{LiteralKind, LiteralSubstate};
use crate::token::TokenKind;
use crate::unicode::{is_java_ident_start, is_line_break};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `"…"` or `"""…"""` from the opening quote.
    pub(crate) fn lex_double_quote(&mut self) -> LexResult<TokenKind> {
        if self.cursor.match_str("\"\"\"") {
            return self.lex_literal_body(LiteralKind::TripleQuoted, true);
        }
        self.cursor.advance();
        self.state.suppress_newlines();
        self.lex_literal_body(LiteralKind::Quoted, true)
    }

    /// Scans the body of an interpolating literal up to its end or its
    /// next interpolation, and returns the fragment kind.
    ///
    /// `from_start` is true right after the opening delimiter and false
    /// when resuming after an embedded value.
    pub(crate) fn lex_literal_body(&mut self, kind: LiteralKind, from_start: bool) -> LexResult<TokenKind> {
        let result = match kind {
            LiteralKind::Quoted | LiteralKind::TripleQuoted => self.lex_quoted_body(kind, from_start),
            LiteralKind::Slashy => self.lex_slashy_body(from_start),
            LiteralKind::DollarSlashy => self.lex_dollar_slashy_body(from_start),
        };
        if result.is_err() && kind.is_single_line() {
            self.state.release_newlines();
        }
        result
    }

    fn lex_quoted_body(&mut self, kind: LiteralKind, from_start: bool) -> LexResult<TokenKind> {
        let triple = kind == LiteralKind::TripleQuoted;
        let mut text = String::new();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error_here("unterminated string literal"));
            }
            let closed = if triple {
                self.cursor.match_str("\"\"\"")
            } else {
                self.cursor.match_char('"')
            };
            if closed {
                return Ok(self.close_literal(kind, from_start, text));
            }

            match self.cursor.current() {
                '\\' => self.lex_escape(&mut text)?,
                '$' if self.at_dollar_escape() => return Ok(self.suspend_literal(kind, from_start, text)),
                '$' => {
                    return Err(self.error_here(ILLEGAL_DOLLAR).with_hint(ILLEGAL_DOLLAR_HINT));
                },
                c if is_line_break(c) => {
                    if !triple {
                        self.state.newline_suppressed_depth = 0;
                        return Err(self.error_here(NEWLINE_IN_LITERAL).with_hint(NEWLINE_IN_LITERAL_HINT));
                    }
                    self.consume_line_break();
                    text.push('\n');
                },
                c => {
                    self.cursor.advance();
                    text.push(c);
                },
            }
        }
    }

    /// Lexes `'…'` or `'''…'''`. These never interpolate.
    pub(crate) fn lex_single_quote(&mut self) -> LexResult<TokenKind> {
        let triple = self.cursor.match_str("'''");
        if !triple {
            self.cursor.advance();
        }
        let mut text = String::new();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error_here("unterminated string literal"));
            }
            let closed = if triple {
                self.cursor.match_str("'''")
            } else {
                self.cursor.match_char('\'')
            };
            if closed {
                self.token_text = Some(text);
                return Ok(TokenKind::StringLiteral);
            }

            match self.cursor.current() {
                '\\' => self.lex_escape(&mut text)?,
                c if is_line_break(c) => {
                    if !triple {
                        return Err(self.error_here(NEWLINE_IN_LITERAL).with_hint(NEWLINE_IN_LITERAL_HINT));
                    }
                    self.consume_line_break();
                    text.push('\n');
                },
                c => {
                    self.cursor.advance();
                    text.push(c);
                },
            }
        }
    }

    /// Whether the `$` at the cursor starts an interpolation: `$`, an
    /// optional `*`, then `{` or an identifier start other than `$`.
    pub(crate) fn at_dollar_escape(&self) -> bool {
        let next = match self.cursor.peek(2) {
            '*' => self.cursor.peek(3),
            c => c,
        };
        next == '{' || (next != '$' && is_java_ident_start(next))
    }

    /// Consumes the `$` and leaves the literal waiting for its value.
    pub(crate) fn suspend_literal(&mut self, kind: LiteralKind, from_start: bool, text: String) -> TokenKind {
        self.cursor.advance();
        self.state.literal_substate = LiteralSubstate::ValueExpected(kind);
        self.token_text = Some(text);
        trace!(?kind, line = self.cursor.line(), column = self.cursor.column(), "literal suspended");
        kind.suspending_kind(from_start)
    }

    pub(crate) fn close_literal(&mut self, kind: LiteralKind, from_start: bool, text: String) -> TokenKind {
        if kind.is_single_line() {
            self.state.release_newlines();
        }
        self.token_text = Some(text);
        kind.closing_kind(from_start)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::Lexer;

    fn tokens(source: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(source)
            .map(|token| token.unwrap())
            .filter(|token| !token.is_eof())
            .map(|token| (token.kind(), token.into_text()))
            .collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokens(source).into_iter().map(|(kind, _)| kind).collect()
    }

    #[test]
    fn test_plain_strings() {
        assert_eq!(tokens(r#""hello""#), [(TokenKind::StringLiteral, "hello".to_string())]);
        assert_eq!(tokens("'a \"b\" $c'"), [(TokenKind::StringLiteral, "a \"b\" $c".to_string())]);
        assert_eq!(tokens(r#""it's""#), [(TokenKind::StringLiteral, "it's".to_string())]);
        assert_eq!(tokens(r#""""#), [(TokenKind::StringLiteral, String::new())]);
    }

    #[test]
    fn test_triple_quoted_normalizes_newlines() {
        assert_eq!(
            tokens("\"\"\"a\r\n\"b\"\rc\"\"\""),
            [(TokenKind::StringLiteral, "a\n\"b\"\nc".to_string())]
        );
        assert_eq!(tokens("'''x''y\n'''"), [(TokenKind::StringLiteral, "x''y\n".to_string())]);
    }

    #[test]
    fn test_interpolated_block() {
        assert_eq!(
            tokens(r#""a${1+2}b""#),
            [
                (TokenKind::StringStart, "a".to_string()),
                (TokenKind::LBrace, "{".to_string()),
                (TokenKind::NumInt, "1".to_string()),
                (TokenKind::Plus, "+".to_string()),
                (TokenKind::NumInt, "2".to_string()),
                (TokenKind::RBrace, "}".to_string()),
                (TokenKind::StringEnd, "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_interpolated_names_and_paths() {
        assert_eq!(
            kinds(r#""$a and $b.c.d!""#),
            [
                TokenKind::StringStart,
                TokenKind::Identifier,
                TokenKind::StringMiddle,
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::StringEnd,
            ]
        );
        // A dot not followed by a name ends the path.
        assert_eq!(
            tokens(r#""$x.""#),
            [
                (TokenKind::StringStart, String::new()),
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::StringEnd, ".".to_string()),
            ]
        );
    }

    #[test]
    fn test_dollar_in_name_ends_interpolation() {
        assert_eq!(
            tokens(r#""$a$b""#),
            [
                (TokenKind::StringStart, String::new()),
                (TokenKind::Identifier, "a".to_string()),
                (TokenKind::StringMiddle, String::new()),
                (TokenKind::Identifier, "b".to_string()),
                (TokenKind::StringEnd, String::new()),
            ]
        );
    }

    #[test]
    fn test_spread_interpolation() {
        assert_eq!(
            kinds(r#""$*{xs}""#),
            [
                TokenKind::StringStart,
                TokenKind::Star,
                TokenKind::LBrace,
                TokenKind::Identifier,
                TokenKind::RBrace,
                TokenKind::StringEnd,
            ]
        );
    }

    #[test]
    fn test_nested_string_inside_interpolation() {
        assert_eq!(
            kinds(r#""a${m["k"]}b""#),
            [
                TokenKind::StringStart,
                TokenKind::LBrace,
                TokenKind::Identifier,
                TokenKind::LBracket,
                TokenKind::StringLiteral,
                TokenKind::RBracket,
                TokenKind::RBrace,
                TokenKind::StringEnd,
            ]
        );
    }

    #[test]
    fn test_closure_inside_interpolation() {
        let kinds = kinds(r#""${ xs.each { it } }!""#);
        assert_eq!(kinds.first(), Some(&TokenKind::StringStart));
        assert_eq!(kinds.last(), Some(&TokenKind::StringEnd));
        assert_eq!(kinds.iter().filter(|&&k| k == TokenKind::RBrace).count(), 2);
    }

    #[test]
    fn test_illegal_dollar() {
        let err = Lexer::new(r#""cost: $5""#).next_token().unwrap_err();
        assert_eq!(err.message(), crate::error::ILLEGAL_DOLLAR);
        assert!(err.hint().is_some());
        assert_eq!(err.column(), Some(8));
    }

    #[test]
    fn test_newline_in_simple_string() {
        let mut lexer = Lexer::new("\"abc\ndef\"");
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.message(), crate::error::NEWLINE_IN_LITERAL);
        assert_eq!((err.line(), err.column()), (Some(1), Some(5)));
        assert_eq!(lexer.state().newline_suppressed_depth(), 0);

        let err = Lexer::new("'abc\n'").next_token().unwrap_err();
        assert_eq!(err.hint(), Some(crate::error::NEWLINE_IN_LITERAL_HINT));
    }

    #[test]
    fn test_newline_inside_simple_string_interpolation() {
        let err = Lexer::new("\"${a\n}\"").find_map(Result::err).unwrap();
        assert_eq!(err.message(), crate::error::NEWLINE_IN_LITERAL);
        assert_eq!((err.line(), err.column()), (Some(1), Some(5)));
    }

    #[test]
    fn test_newline_inside_triple_string_interpolation() {
        let tokens: Vec<Token> = Lexer::new("\"\"\"${\na\n}\"\"\"").map(|t| t.unwrap()).collect();
        assert_eq!(tokens.last().map(Token::kind), Some(TokenKind::EndOfInput));
        assert!(tokens.iter().any(|t| t.kind() == TokenKind::Newline));
    }

    #[test]
    fn test_unterminated_string_at_end_of_input() {
        let err = Lexer::new("x = \"abc").find_map(Result::err).unwrap();
        assert_eq!(err.message(), "unterminated string literal");
        assert_eq!((err.line(), err.column()), (Some(1), Some(9)));
    }

    #[test]
    fn test_fragment_spans_cover_delimiters() {
        let tokens: Vec<Token> = Lexer::new(r#""ab${x}cd""#).map(|t| t.unwrap()).collect();
        assert_eq!((tokens[0].start_col(), tokens[0].end_col()), (1, 5));
        assert_eq!((tokens[4].start_col(), tokens[4].end_col()), (8, 11));
    }
}
