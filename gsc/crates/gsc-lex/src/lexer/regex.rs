//! Slashy and dollar-slashy literal lexing.
//!
//! Both forms interpolate like double-quoted strings but keep backslashes
//! and raw line breaks as written.

use crate::error::LexResult;
use crate::lexer::state::LiteralKind;
use crate::token::TokenKind;
use crate::unicode::is_line_break;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `$/…/$` from the opening `$/`.
    pub(crate) fn lex_dollar_regex(&mut self) -> LexResult<TokenKind> {
        self.cursor.advance_n(2);
        self.lex_literal_body(LiteralKind::DollarSlashy, true)
    }

    /// Body of `/…/`. The opening slash has already been consumed.
    pub(crate) fn lex_slashy_body(&mut self, from_start: bool) -> LexResult<TokenKind> {
        let mut text = String::new();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error_here("unterminated regex literal"));
            }
            match self.cursor.current() {
                '/' => {
                    self.cursor.advance();
                    return Ok(self.close_literal(LiteralKind::Slashy, from_start, text));
                },
                '\\' => self.lex_regex_backslash(&mut text, true),
                '$' if self.at_dollar_escape() => {
                    return Ok(self.suspend_literal(LiteralKind::Slashy, from_start, text));
                },
                c => {
                    self.cursor.advance();
                    text.push(c);
                },
            }
        }
    }

    /// Body of `$/…/$`. The opening `$/` has already been consumed.
    pub(crate) fn lex_dollar_slashy_body(&mut self, from_start: bool) -> LexResult<TokenKind> {
        let mut text = String::new();
        let mut at_start = from_start;

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error_here("unterminated dollar-slashy literal"));
            }
            match self.cursor.current() {
                '/' if self.cursor.peek(2) == '$' => {
                    self.cursor.advance_n(2);
                    return Ok(self.close_literal(LiteralKind::DollarSlashy, from_start, text));
                },
                '$' if self.at_dollar_escape() => {
                    return Ok(self.suspend_literal(LiteralKind::DollarSlashy, from_start, text));
                },
                '$' if !at_start && matches!(self.cursor.peek(2), '/' | '$') => {
                    self.cursor.advance();
                    text.push(self.cursor.advance());
                },
                '\\' => self.lex_regex_backslash(&mut text, false),
                c => {
                    self.cursor.advance();
                    text.push(c);
                },
            }
            at_start = false;
        }
    }

    /// A backslash in a regex body: a line continuation, `\/` in slashy
    /// form, or otherwise kept as written.
    fn lex_regex_backslash(&mut self, out: &mut String, slash_escape: bool) {
        let next = self.cursor.peek(2);
        self.cursor.advance();
        if is_line_break(next) {
            self.consume_line_break();
        } else if slash_escape && next == '/' {
            self.cursor.advance();
            out.push('/');
        } else {
            out.push('\\');
        }
    }
}
