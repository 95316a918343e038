//! Whitespace, line break and comment lexing.
//!
//! In the default mode these produce no tokens, except for a line break at
//! statement level which becomes a single `Newline` token that swallows any
//! blank lines and comments after it.

use crate::comment::CommentKind;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::{is_horizontal_whitespace, is_line_break};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes a run of spaces, tabs, form feeds and `\`-newline
    /// continuations.
    pub(crate) fn lex_whitespace(&mut self) -> Option<TokenKind> {
        self.skip_horizontal_space();
        self.trivia(TokenKind::Whitespace)
    }

    fn skip_horizontal_space(&mut self) {
        loop {
            let c = self.cursor.current();
            if is_horizontal_whitespace(c) {
                self.cursor.advance();
            } else if c == '\\' && is_line_break(self.cursor.peek(2)) {
                self.cursor.advance();
                self.consume_line_break();
            } else {
                break;
            }
        }
    }

    /// Lexes a line break.
    pub(crate) fn lex_newline(&mut self) -> LexResult<Option<TokenKind>> {
        let (line, column) = (self.cursor.line(), self.cursor.column());
        self.consume_line_break();
        self.check_newline_suppression(line, column)?;

        if self.state.bracket_depth != 0 {
            return Ok(self.trivia(TokenKind::Newline));
        }

        if self.config.include_whitespace_tokens {
            return Ok(Some(TokenKind::Newline));
        }

        self.fold_statement_breaks()?;
        self.token_text = Some(Token::NEWLINE_TEXT.to_string());
        Ok(Some(TokenKind::Newline))
    }

    /// Absorbs blank lines, whitespace and comments following a statement
    /// break.
    fn fold_statement_breaks(&mut self) -> LexResult<()> {
        loop {
            self.skip_horizontal_space();
            match self.cursor.current() {
                '\n' | '\r' => {
                    let (line, column) = (self.cursor.line(), self.cursor.column());
                    self.consume_line_break();
                    self.check_newline_suppression(line, column)?;
                },
                '/' if self.cursor.peek(2) == '/' => {
                    self.lex_line_comment();
                },
                '/' if self.cursor.peek(2) == '*' => {
                    self.lex_block_comment()?;
                },
                _ => return Ok(()),
            }
        }
    }

    /// Lexes a `//` comment up to, but not including, the line break.
    pub(crate) fn lex_line_comment(&mut self) -> Option<TokenKind> {
        let start = self.cursor.position();
        self.comment_started(self.cursor.line(), self.cursor.column());
        self.cursor.advance_n(2);
        while !self.cursor.is_at_end() && !is_line_break(self.cursor.current()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        self.comment_ended(CommentKind::Line, text);
        self.trivia(TokenKind::LineComment)
    }

    /// Lexes a `/* */` comment. Block comments do not nest.
    pub(crate) fn lex_block_comment(&mut self) -> LexResult<Option<TokenKind>> {
        let start = self.cursor.position();
        self.comment_started(self.cursor.line(), self.cursor.column());
        self.cursor.advance_n(2);

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error_here("unterminated block comment"));
            }
            if self.cursor.match_str("*/") {
                break;
            }
            if is_line_break(self.cursor.current()) {
                let (line, column) = (self.cursor.line(), self.cursor.column());
                self.consume_line_break();
                self.check_newline_suppression(line, column)?;
            } else {
                self.cursor.advance();
            }
        }

        let text = self.cursor.slice_from(start);
        self.comment_ended(CommentKind::Block, text);
        Ok(self.trivia(TokenKind::BlockComment))
    }

    /// Lexes `#`, which is only valid as a `#!` line at the very start of
    /// the input.
    pub(crate) fn lex_hash(&mut self) -> LexResult<Option<TokenKind>> {
        let (line, column) = (self.cursor.line(), self.cursor.column());
        if self.cursor.peek(2) != '!' {
            return Err(LexError::UnexpectedChar { found: '#', line, column });
        }
        if self.cursor.position() != 0 {
            return Err(LexError::malformed(
                "a shebang line is only allowed at the start of the input",
                line,
                column,
            ));
        }
        while !self.cursor.is_at_end() && !is_line_break(self.cursor.current()) {
            self.cursor.advance();
        }
        Ok(self.trivia(TokenKind::ShebangComment))
    }
}
