//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the `next_token` entry point
//! with its literal resumption path, and the dispatcher that picks a `lex_*`
//! method from the next few characters.

use gsc_util::Span;
use tracing::{debug, trace};

use crate::comment::{CommentKind, CommentSink};
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult, NEWLINE_IN_LITERAL, NEWLINE_IN_LITERAL_HINT};
use crate::lexer::state::{LiteralSubstate, ScannerState};
use crate::token::{Token, TokenKind};
use crate::unicode::{is_horizontal_whitespace, is_ident_start, is_line_break};

/// Lexer for the gsc scripting language.
///
/// The lexer is pull-based: every call to [`Lexer::next_token`] returns the
/// next token the parser should see. Whitespace, newlines inside brackets
/// and comments are skipped unless
/// [`LexerConfig::include_whitespace_tokens`] is set.
///
/// # Example
///
/// ```
/// use gsc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x = /a+/");
/// let kinds: Vec<TokenKind> = std::iter::from_fn(|| {
///     let token = lexer.next_token().unwrap();
///     (!token.is_eof()).then(|| token.kind())
/// })
/// .collect();
/// assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Assign, TokenKind::RegexLiteral]);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    pub(crate) config: LexerConfig,

    pub(crate) state: ScannerState,

    /// Receives every comment, whether or not comment tokens are returned.
    comment_sink: Option<Box<dyn CommentSink + 'a>>,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Text for the current token when it is not the raw source slice
    /// (decoded literal bodies, `<newline>`).
    pub(crate) token_text: Option<String>,

    /// Set once `EndOfInput` has been returned.
    finished: bool,

    /// Set when an error is returned; fuses the iterator.
    halted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        debug!(bytes = source.len(), ?config, "creating lexer");
        Self {
            cursor: Cursor::new(source),
            config,
            state: ScannerState::new(),
            comment_sink: None,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            token_text: None,
            finished: false,
            halted: false,
        }
    }

    /// Attaches a sink that is told about every `//` and `/*` comment.
    pub fn with_comment_sink(mut self, sink: impl CommentSink + 'a) -> Self {
        self.comment_sink = Some(Box::new(sink));
        self
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Changes the configuration mid-scan. Takes effect from the next token.
    pub fn config_mut(&mut self) -> &mut LexerConfig {
        &mut self.config
    }

    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    /// Returns the next token.
    ///
    /// Returns `EndOfInput` once the input is exhausted, and keeps
    /// returning it on later calls. An error leaves the lexer positioned at
    /// the offending character; see [`Lexer::skip_char`] to carry on.
    pub fn next_token(&mut self) -> LexResult<Token> {
        match self.scan_next() {
            Ok(token) => {
                trace!(
                    token = %token,
                    line = token.start_line(),
                    column = token.start_col(),
                    "token"
                );
                Ok(token)
            },
            Err(err) => {
                debug!(error = %err, "lexical error");
                self.token_text = None;
                self.halted = true;
                Err(err)
            },
        }
    }

    /// Skips one character and drops any literal waiting to resume, so
    /// that scanning can be retried after an error.
    ///
    /// Returns false if there was no character left to skip.
    pub fn skip_char(&mut self) -> bool {
        self.halted = false;
        if matches!(self.state.literal_substate, LiteralSubstate::LiteralResuming(_)) {
            self.state.literal_substate = LiteralSubstate::None;
        }
        if self.cursor.is_at_end() {
            return false;
        }
        let skipped = self.cursor.advance();
        trace!(skipped = %skipped.escape_debug(), "skipping character");
        true
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    fn scan_next(&mut self) -> LexResult<Token> {
        if self.finished {
            self.begin_token();
            return Ok(self.make_token(TokenKind::EndOfInput));
        }

        loop {
            self.begin_token();

            let kind = match self.state.literal_substate {
                LiteralSubstate::LiteralResuming(kind) => {
                    self.state.literal_substate = LiteralSubstate::None;
                    trace!(?kind, "resuming literal");
                    Some(self.lex_literal_body(kind, false)?)
                },
                _ => self.scan_token()?,
            };

            // `None` means skipped whitespace or comment.
            let Some(kind) = kind else { continue };

            let token = self.make_token(kind);
            self.after_token(kind);
            return Ok(token);
        }
    }

    /// Dispatches on the next character(s). Returns `None` for input that
    /// was consumed without producing a token.
    fn scan_token(&mut self) -> LexResult<Option<TokenKind>> {
        if self.cursor.is_at_end() {
            return Ok(Some(TokenKind::EndOfInput));
        }

        let c = self.cursor.current();
        let kind = match c {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            ':' => self.single(TokenKind::Colon),
            ',' => self.single(TokenKind::Comma),
            '~' => self.single(TokenKind::Tilde),
            ';' => self.single(TokenKind::Semi),
            '@' => self.single(TokenKind::At),
            c if is_horizontal_whitespace(c) => return Ok(self.lex_whitespace()),
            '\\' if is_line_break(self.cursor.peek(2)) => return Ok(self.lex_whitespace()),
            '\n' | '\r' => return self.lex_newline(),
            '"' => self.lex_double_quote()?,
            '\'' => self.lex_single_quote()?,
            '0'..='9' => self.lex_number()?,
            '/' => return self.lex_slash(),
            '$' if self.cursor.peek(2) == '/' && self.state.regex_allowed() => {
                self.lex_dollar_regex()?
            },
            '#' => return self.lex_hash(),
            '>' | '<' | '=' | '!' | '+' | '-' | '*' | '%' | '^' | '|' | '&' | '.' | '?' => {
                self.lex_operator()?
            },
            c if is_ident_start(c, self.dollar_in_identifiers()) => self.lex_identifier(),
            c => {
                return Err(LexError::UnexpectedChar {
                    found: c,
                    line: self.cursor.line(),
                    column: self.cursor.column(),
                })
            },
        };
        Ok(Some(kind))
    }

    /// Consumes one character and returns `kind`.
    pub(crate) fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// Returns `kind` if trivia tokens are wanted, `None` otherwise.
    pub(crate) fn trivia(&self, kind: TokenKind) -> Option<TokenKind> {
        self.config.include_whitespace_tokens.then_some(kind)
    }

    /// `$` is an identifier character except right after an interpolation
    /// marker.
    pub(crate) fn dollar_in_identifiers(&self) -> bool {
        !matches!(self.state.literal_substate, LiteralSubstate::ValueExpected(_))
    }

    /// Reports a raw line break at (`line`, `column`) if a single-line
    /// literal is open. The counter is cleared after reporting.
    pub(crate) fn check_newline_suppression(&mut self, line: u32, column: u32) -> LexResult<()> {
        if self.state.newline_suppressed_depth > 0 {
            self.state.newline_suppressed_depth = 0;
            return Err(LexError::malformed(NEWLINE_IN_LITERAL, line, column)
                .with_hint(NEWLINE_IN_LITERAL_HINT));
        }
        Ok(())
    }

    /// Consumes one line break (`\n`, `\r\n` or `\r`).
    pub(crate) fn consume_line_break(&mut self) {
        if self.cursor.current() == '\r' {
            self.cursor.advance();
            self.cursor.match_char('\n');
        } else {
            self.cursor.advance();
        }
    }

    pub(crate) fn comment_started(&mut self, line: u32, column: u32) {
        if let Some(sink) = self.comment_sink.as_mut() {
            sink.on_comment_start(line, column);
        }
    }

    pub(crate) fn comment_ended(&mut self, kind: CommentKind, text: &str) {
        let (line, column) = (self.cursor.line(), self.cursor.column());
        if let Some(sink) = self.comment_sink.as_mut() {
            sink.on_comment_end(kind, line, column, text);
        }
    }

    /// Error positioned at the cursor.
    pub(crate) fn error_here(&self, message: impl Into<String>) -> LexError {
        LexError::malformed(message, self.cursor.line(), self.cursor.column())
    }

    fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
        self.token_text = None;
    }

    fn make_token(&mut self, kind: TokenKind) -> Token {
        let end = self.cursor.position();
        let span = Span::new(self.token_start, end, self.token_start_line, self.token_start_column)
            .with_end(self.cursor.line(), self.cursor.column());
        let text = match self.token_text.take() {
            Some(text) => text,
            None if kind == TokenKind::EndOfInput => String::new(),
            None => self.cursor.slice_from(self.token_start).to_string(),
        };
        Token::new(kind, text, span)
    }

    /// Updates nesting and last-significant state for an emitted token.
    fn after_token(&mut self, kind: TokenKind) {
        match kind {
            TokenKind::LParen | TokenKind::LBracket => self.state.bracket_depth += 1,
            TokenKind::RParen | TokenKind::RBracket => self.state.bracket_depth -= 1,
            TokenKind::LBrace => self.state.push_brace(),
            TokenKind::RBrace => self.state.pop_brace(),
            TokenKind::EndOfInput => self.finished = true,
            _ => {},
        }

        // Every emitted line break counts, including one inside brackets in
        // whitespace mode.
        if kind == TokenKind::Newline || !kind.is_trivia() {
            self.state.last_significant_kind = kind;
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    /// Yields tokens up to and including `EndOfInput`, then `None`. After
    /// an error it yields `None` until [`Lexer::skip_char`] is called.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.halted {
            return None;
        }
        Some(self.next_token())
    }
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("line", &self.cursor.line())
            .field("column", &self.cursor.column())
            .field("config", &self.config)
            .field("state", &self.state)
            .field("has_comment_sink", &self.comment_sink.is_some())
            .finish()
    }
}
