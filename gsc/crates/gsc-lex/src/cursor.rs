//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.
//!
//! Line breaks are `\n`, `\r\n` and a lone `\r`; each counts as exactly one
//! line. Every character (tab included) is one column wide.

/// Sentinel returned by lookahead past the end of input.
pub const EOF_CHAR: char = '\0';

/// A cursor for traversing source code character by character.
///
/// Lookahead is unbounded: [`Cursor::peek`] can look any number of
/// characters ahead, and [`Cursor::mark`] / [`Cursor::rewind`] undo a
/// speculative scan of any length.
///
/// # Example
///
/// ```
/// use gsc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("def x");
/// assert_eq!(cursor.current(), 'd');
/// assert_eq!(cursor.peek(3), 'f');
/// assert_eq!(cursor.advance(), 'd');
/// assert_eq!(cursor.current(), 'e');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

/// A saved cursor position, restored with [`Cursor::rewind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorMark {
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character `k` positions ahead, 1-based: `peek(1)` is the
    /// current character.
    ///
    /// Returns [`EOF_CHAR`] past the end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use gsc_lex::cursor::{Cursor, EOF_CHAR};
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek(1), 'a');
    /// assert_eq!(cursor.peek(2), 'b');
    /// assert_eq!(cursor.peek(3), EOF_CHAR);
    /// ```
    #[inline]
    pub fn peek(&self, k: usize) -> char {
        debug_assert!(k >= 1, "peek is 1-based");
        let rest = &self.source.as_bytes()[self.position..];

        // Fast path: an all-ASCII window can be indexed directly.
        if rest.len() >= k && rest[..k].is_ascii() {
            return rest[k - 1] as char;
        }

        self.source[self.position..]
            .chars()
            .nth(k.saturating_sub(1))
            .unwrap_or(EOF_CHAR)
    }

    /// Returns the current character (same as `peek(1)`).
    #[inline]
    pub fn current(&self) -> char {
        self.peek(1)
    }

    /// Returns true if fewer than `k` characters remain, i.e. `peek(k)`
    /// would run off the end.
    ///
    /// This tells a real `'\0'` in the input apart from the sentinel.
    #[inline]
    pub fn is_eof_at(&self, k: usize) -> bool {
        let rest = &self.source[self.position..];
        if rest.len() >= k && rest.as_bytes()[..k].is_ascii() {
            return false;
        }
        rest.chars().nth(k.saturating_sub(1)).is_none()
    }

    /// Consumes one character and returns it.
    ///
    /// Updates line and column tracking. Returns [`EOF_CHAR`] and does
    /// nothing if already at the end.
    #[inline]
    pub fn advance(&mut self) -> char {
        let c = match self.source[self.position..].chars().next() {
            Some(c) => c,
            None => return EOF_CHAR,
        };
        self.position += c.len_utf8();

        match c {
            '\n' => {
                self.line += 1;
                self.column = 1;
            },
            // `\r\n` is one break, counted when the `\n` is consumed.
            '\r' if self.current() == '\n' => {},
            '\r' => {
                self.line += 1;
                self.column = 1;
            },
            _ => self.column += 1,
        }
        c
    }

    /// Consumes `count` characters (stopping early at the end of input).
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the current character if it equals `expected`.
    #[inline]
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `expected` if the remaining input starts with it.
    ///
    /// # Example
    ///
    /// ```
    /// use gsc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(">>>=");
    /// assert!(!cursor.match_str(">>=")); // nothing consumed
    /// assert!(cursor.match_str(">>>"));
    /// assert_eq!(cursor.current(), '=');
    /// ```
    pub fn match_str(&mut self, expected: &str) -> bool {
        if self.remaining().starts_with(expected) {
            self.advance_n(expected.chars().count());
            true
        } else {
            false
        }
    }

    /// Whether the remaining input starts with `expected`, without consuming.
    #[inline]
    pub fn starts_with(&self, expected: &str) -> bool {
        self.remaining().starts_with(expected)
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from byte offset `start` to the current
    /// position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Saves the current position for a later [`Cursor::rewind`].
    #[inline]
    pub fn mark(&self) -> CursorMark {
        CursorMark {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores a position saved with [`Cursor::mark`].
    #[inline]
    pub fn rewind(&mut self, mark: CursorMark) {
        self.position = mark.position;
        self.line = mark.line;
        self.column = mark.column;
    }
}
