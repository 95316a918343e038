//! Span module - Source location tracking.
//!
//! A [`Span`] records where a piece of source text lives: its byte range
//! plus the human-readable line/column of both ends. Lines and columns are
//! 1-based; the end position is exclusive (the position just after the last
//! character).
//!
//! # Examples
//!
//! ```
//! use gsc_util::span::Span;
//!
//! let span = Span::new(0, 3, 1, 1).with_end(1, 4);
//! assert_eq!(span.len(), 3);
//! assert_eq!(format!("{}", span), "1:1");
//! ```

use std::fmt;

/// Source location span
///
/// # Examples
///
/// ```
/// use gsc_util::span::Span;
///
/// let point = Span::point(2, 7);
/// assert!(point.is_empty());
/// assert_eq!(point.line, 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Start line (1-based)
    pub line: u32,
    /// Start column (1-based)
    pub column: u32,
    /// End line (1-based)
    pub end_line: u32,
    /// End column (1-based, exclusive)
    pub end_column: u32,
}

impl Span {
    /// Dummy span for testing and synthesized diagnostics
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        end_line: 0,
        end_column: 0,
    };

    /// Create a new span covering `start..end` that begins at `line:column`.
    ///
    /// The end position defaults to the start position; use
    /// [`Span::with_end`] to record where the span stops.
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            end_line: line,
            end_column: column,
        }
    }

    /// Create a zero-width span at a single line/column
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self::new(0, 0, line, column)
    }

    /// Set the end line/column
    #[inline]
    pub fn with_end(mut self, end_line: u32, end_column: u32) -> Self {
        self.end_line = end_line;
        self.end_column = end_column;
        self
    }

    /// Length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this is the dummy span
    #[inline]
    pub fn is_dummy(&self) -> bool {
        *self == Self::DUMMY
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
