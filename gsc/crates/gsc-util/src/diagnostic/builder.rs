//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type and the
//! [`SourceSnippet`] used to show the offending line under a diagnostic.

use super::{Diagnostic, DiagnosticCode, Level};
use crate::Span;

/// A source line plus the highlighted column range.
///
/// # Examples
///
/// ```
/// use gsc_util::diagnostic::SourceSnippet;
///
/// use gsc_util::Span;
///
/// let span = Span::new(8, 13, 1, 9).with_end(1, 14);
/// let snippet = SourceSnippet::from_source("def x = 'oops", span).unwrap();
/// assert!(snippet.format().ends_with("        ^^^^^"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Cut the snippet for `span` out of `source`.
    ///
    /// Returns `None` for the dummy span or when the line does not exist.
    /// A span running over several lines is clipped at the end of its first
    /// line.
    pub fn from_source(source: &str, span: Span) -> Option<Self> {
        if span.line == 0 {
            return None;
        }
        let line_number = span.line as usize;
        let line = source.lines().nth(line_number - 1)?;
        let start_column = span.column.max(1) as usize;
        let end_column = if span.end_line == span.line {
            (span.end_column as usize).max(start_column)
        } else {
            line.chars().count() + 1
        };
        Some(Self {
            line: line.to_string(),
            line_number,
            start_column,
            end_column,
        })
    }

    /// Format the snippet for display
    ///
    /// Returns the source line followed by a caret (^) line under the
    /// highlighted range.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use gsc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use gsc_util::Span;
///
/// let diag = DiagnosticBuilder::error("unexpected character '#'")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::point(3, 1))
///     .help("remove the character")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            helps: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a help line only when one is present
    pub fn maybe_help(self, help: Option<impl Into<String>>) -> Self {
        match help {
            Some(help) => self.help(help),
            None => self,
        }
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            helps: self.helps,
        }
    }

    /// Build and hand the diagnostic to `handler`
    pub fn emit(self, handler: &super::Handler) {
        handler.emit_diagnostic(self.build());
    }
}
