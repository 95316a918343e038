//! Error types for the lexer crate.
//!
//! [`LexError`] is what scanning returns; [`ConfigError`] is what loading a
//! [`LexerConfig`](crate::config::LexerConfig) returns. Positioned lexer
//! errors convert into [`gsc_util::Diagnostic`]s for reporting.

use std::path::PathBuf;

use gsc_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Span};
use thiserror::Error;

/// Raw line break while a single-line literal is open.
pub const NEWLINE_IN_LITERAL: &str =
    "end of line reached within a simple string 'x' or \"x\" or /x/";
pub const NEWLINE_IN_LITERAL_HINT: &str =
    "for multi-line literals, use triple quotes '''x''' or \"\"\"x\"\"\" or /x/ or $/x/$";
/// `$` not followed by a name or `{` in a double-quoted string.
pub const ILLEGAL_DOLLAR: &str = "illegal string body character after dollar sign";
pub const ILLEGAL_DOLLAR_HINT: &str =
    "either escape a literal dollar sign \"\\$5\" or bracket the value expression \"${5}\"";

/// Error produced while scanning.
#[derive(Debug, Error)]
pub enum LexError {
    /// No token starts with this character
    #[error("unexpected char: '{}' at {line}:{column}", .found.escape_debug())]
    UnexpectedChar { found: char, line: u32, column: u32 },

    /// A string, regex, number, comment or escape is malformed
    #[error("{message} at {line}:{column}")]
    MalformedLiteral {
        message: String,
        hint: Option<String>,
        line: u32,
        column: u32,
    },

    /// The input stream could not be read
    #[error("error reading source: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream is not valid UTF-8
    #[error("source is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Result type alias for lexer operations
pub type LexResult<T> = std::result::Result<T, LexError>;

impl LexError {
    pub fn malformed(message: impl Into<String>, line: u32, column: u32) -> Self {
        LexError::MalformedLiteral {
            message: message.into(),
            hint: None,
            line,
            column,
        }
    }

    /// Attaches a remediation hint. No-op for variants without one.
    pub fn with_hint(mut self, new_hint: impl Into<String>) -> Self {
        if let LexError::MalformedLiteral { ref mut hint, .. } = self {
            *hint = Some(new_hint.into());
        }
        self
    }

    /// Line of the offending character; `None` for stream errors.
    pub fn line(&self) -> Option<u32> {
        match self {
            LexError::UnexpectedChar { line, .. } | LexError::MalformedLiteral { line, .. } => {
                Some(*line)
            },
            LexError::Io(_) | LexError::Encoding(_) => None,
        }
    }

    /// Column of the offending character; `None` for stream errors.
    pub fn column(&self) -> Option<u32> {
        match self {
            LexError::UnexpectedChar { column, .. }
            | LexError::MalformedLiteral { column, .. } => Some(*column),
            LexError::Io(_) | LexError::Encoding(_) => None,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            LexError::MalformedLiteral { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    /// The message without the trailing position.
    pub fn message(&self) -> String {
        match self {
            LexError::UnexpectedChar { found, .. } => {
                format!("unexpected char: '{}'", found.escape_debug())
            },
            LexError::MalformedLiteral { message, .. } => message.clone(),
            LexError::Io(err) => format!("error reading source: {err}"),
            LexError::Encoding(err) => format!("source is not valid UTF-8: {err}"),
        }
    }

    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedChar { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::MalformedLiteral { .. } => DiagnosticCode::E_LEXER_MALFORMED_LITERAL,
            LexError::Io(_) | LexError::Encoding(_) => DiagnosticCode::E_LEXER_STREAM,
        }
    }

    /// Whether this is an input stream failure rather than a lexical error.
    pub fn is_stream_error(&self) -> bool {
        matches!(self, LexError::Io(_) | LexError::Encoding(_))
    }

    /// One-character span at the error position, or the dummy span for
    /// stream errors.
    pub fn span(&self) -> Span {
        match (self.line(), self.column()) {
            (Some(line), Some(column)) => Span::point(line, column).with_end(line, column + 1),
            _ => Span::DUMMY,
        }
    }

    /// Converts into a diagnostic carrying the code, span and hint.
    pub fn to_diagnostic(&self) -> Diagnostic {
        DiagnosticBuilder::error(self.message())
            .code(self.code())
            .span(self.span())
            .maybe_help(self.hint())
            .build()
    }

    /// Renders the error against `source` with a caret under the offending
    /// character.
    pub fn render(&self, source: &str) -> String {
        self.to_diagnostic().render(source)
    }
}

/// Error loading a lexer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for `LexerConfig`
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
