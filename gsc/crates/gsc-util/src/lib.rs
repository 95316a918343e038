//! gsc-util - Foundation types shared by the gsc front end.
//!
//! This crate holds the pieces every phase needs and no phase owns:
//!
//! - [`Span`]: byte range plus 1-based line/column of both ends.
//! - [`diagnostic`]: severity levels, [`Diagnostic`] values, the collecting
//!   [`Handler`], the fluent [`DiagnosticBuilder`] and the [`DiagnosticCode`]
//!   registry.
//!
//! # Examples
//!
//! ```
//! use gsc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_MALFORMED_LITERAL)
//!     .span(Span::point(1, 9))
//!     .emit(&handler);
//! assert_eq!(handler.error_count(), 1);
//! ```

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use span::Span;

/// Fast hash map used across the front end
pub use rustc_hash::{FxHashMap, FxHashSet};
