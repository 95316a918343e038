//! Comment reporting.
//!
//! The lexer reports every `//` and `/*` comment to an optional
//! [`CommentSink`], whether or not comment tokens are being returned.
//! Shebang lines are not reported.

/// Whether a comment is `//` or `/* */`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommentKind {
    Line,
    Block,
}

/// Receives comments as the lexer scans them.
pub trait CommentSink {
    /// Called at the position of the opening `//` or `/*`.
    fn on_comment_start(&mut self, line: u32, column: u32);

    /// Called when the comment is complete. `text` includes the delimiters
    /// (for a line comment, everything up to but not including the line
    /// break).
    fn on_comment_end(&mut self, kind: CommentKind, end_line: u32, end_column: u32, text: &str);
}

impl<S: CommentSink + ?Sized> CommentSink for &mut S {
    fn on_comment_start(&mut self, line: u32, column: u32) {
        (**self).on_comment_start(line, column)
    }

    fn on_comment_end(&mut self, kind: CommentKind, end_line: u32, end_column: u32, text: &str) {
        (**self).on_comment_end(kind, end_line, end_column, text)
    }
}

/// A comment recorded by [`CommentCollector`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub text: String,
}

/// A [`CommentSink`] that keeps every comment it is given.
///
/// # Example
///
/// ```
/// use gsc_lex::comment::{CommentCollector, CommentKind};
/// use gsc_lex::Lexer;
///
/// let mut comments = CommentCollector::new();
/// let mut lexer = Lexer::new("x = 1 // one\n/* two */ y").with_comment_sink(&mut comments);
/// while !lexer.next_token().unwrap().is_eof() {}
/// drop(lexer);
///
/// assert_eq!(comments.comments().len(), 2);
/// assert_eq!(comments.comments()[0].text, "// one");
/// assert_eq!(comments.comments()[1].kind, CommentKind::Block);
/// ```
#[derive(Debug, Default)]
pub struct CommentCollector {
    comments: Vec<Comment>,
    pending_start: Option<(u32, u32)>,
}

impl CommentCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn into_comments(self) -> Vec<Comment> {
        self.comments
    }
}

impl CommentSink for CommentCollector {
    fn on_comment_start(&mut self, line: u32, column: u32) {
        self.pending_start = Some((line, column));
    }

    fn on_comment_end(&mut self, kind: CommentKind, end_line: u32, end_column: u32, text: &str) {
        let (start_line, start_column) = self.pending_start.take().unwrap_or((end_line, end_column));
        self.comments.push(Comment {
            kind,
            start_line,
            start_column,
            end_line,
            end_column,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_pairs_start_and_end() {
        let mut collector = CommentCollector::new();
        collector.on_comment_start(3, 5);
        collector.on_comment_end(CommentKind::Line, 3, 12, "// note");
        let comments = collector.into_comments();
        assert_eq!(
            comments,
            vec![Comment {
                kind: CommentKind::Line,
                start_line: 3,
                start_column: 5,
                end_line: 3,
                end_column: 12,
                text: "// note".to_string(),
            }]
        );
    }

    #[test]
    fn test_sink_through_mutable_reference() {
        fn feed(mut sink: impl CommentSink) {
            sink.on_comment_start(1, 1);
            sink.on_comment_end(CommentKind::Block, 2, 3, "/*\n*/");
        }
        let mut collector = CommentCollector::new();
        feed(&mut collector);
        assert_eq!(collector.comments()[0].end_line, 2);
    }
}
