//! Scanner state: nesting depth and the literal resumption sub-state.
//!
//! Interpolated literals are lexed as a sequence of fragment tokens with
//! ordinary tokens in between. The state here is what lets `next_token`
//! pick a literal back up after the embedded expression:
//!
//! ```text
//! "a${x}b"    StringStart("a")  [ValueExpected]
//!             {                 push (depth, ValueExpected); reset
//!             x
//!             }                 pop; ValueExpected -> LiteralResuming
//!             StringEnd("b")    resumed body
//! ```

use tracing::trace;

use crate::token::TokenKind;

/// Which literal form a suspended literal belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// Single-line `"…"`
    Quoted,
    /// `"""…"""`
    TripleQuoted,
    /// `/…/`
    Slashy,
    /// `$/…/$`
    DollarSlashy,
}

impl LiteralKind {
    /// Literals that may not contain a raw line break at statement level
    /// inside their interpolations.
    pub fn is_single_line(self) -> bool {
        matches!(self, LiteralKind::Quoted | LiteralKind::Slashy)
    }

    /// Token kind for a complete literal with no interpolation.
    pub fn literal_kind(self) -> TokenKind {
        match self {
            LiteralKind::Quoted | LiteralKind::TripleQuoted => TokenKind::StringLiteral,
            LiteralKind::Slashy => TokenKind::RegexLiteral,
            LiteralKind::DollarSlashy => TokenKind::DollarRegexLiteral,
        }
    }

    pub fn start_kind(self) -> TokenKind {
        match self {
            LiteralKind::Quoted | LiteralKind::TripleQuoted => TokenKind::StringStart,
            LiteralKind::Slashy => TokenKind::RegexStart,
            LiteralKind::DollarSlashy => TokenKind::DollarRegexStart,
        }
    }

    pub fn middle_kind(self) -> TokenKind {
        match self {
            LiteralKind::Quoted | LiteralKind::TripleQuoted => TokenKind::StringMiddle,
            LiteralKind::Slashy => TokenKind::RegexMiddle,
            LiteralKind::DollarSlashy => TokenKind::DollarRegexMiddle,
        }
    }

    pub fn end_kind(self) -> TokenKind {
        match self {
            LiteralKind::Quoted | LiteralKind::TripleQuoted => TokenKind::StringEnd,
            LiteralKind::Slashy => TokenKind::RegexEnd,
            LiteralKind::DollarSlashy => TokenKind::DollarRegexEnd,
        }
    }

    /// Kind of the fragment that closes the literal.
    pub(crate) fn closing_kind(self, from_start: bool) -> TokenKind {
        if from_start {
            self.literal_kind()
        } else {
            self.end_kind()
        }
    }

    /// Kind of the fragment that stops at an interpolation.
    pub(crate) fn suspending_kind(self, from_start: bool) -> TokenKind {
        if from_start {
            self.start_kind()
        } else {
            self.middle_kind()
        }
    }
}

/// Pending-resumption marker for a literal in the middle of an
/// interpolation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LiteralSubstate {
    #[default]
    None,
    /// A `$` was consumed; the embedded value is being scanned.
    ValueExpected(LiteralKind),
    /// The embedded value is complete; the next call resumes the body.
    LiteralResuming(LiteralKind),
}

/// Mutable scanning state, one per input.
#[derive(Clone, Debug)]
pub struct ScannerState {
    pub(crate) bracket_depth: i32,
    pub(crate) literal_substate: LiteralSubstate,
    pub(crate) depth_stack: Vec<(i32, LiteralSubstate)>,
    pub(crate) last_significant_kind: TokenKind,
    pub(crate) newline_suppressed_depth: i32,
}

impl Default for ScannerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScannerState {
    pub fn new() -> Self {
        Self {
            bracket_depth: 0,
            literal_substate: LiteralSubstate::None,
            depth_stack: Vec::new(),
            last_significant_kind: TokenKind::EndOfInput,
            newline_suppressed_depth: 0,
        }
    }

    /// Net count of open `(`/`[` in the current brace scope.
    pub fn bracket_depth(&self) -> i32 {
        self.bracket_depth
    }

    pub fn literal_substate(&self) -> LiteralSubstate {
        self.literal_substate
    }

    /// Number of enclosing `{` scopes.
    pub fn brace_depth(&self) -> usize {
        self.depth_stack.len()
    }

    /// The most recent token that was not whitespace or a comment.
    pub fn last_significant_kind(&self) -> TokenKind {
        self.last_significant_kind
    }

    pub fn newline_suppressed_depth(&self) -> i32 {
        self.newline_suppressed_depth
    }

    /// Whether a `/` here opens a regex rather than dividing.
    pub fn regex_allowed(&self) -> bool {
        !self.last_significant_kind.is_expression_ending()
    }

    /// Whether every bracket, brace and literal opened so far was closed.
    pub fn is_balanced(&self) -> bool {
        self.bracket_depth == 0
            && self.depth_stack.is_empty()
            && self.literal_substate == LiteralSubstate::None
    }

    /// Enters a `{` scope with a fresh depth and no pending literal.
    pub(crate) fn push_brace(&mut self) {
        self.depth_stack.push((self.bracket_depth, self.literal_substate));
        trace!(depth = self.depth_stack.len(), substate = ?self.literal_substate, "push brace scope");
        self.bracket_depth = 0;
        self.literal_substate = LiteralSubstate::None;
    }

    /// Leaves a `{` scope. A literal waiting on this scope becomes ready
    /// to resume. Popping with no open scope does nothing.
    pub(crate) fn pop_brace(&mut self) {
        let Some((depth, substate)) = self.depth_stack.pop() else {
            return;
        };
        self.bracket_depth = depth;
        self.literal_substate = match substate {
            LiteralSubstate::ValueExpected(kind) => LiteralSubstate::LiteralResuming(kind),
            other => other,
        };
        trace!(depth = self.depth_stack.len(), substate = ?self.literal_substate, "pop brace scope");
    }

    /// Records the opening of a single-line literal.
    pub(crate) fn suppress_newlines(&mut self) {
        self.newline_suppressed_depth += 1;
    }

    /// Records the close (or abandonment) of a single-line literal.
    pub(crate) fn release_newlines(&mut self) {
        self.newline_suppressed_depth = (self.newline_suppressed_depth - 1).max(0);
    }
}
