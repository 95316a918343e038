//! Operator lexing.
//!
//! Operators are matched longest-first against a static table, so `>>>=`
//! always wins over `>>>`, `>>` and `>`. The slash is handled separately
//! because it may open a comment or a regex literal instead.

use crate::error::{LexError, LexResult};
use crate::lexer::state::LiteralKind;
use crate::token::TokenKind;
use crate::Lexer;

/// Operators in priority order. Within a leading character the longer
/// spelling always comes first.
static OPERATORS: &[(&str, TokenKind)] = &[
    (">>>=", TokenKind::BsrAssign),
    ("<=>", TokenKind::CompareTo),
    ("===", TokenKind::Identical),
    ("!==", TokenKind::NotIdentical),
    (">>=", TokenKind::SrAssign),
    (">>>", TokenKind::Bsr),
    ("<<=", TokenKind::SlAssign),
    ("..<", TokenKind::RangeExclusive),
    ("...", TokenKind::TripleDot),
    ("==~", TokenKind::RegexMatch),
    ("**=", TokenKind::StarStarAssign),
    ("==", TokenKind::Equal),
    ("!=", TokenKind::NotEqual),
    ("+=", TokenKind::PlusAssign),
    ("++", TokenKind::Inc),
    ("-=", TokenKind::MinusAssign),
    ("--", TokenKind::Dec),
    ("*=", TokenKind::StarAssign),
    ("%=", TokenKind::ModAssign),
    (">>", TokenKind::Sr),
    (">=", TokenKind::Ge),
    ("<<", TokenKind::Sl),
    ("<=", TokenKind::Le),
    ("^=", TokenKind::BXorAssign),
    ("|=", TokenKind::BOrAssign),
    ("||", TokenKind::LOr),
    ("&=", TokenKind::BAndAssign),
    ("&&", TokenKind::LAnd),
    ("..", TokenKind::RangeInclusive),
    ("*.", TokenKind::SpreadDot),
    ("?.", TokenKind::OptionalDot),
    ("?:", TokenKind::Elvis),
    (".&", TokenKind::MemberPointer),
    ("=~", TokenKind::RegexFind),
    ("**", TokenKind::StarStar),
    ("->", TokenKind::ClosureArrow),
    ("?", TokenKind::Question),
    (".", TokenKind::Dot),
    ("=", TokenKind::Assign),
    ("!", TokenKind::Not),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Star),
    ("%", TokenKind::Mod),
    (">", TokenKind::Gt),
    ("<", TokenKind::Lt),
    ("^", TokenKind::BXor),
    ("|", TokenKind::BOr),
    ("&", TokenKind::BAnd),
];

impl<'a> Lexer<'a> {
    /// Lexes the longest operator at the cursor.
    pub(crate) fn lex_operator(&mut self) -> LexResult<TokenKind> {
        let remaining = self.cursor.remaining();
        match OPERATORS.iter().find(|(spelling, _)| remaining.starts_with(*spelling)) {
            Some(&(spelling, kind)) => {
                self.cursor.advance_n(spelling.chars().count());
                Ok(kind)
            },
            None => Err(LexError::UnexpectedChar {
                found: self.cursor.current(),
                line: self.cursor.line(),
                column: self.cursor.column(),
            }),
        }
    }

    /// Lexes a slash: comment, regex literal, `/=` or `/`.
    pub(crate) fn lex_slash(&mut self) -> LexResult<Option<TokenKind>> {
        match self.cursor.peek(2) {
            '/' => return Ok(self.lex_line_comment()),
            '*' => return self.lex_block_comment(),
            _ => {},
        }

        if self.state.regex_allowed() {
            self.cursor.advance();
            self.state.suppress_newlines();
            return self.lex_literal_body(LiteralKind::Slashy, true).map(Some);
        }

        if self.cursor.match_str("/=") {
            Ok(Some(TokenKind::DivAssign))
        } else {
            Ok(Some(self.single(TokenKind::Div)))
        }
    }
}
