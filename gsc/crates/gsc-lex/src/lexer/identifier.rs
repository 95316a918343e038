//! Identifier and keyword lexing.
//!
//! Keyword recognition is context-sensitive: a handful of keywords read as
//! plain identifiers in member-access and package-name positions, and
//! `assert`/`enum` can be switched off entirely.

use tracing::trace;

use crate::lexer::state::LiteralSubstate;
use crate::token::{keyword_from_ident, TokenKind};
use crate::unicode::{is_ident_continue, is_ident_start};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Inside an interpolation (`"$name"`), a dotted path continues only
    /// while each `.` is followed by another name; anything else hands
    /// control back to the enclosing literal.
    pub(crate) fn lex_identifier(&mut self) -> TokenKind {
        let allow_dollar = self.dollar_in_identifiers();
        let start = self.cursor.position();
        self.cursor.advance();
        while is_ident_continue(self.cursor.current(), allow_dollar) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);
        let kind = match keyword_from_ident(text) {
            Some(keyword) => self.contextual_keyword(keyword),
            None => TokenKind::Identifier,
        };

        if let LiteralSubstate::ValueExpected(literal) = self.state.literal_substate {
            let path_continues =
                self.cursor.current() == '.' && is_ident_start(self.cursor.peek(2), false);
            if !path_continues {
                trace!(?literal, "interpolated value complete");
                self.state.literal_substate = LiteralSubstate::LiteralResuming(literal);
            }
        }
        kind
    }

    /// Applies the keyword-to-identifier demotions.
    fn contextual_keyword(&self, keyword: TokenKind) -> TokenKind {
        let next = self.cursor.current();
        let last = self.state.last_significant_kind;
        let demoted = match keyword {
            TokenKind::As | TokenKind::Def | TokenKind::In => {
                next == '.' || matches!(last, TokenKind::Dot | TokenKind::Package)
            },
            TokenKind::Package => {
                next == '.'
                    || matches!(last, TokenKind::Dot | TokenKind::Import)
                    || (next == ')' && last == TokenKind::LParen)
            },
            TokenKind::Static => next == '.',
            TokenKind::Assert => !self.config.assert_keyword_enabled,
            TokenKind::Enum => !self.config.enum_keyword_enabled,
            _ => false,
        };
        if demoted {
            TokenKind::Identifier
        } else {
            keyword
        }
    }
}
