//! gsc-lex - Lexical Analyzer for the gsc scripting language
//!
//! This crate turns script source text into the token stream consumed by
//! the grammar parser. Lexing is not context-free: whether `/` divides or
//! opens a regex, whether a line break ends a statement, and where an
//! interpolated string resumes all depend on state carried between tokens.
//!
//! # Example Usage
//!
//! ```
//! use gsc_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("def greeting = \"Hello, ${name}!\"");
//! assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Def);
//! assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Identifier);
//! assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Assign);
//!
//! let start = lexer.next_token().unwrap();
//! assert_eq!(start.kind(), TokenKind::StringStart);
//! assert_eq!(start.text(), "Hello, ");
//!
//! // Or collect everything at once
//! let tokens = gsc_lex::tokenize("x = 1 / 2").unwrap();
//! assert_eq!(tokens.len(), 6);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, the keyword table and the token record
//! - [`lexer`] - Main lexer implementation and scanner state
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classification
//! - [`literal`] - Decoding numeric token text into values
//! - [`config`] - Lexer options, loadable from TOML
//! - [`comment`] - Comment sink interface
//! - [`source`] - Reading source text from byte streams
//! - [`error`] - Lexical and configuration errors
//!
//! # Token Stream
//!
//! Whitespace and comments are dropped, and so are line breaks inside
//! `(…)` and `[…]`. A line break at statement level becomes one `Newline`
//! token with the text `<newline>`, absorbing any blank lines and comments
//! after it. Set [`LexerConfig::include_whitespace_tokens`] to get every
//! whitespace, comment and raw line break token instead.
//!
//! Interpolating literals arrive as fragments around ordinary tokens:
//!
//! ```text
//! "a${x}b$c"   STRING_CTOR_START("a") { x } STRING_CTOR_MIDDLE("b") c STRING_CTOR_END("")
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

use gsc_util::Handler;
use tracing::debug;

pub mod comment;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod literal;
pub mod source;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use comment::{Comment, CommentCollector, CommentKind, CommentSink};
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{ConfigError, LexError, LexResult};
pub use lexer::{Lexer, LiteralKind, LiteralSubstate, ScannerState};
pub use literal::NumericValue;
pub use token::{keyword_from_ident, Token, TokenKind};

/// Lexes all of `source` with the default configuration.
///
/// The returned tokens end with `EndOfInput`. Stops at the first error.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source).collect()
}

/// Lexes all of `source`, reporting every error to `handler` and skipping
/// one character after each before carrying on.
///
/// The returned tokens always end with `EndOfInput`.
pub fn tokenize_with_recovery(source: &str, config: LexerConfig, handler: &Handler) -> Vec<Token> {
    let mut lexer = Lexer::with_config(source, config);
    let mut tokens = Vec::new();
    let mut stalled = false;

    loop {
        match lexer.next_token() {
            Ok(token) => {
                let eof = token.is_eof();
                tokens.push(token);
                if eof {
                    break;
                }
                stalled = false;
            },
            Err(err) => {
                handler.emit_diagnostic(err.to_diagnostic());
                let skipped = lexer.skip_char();
                if !skipped && stalled {
                    break;
                }
                stalled = !skipped;
            },
        }
    }

    debug!(tokens = tokens.len(), errors = handler.error_count(), "recovering tokenize finished");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(Token::kind).collect()
    }

    #[test]
    fn test_script_program() {
        let source = r#"
            package demo

            import java.util.regex.*

            class Greeter {
                def greet(String name) {
                    if (name ==~ /[A-Z]\w*/) {
                        println "Hello, ${name.toUpperCase()}!"
                    } else {
                        println 'who?'
                    }
                }
            }
        "#;
        let tokens = tokenize(source).unwrap();
        let kinds = kinds(&tokens);

        for expected in [
            TokenKind::Package,
            TokenKind::Import,
            TokenKind::Class,
            TokenKind::Def,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::RegexMatch,
            TokenKind::RegexLiteral,
            TokenKind::StringStart,
            TokenKind::StringEnd,
            TokenKind::StringLiteral,
            TokenKind::Newline,
        ] {
            assert!(kinds.contains(&expected), "missing {expected}");
        }
        assert_eq!(kinds.last(), Some(&TokenKind::EndOfInput));
    }

    #[test]
    fn test_newline_significance_in_blocks() {
        let tokens = tokenize("{ (\n) }").unwrap();
        assert_eq!(
            kinds(&tokens),
            [
                TokenKind::LBrace,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::RBrace,
                TokenKind::EndOfInput,
            ]
        );

        let tokens = tokenize("{\n}").unwrap();
        assert_eq!(
            kinds(&tokens),
            [TokenKind::LBrace, TokenKind::Newline, TokenKind::RBrace, TokenKind::EndOfInput]
        );

        let tokens = tokenize("( {\n} )").unwrap();
        assert!(kinds(&tokens).contains(&TokenKind::Newline));
    }

    #[test]
    fn test_line_column_tracking() {
        let tokens = tokenize("def\nx =\r\n  42").unwrap();
        let positions: Vec<_> = tokens
            .iter()
            .filter(|token| token.kind() != TokenKind::Newline)
            .map(|token| (token.start_line(), token.start_col()))
            .collect();
        assert_eq!(positions, [(1, 1), (2, 1), (2, 3), (3, 3), (3, 5)]);
    }

    #[test]
    fn test_empty_and_trivia_only_sources() {
        assert_eq!(kinds(&tokenize("").unwrap()), [TokenKind::EndOfInput]);
        assert_eq!(kinds(&tokenize("  \t ").unwrap()), [TokenKind::EndOfInput]);
        assert_eq!(kinds(&tokenize("/* a */ // b").unwrap()), [TokenKind::EndOfInput]);
    }

    #[test]
    fn test_tokenize_stops_at_first_error() {
        let err = tokenize("a ` b").unwrap_err();
        assert!(matches!(err, LexError::UnexpectedChar { found: '`', line: 1, column: 3 }));
    }

    #[test]
    fn test_recovery_reports_and_continues() {
        let handler = Handler::new();
        let tokens = tokenize_with_recovery("a ` b ` c", LexerConfig::default(), &handler);
        assert_eq!(
            kinds(&tokens),
            [TokenKind::Identifier, TokenKind::Identifier, TokenKind::Identifier, TokenKind::EndOfInput]
        );
        assert_eq!(handler.error_count(), 2);
        let first = &handler.diagnostics()[0];
        assert_eq!(first.code, Some(gsc_util::DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
        assert_eq!(first.span.column, 3);
    }

    #[test]
    fn test_recovery_from_unterminated_literal() {
        let handler = Handler::new();
        let tokens = tokenize_with_recovery("x = \"abc", LexerConfig::default(), &handler);
        assert_eq!(
            kinds(&tokens),
            [TokenKind::Identifier, TokenKind::Assign, TokenKind::EndOfInput]
        );
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_end_of_input_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Identifier);
        for _ in 0..3 {
            assert!(lexer.next_token().unwrap().is_eof());
        }
    }
}
