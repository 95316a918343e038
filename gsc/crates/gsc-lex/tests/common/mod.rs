//! Test utilities for the gsc-lex integration tests.

#![allow(dead_code)]

use gsc_lex::{LexError, Lexer, LexerConfig, Token, TokenKind};

/// Installs a test-writer tracing subscriber once per test binary.
///
/// Set `RUST_LOG=gsc_lex=trace` to see every token.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Lexes `source`, panicking on error. The trailing `EndOfInput` is
/// checked and dropped.
pub fn lex(source: &str) -> Vec<Token> {
    lex_with(source, LexerConfig::default())
}

pub fn lex_with(source: &str, config: LexerConfig) -> Vec<Token> {
    init_tracing();
    let mut tokens: Vec<Token> = Lexer::with_config(source, config)
        .collect::<Result<_, _>>()
        .unwrap_or_else(|err: LexError| panic!("lexing {source:?} failed: {err}"));
    let last = tokens.pop();
    assert_eq!(last.map(|t| t.kind()), Some(TokenKind::EndOfInput));
    tokens
}

pub fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).iter().map(Token::kind).collect()
}

/// `(kind, text)` pairs, for asserting decoded literal text.
pub fn pairs(source: &str) -> Vec<(TokenKind, String)> {
    lex(source)
        .into_iter()
        .map(|t| (t.kind(), t.into_text()))
        .collect()
}

/// The first error produced while lexing `source`.
pub fn first_error(source: &str) -> LexError {
    init_tracing();
    Lexer::new(source)
        .find_map(Result::err)
        .unwrap_or_else(|| panic!("{source:?} lexed without error"))
}
