//! Edge case tests for gsc-lex

#[cfg(test)]
mod tests {
    use crate::comment::CommentCollector;
    use crate::config::LexerConfig;
    use crate::lexer::{LiteralKind, LiteralSubstate};
    use crate::token::{Token, TokenKind};
    use crate::{LexError, Lexer};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = Lexer::new(source).map(|token| token.unwrap()).collect();
        assert_eq!(tokens.pop().map(|t| t.kind()), Some(TokenKind::EndOfInput));
        tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(Token::kind).collect()
    }

    fn first_error(source: &str) -> LexError {
        Lexer::new(source)
            .find_map(Result::err)
            .unwrap_or_else(|| panic!("{source:?} lexed without error"))
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("def {name} = 1"));
        assert_eq!(t[1].text(), name);
        assert_eq!(t[2].start_col(), 10006);
    }

    #[test]
    fn test_edge_max_munch_never_splits_bsr_assign() {
        let t = lex_all(">>>=>>>>>=");
        let got: Vec<_> = t.iter().map(|t| (t.kind(), t.text().to_string())).collect();
        assert_eq!(
            got,
            [
                (TokenKind::BsrAssign, ">>>=".to_string()),
                (TokenKind::Bsr, ">>>".to_string()),
                (TokenKind::SrAssign, ">>=".to_string()),
            ]
        );
    }

    #[test]
    fn test_edge_identical_vs_regex_match() {
        assert_eq!(kinds("a===b"), [TokenKind::Identifier, TokenKind::Identical, TokenKind::Identifier]);
        assert_eq!(kinds("a!==b"), [TokenKind::Identifier, TokenKind::NotIdentical, TokenKind::Identifier]);
        assert_eq!(kinds("a==~b"), [TokenKind::Identifier, TokenKind::RegexMatch, TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_triple_dot_and_ranges() {
        assert_eq!(
            kinds("f(a...) 1..<2"),
            [
                TokenKind::Identifier,
                TokenKind::LParen,
                TokenKind::Identifier,
                TokenKind::TripleDot,
                TokenKind::RParen,
                TokenKind::NumInt,
                TokenKind::RangeExclusive,
                TokenKind::NumInt,
            ]
        );
    }

    // ==================== DIVISION / REGEX ====================

    #[test]
    fn test_edge_regex_after_keyword_is_division() {
        // `this` ends an expression, so the slash divides.
        assert_eq!(kinds("this / 2"), [TokenKind::This, TokenKind::Div, TokenKind::NumInt]);
    }

    #[test]
    fn test_edge_regex_after_non_ending_keyword() {
        assert_eq!(kinds("do /x/"), [TokenKind::Do, TokenKind::RegexLiteral]);
        assert_eq!(kinds("return /x/"), [TokenKind::Return, TokenKind::Div, TokenKind::Identifier, TokenKind::Div]);
    }

    #[test]
    fn test_edge_regex_after_closing_brace_is_division() {
        assert_eq!(
            kinds("{ a } / 2"),
            [TokenKind::LBrace, TokenKind::Identifier, TokenKind::RBrace, TokenKind::Div, TokenKind::NumInt]
        );
    }

    #[test]
    fn test_edge_regex_after_newline() {
        assert_eq!(
            kinds("a\n/x/"),
            [TokenKind::Identifier, TokenKind::Newline, TokenKind::RegexLiteral]
        );
    }

    #[test]
    fn test_edge_regex_after_string_end_is_division() {
        assert_eq!(
            kinds("\"$a\" / 2"),
            [
                TokenKind::StringStart,
                TokenKind::Identifier,
                TokenKind::StringEnd,
                TokenKind::Div,
                TokenKind::NumInt,
            ]
        );
    }

    // ==================== INTERPOLATION ====================

    #[test]
    fn test_edge_interpolation_reconstructs_text() {
        let source = r#""a${1+2}b""#;
        let t = lex_all(source);
        let mut rebuilt = String::from("\"");
        for token in &t {
            match token.kind() {
                TokenKind::StringStart => rebuilt.push_str(&format!("{}$", token.text())),
                TokenKind::StringEnd => rebuilt.push_str(&format!("{}\"", token.text())),
                _ => rebuilt.push_str(token.text()),
            }
        }
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_edge_brace_scope_restores_bracket_depth() {
        // The newline inside the closure is significant; the one after it,
        // back inside the call parentheses, is not.
        assert_eq!(
            kinds("f(xs.each {\n it }\n)"),
            [
                TokenKind::Identifier,
                TokenKind::LParen,
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::LBrace,
                TokenKind::Newline,
                TokenKind::Identifier,
                TokenKind::RBrace,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_edge_deeply_nested_interpolation() {
        let t = kinds(r#""${"${"${x}"}"}""#);
        assert_eq!(t.iter().filter(|&&k| k == TokenKind::StringStart).count(), 3);
        assert_eq!(t.iter().filter(|&&k| k == TokenKind::StringEnd).count(), 3);
    }

    #[test]
    fn test_edge_stray_closing_brace_is_harmless() {
        let mut lexer = Lexer::new("} x");
        assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::RBrace);
        assert_eq!(lexer.state().brace_depth(), 0);
        assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_edge_unbalanced_input_is_detectable() {
        let mut lexer = Lexer::new("\"${x");
        while !lexer.next_token().unwrap().is_eof() {}
        assert!(!lexer.state().is_balanced());

        let mut lexer = Lexer::new("f(\"${[1]}\")");
        while !lexer.next_token().unwrap().is_eof() {}
        assert!(lexer.state().is_balanced());
    }

    #[test]
    fn test_edge_substate_while_value_expected() {
        let mut lexer = Lexer::new("\"a$b\"");
        lexer.next_token().unwrap();
        assert_eq!(
            lexer.state().literal_substate(),
            LiteralSubstate::ValueExpected(LiteralKind::Quoted)
        );
        lexer.next_token().unwrap();
        assert_eq!(
            lexer.state().literal_substate(),
            LiteralSubstate::LiteralResuming(LiteralKind::Quoted)
        );
        assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::StringEnd);
        assert_eq!(lexer.state().literal_substate(), LiteralSubstate::None);
    }

    #[test]
    fn test_edge_slashy_newline_error_inside_interpolation() {
        let err = first_error("/a${\n}/");
        assert_eq!(err.message(), crate::error::NEWLINE_IN_LITERAL);
    }

    #[test]
    fn test_edge_block_comment_newline_inside_simple_interpolation() {
        let err = first_error("\"${ /*\n*/ x}\"");
        assert_eq!(err.message(), crate::error::NEWLINE_IN_LITERAL);
        assert_eq!((err.line(), err.column()), (Some(1), Some(7)));
    }

    #[test]
    fn test_edge_newline_inside_parens_in_interpolation() {
        let err = first_error("\"${f(a,\nb)}\"");
        assert_eq!(err.message(), crate::error::NEWLINE_IN_LITERAL);
        assert_eq!((err.line(), err.column()), (Some(1), Some(8)));

        let err = first_error("/${xs[0,\n1]}/");
        assert_eq!(err.message(), crate::error::NEWLINE_IN_LITERAL);
    }

    #[test]
    fn test_edge_newline_inside_parens_in_triple_quoted_interpolation() {
        let t = kinds("\"\"\"${f(a,\nb)}\"\"\"");
        assert_eq!(t.first(), Some(&TokenKind::StringStart));
        assert_eq!(t.last(), Some(&TokenKind::StringEnd));
        assert!(!t.contains(&TokenKind::Newline));
    }

    // ==================== NUMBERS ====================

    #[test]
    fn test_edge_numeric_values() {
        let values: Vec<_> = lex_all("0x1A 3.14 3.14f 10g 3.14g 1_000_000")
            .iter()
            .map(|t| (t.kind(), t.numeric_value().unwrap().unwrap()))
            .collect();
        assert_eq!(values[0].0, TokenKind::NumInt);
        assert_eq!(values[1].0, TokenKind::NumDouble);
        assert_eq!(values[2].0, TokenKind::NumFloat);
        assert_eq!(values[3].0, TokenKind::NumBigInt);
        assert_eq!(values[4].0, TokenKind::NumBigDecimal);
        assert_eq!(values[5].1, crate::literal::NumericValue::Int(1_000_000));
    }

    #[test]
    fn test_edge_non_numeric_token_has_no_value() {
        assert!(lex_all("x")[0].numeric_value().is_none());
    }

    #[test]
    fn test_edge_negative_is_two_tokens() {
        assert_eq!(kinds("-1"), [TokenKind::Minus, TokenKind::NumInt]);
    }

    // ==================== WHITESPACE MODE ====================

    #[test]
    fn test_edge_whitespace_mode_round_trips_source() {
        let source = "#!/bin/gsc\ndef x = [1,\n 2] // two\n/* c */ \"s${x}\"\n";
        let config = LexerConfig::default().with_whitespace_tokens();
        let mut rebuilt = String::new();
        for token in Lexer::with_config(source, config) {
            let token = token.unwrap();
            let span = token.span();
            rebuilt.push_str(&source[span.start..span.end]);
        }
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_edge_whitespace_mode_keeps_regex_detection() {
        let config = LexerConfig::default().with_whitespace_tokens();
        let t: Vec<_> = Lexer::with_config("x = /a/", config)
            .map(|t| t.unwrap().kind())
            .collect();
        assert!(t.contains(&TokenKind::RegexLiteral));
    }

    #[test]
    fn test_edge_whitespace_mode_newline_in_brackets_admits_regex() {
        let config = LexerConfig::default().with_whitespace_tokens();
        let t: Vec<_> = Lexer::with_config("(a\n/x/)", config)
            .map(|t| t.unwrap().kind())
            .collect();
        assert_eq!(
            t,
            [
                TokenKind::LParen,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::RegexLiteral,
                TokenKind::RParen,
                TokenKind::EndOfInput,
            ]
        );
        // Skipped in the default mode, so the slash still divides.
        assert_eq!(
            kinds("(a\n/x/)"),
            [
                TokenKind::LParen,
                TokenKind::Identifier,
                TokenKind::Div,
                TokenKind::Identifier,
                TokenKind::Div,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_edge_comment_sink_with_whitespace_mode() {
        let mut comments = CommentCollector::new();
        {
            let config = LexerConfig::default().with_whitespace_tokens();
            let lexer = Lexer::with_config("a // x\n/* y */", config).with_comment_sink(&mut comments);
            assert_eq!(lexer.filter(|t| t.as_ref().unwrap().kind().is_comment()).count(), 2);
        }
        assert_eq!(comments.comments().len(), 2);
    }

    // ==================== ERRORS ====================

    #[test]
    fn test_edge_error_leaves_cursor_on_offending_char() {
        let mut lexer = Lexer::new("a\n  `");
        assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Identifier);
        assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Newline);
        let err = lexer.next_token().unwrap_err();
        assert_eq!((err.line(), err.column()), (Some(2), Some(3)));
        assert_eq!((lexer.line(), lexer.column()), (2, 3));
        assert!(lexer.skip_char());
        assert!(lexer.next_token().unwrap().is_eof());
        assert!(!lexer.skip_char());
    }

    #[test]
    fn test_edge_iterator_fuses_after_error() {
        let mut lexer = Lexer::new("` a");
        assert!(lexer.next().unwrap().is_err());
        assert!(lexer.next().is_none());
        lexer.skip_char();
        assert_eq!(lexer.next().unwrap().unwrap().kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_edge_rendered_error() {
        let source = "x = \"cost $5\"";
        let err = first_error(source);
        let rendered = err.render(source);
        assert!(rendered.starts_with("error[E1002]: illegal string body character after dollar sign"));
        assert!(rendered.contains("--> 1:11"));
        assert!(rendered.contains("= help: either escape a literal dollar sign"));
    }
}
