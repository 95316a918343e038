//! Number literal lexing.
//!
//! Only classification happens here; the token text keeps its `_`
//! separators and suffix. See [`crate::literal`] for decoding values.

use crate::error::LexResult;
use crate::token::TokenKind;
use crate::unicode::is_digit_in_base;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Supports:
    /// - Hex: `0x1F`, `0xFF_FF`
    /// - Binary: `0b1010`
    /// - Legacy octal: `017`
    /// - Decimal: `42`, `1_000`
    /// - Floating point: `3.14`, `1e10`, `2.5e-3f`, `3.14g`
    /// - Suffixes: `l` long, `i` int, `g` big integer or big decimal,
    ///   `f` float, `d` double
    pub(crate) fn lex_number(&mut self) -> LexResult<TokenKind> {
        let decimal = if self.cursor.current() == '0' {
            self.lex_zero_prefixed()?
        } else {
            self.lex_digits(10);
            true
        };

        if decimal && self.at_float_continuation() {
            return self.lex_float_tail();
        }
        Ok(self.lex_integer_suffix())
    }

    /// Lexes a literal starting with `0`. Returns whether the mantissa is
    /// decimal (and may therefore continue as a floating point literal).
    fn lex_zero_prefixed(&mut self) -> LexResult<bool> {
        let base = match self.cursor.peek(2) {
            'x' | 'X' => Some(16),
            'b' | 'B' => Some(2),
            _ => None,
        };
        if let Some(base) = base {
            self.cursor.advance_n(2);
            if !self.lex_digits(base) {
                return Err(self.error_here(match base {
                    16 => "hexadecimal numbers need at least one hex digit after '0x'",
                    _ => "binary numbers need at least one binary digit after '0b'",
                }));
            }
            return Ok(false);
        }

        // `0` + decimal digits is only decimal if a float part follows.
        let mark = self.cursor.mark();
        self.cursor.advance();
        self.lex_digits(10);
        if self.at_float_continuation() {
            return Ok(true);
        }
        self.cursor.rewind(mark);

        self.cursor.advance();
        if self.lex_digits(8) {
            return Ok(false);
        }
        Ok(true)
    }

    /// Consumes `digit ((digit | _)* digit)?` in `base`. A trailing run of
    /// underscores is left unconsumed. Returns false if there was no digit.
    fn lex_digits(&mut self, base: u32) -> bool {
        if !is_digit_in_base(self.cursor.current(), base) {
            return false;
        }
        let mut last_digit = self.cursor.mark();
        loop {
            let c = self.cursor.current();
            if is_digit_in_base(c, base) {
                self.cursor.advance();
                last_digit = self.cursor.mark();
            } else if c == '_' {
                self.cursor.advance();
            } else {
                break;
            }
        }
        self.cursor.rewind(last_digit);
        true
    }

    /// `.digit`, an exponent, or a float suffix.
    fn at_float_continuation(&self) -> bool {
        match self.cursor.current() {
            '.' => self.cursor.peek(2).is_ascii_digit(),
            'e' | 'E' | 'f' | 'F' | 'd' | 'D' => true,
            _ => false,
        }
    }

    /// Fraction, exponent and suffix of a floating point literal.
    fn lex_float_tail(&mut self) -> LexResult<TokenKind> {
        if self.cursor.current() == '.' {
            self.cursor.advance();
            self.lex_digits(10);
        }

        if matches!(self.cursor.current(), 'e' | 'E') {
            self.cursor.advance();
            if matches!(self.cursor.current(), '+' | '-') {
                self.cursor.advance();
            }
            while self.cursor.current() == '_' {
                self.cursor.advance();
            }
            if !self.lex_digits(10) {
                return Err(self.error_here("malformed exponent: expected a digit"));
            }
        }

        let kind = match self.cursor.current() {
            'f' | 'F' => TokenKind::NumFloat,
            'g' | 'G' => TokenKind::NumBigDecimal,
            'd' | 'D' => TokenKind::NumDouble,
            _ => return Ok(TokenKind::NumDouble),
        };
        self.cursor.advance();
        Ok(kind)
    }

    fn lex_integer_suffix(&mut self) -> TokenKind {
        let kind = match self.cursor.current() {
            'l' | 'L' => TokenKind::NumLong,
            'i' | 'I' => TokenKind::NumInt,
            'g' | 'G' => TokenKind::NumBigInt,
            _ => return TokenKind::NumInt,
        };
        self.cursor.advance();
        kind
    }
}
