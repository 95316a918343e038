//! Backslash escape decoding for quoted strings.

use crate::error::{LexError, LexResult};
use crate::unicode::{is_digit_in_base, is_line_break};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Decodes the escape sequence at the cursor (which is on the `\`) and
    /// appends the result to `out`.
    pub(crate) fn lex_escape(&mut self, out: &mut String) -> LexResult<()> {
        let (line, column) = (self.cursor.line(), self.cursor.column());
        self.cursor.advance();

        let c = self.cursor.current();
        let decoded = match c {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'b' => '\u{0008}',
            'f' => '\u{000C}',
            '\\' | '\'' | '"' | '$' => c,
            '0'..='7' => {
                out.push(self.lex_octal_escape());
                return Ok(());
            },
            'u' => {
                out.push(self.lex_unicode_escape(line, column)?);
                return Ok(());
            },
            c if is_line_break(c) => {
                self.consume_line_break();
                return Ok(());
            },
            _ if self.cursor.is_at_end() => return Err(self.error_here("unterminated string literal")),
            _ => return Err(LexError::malformed("illegal escape sequence", line, column)),
        };
        self.cursor.advance();
        out.push(decoded);
        Ok(())
    }

    /// `[0-3][0-7]?[0-7]?` or `[4-7][0-7]?`
    fn lex_octal_escape(&mut self) -> char {
        let first = self.cursor.advance();
        let max_digits = if first <= '3' { 3 } else { 2 };
        let mut value = first.to_digit(8).unwrap_or(0);
        for _ in 1..max_digits {
            match self.cursor.current().to_digit(8) {
                Some(digit) => {
                    self.cursor.advance();
                    value = value * 8 + digit;
                },
                None => break,
            }
        }
        // At most 0o377, always a valid scalar value.
        char::from_u32(value).unwrap_or('\0')
    }

    /// `\u+XXXX`, combining a surrogate pair written as two escapes.
    fn lex_unicode_escape(&mut self, line: u32, column: u32) -> LexResult<char> {
        let high = self.lex_code_unit()?;
        if !(0xD800..=0xDFFF).contains(&high) {
            return char::from_u32(high).ok_or_else(|| self.bad_unicode(line, column));
        }
        if high >= 0xDC00 || !(self.cursor.current() == '\\' && self.cursor.peek(2) == 'u') {
            return Err(self.bad_unicode(line, column));
        }
        self.cursor.advance();
        let low = self.lex_code_unit()?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(self.bad_unicode(line, column));
        }
        let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        char::from_u32(combined).ok_or_else(|| self.bad_unicode(line, column))
    }

    /// Consumes `u+` and four hex digits.
    fn lex_code_unit(&mut self) -> LexResult<u32> {
        while self.cursor.current() == 'u' {
            self.cursor.advance();
        }
        let mut value = 0;
        for _ in 0..4 {
            let c = self.cursor.current();
            if !is_digit_in_base(c, 16) {
                if self.cursor.is_at_end() {
                    return Err(self.error_here("unterminated string literal"));
                }
                return Err(self.error_here("invalid unicode escape: expected four hex digits"));
            }
            self.cursor.advance();
            value = value * 16 + c.to_digit(16).unwrap_or(0);
        }
        Ok(value)
    }

    fn bad_unicode(&self, line: u32, column: u32) -> LexError {
        LexError::malformed("invalid unicode escape: unpaired surrogate", line, column)
    }
}
