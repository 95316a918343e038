//! Character classification for the gsc lexer.
//!
//! The identifier alphabet is deliberately coarse: ASCII letters, `_`, and
//! every character at or above U+00C0 except the multiplication and
//! division signs. No normalization is performed.

/// Checks if a character counts as a letter in identifiers.
///
/// # Example
///
/// ```
/// use gsc_lex::unicode::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('_'));
/// assert!(is_letter('é'));
/// assert!(is_letter('λ'));
/// assert!(!is_letter('×'));
/// assert!(!is_letter('$'));
/// assert!(!is_letter('1'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || (c >= '\u{00C0}' && c != '\u{00D7}' && c != '\u{00F7}')
}

/// Checks if a character can start an identifier.
///
/// `$` is an identifier character except directly after an interpolation
/// marker, where `allow_dollar` is false.
#[inline]
pub fn is_ident_start(c: char, allow_dollar: bool) -> bool {
    is_letter(c) || (allow_dollar && c == '$')
}

/// Checks if a character can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char, allow_dollar: bool) -> bool {
    is_letter(c) || c.is_ascii_digit() || (allow_dollar && c == '$')
}

/// Checks if a character can start an identifier in the host-language sense,
/// used to validate what follows a `$` inside an interpolating literal.
///
/// # Example
///
/// ```
/// use gsc_lex::unicode::is_java_ident_start;
///
/// assert!(is_java_ident_start('x'));
/// assert!(is_java_ident_start('_'));
/// assert!(is_java_ident_start('$'));
/// assert!(is_java_ident_start('€'));
/// assert!(!is_java_ident_start('5'));
/// assert!(!is_java_ident_start('{'));
/// ```
pub fn is_java_ident_start(c: char) -> bool {
    c == '_'
        || c == '$'
        || c.is_alphabetic()
        || matches!(c, '\u{00A2}'..='\u{00A5}' | '\u{20A0}'..='\u{20CF}')
}

/// Checks if a character is a valid digit in the given numeric base.
///
/// # Example
///
/// ```
/// use gsc_lex::unicode::is_digit_in_base;
///
/// assert!(is_digit_in_base('7', 8));
/// assert!(!is_digit_in_base('8', 8));
/// assert!(is_digit_in_base('F', 16));
/// assert!(!is_digit_in_base('2', 2));
/// ```
#[inline]
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    match base {
        2 => matches!(c, '0' | '1'),
        8 => matches!(c, '0'..='7'),
        10 => c.is_ascii_digit(),
        16 => c.is_ascii_hexdigit(),
        _ => false,
    }
}

/// Horizontal whitespace: space, tab and form feed.
#[inline]
pub fn is_horizontal_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{000C}')
}

#[inline]
pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}
