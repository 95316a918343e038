//! Reading source text from byte streams.
//!
//! Input is always decoded as UTF-8. A leading byte order mark is dropped.

use std::io::Read;

use tracing::debug;

use crate::error::LexResult;

const BOM: char = '\u{FEFF}';

/// Reads `reader` to the end and decodes it as UTF-8.
///
/// Read failures surface as [`LexError::Io`](crate::LexError::Io) and
/// invalid UTF-8 as [`LexError::Encoding`](crate::LexError::Encoding).
///
/// # Example
///
/// ```
/// let text = gsc_lex::source::read_source(&b"\xEF\xBB\xBFprintln 'hi'"[..]).unwrap();
/// assert_eq!(text, "println 'hi'");
/// ```
pub fn read_source(mut reader: impl Read) -> LexResult<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let mut text = String::from_utf8(bytes)?;
    if text.starts_with(BOM) {
        text.drain(..BOM.len_utf8());
    }
    debug!(bytes = text.len(), "read source");
    Ok(text)
}
