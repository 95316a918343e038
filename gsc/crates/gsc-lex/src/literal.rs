//! Decoding numeric token text into values.
//!
//! The scanner only classifies numbers; this module turns the raw text of
//! a numeric token into a [`NumericValue`]. Unsuffixed integers widen from
//! `i32` to `i64` to arbitrary precision as needed. An explicit suffix pins
//! the type, and a value that does not fit is an error.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use gsc_util::Span;

use crate::error::{LexError, LexResult};
use crate::token::TokenKind;

/// The value of a numeric literal.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericValue {
    Int(i32),
    Long(i64),
    BigInt(BigInt),
    Float(f32),
    Double(f64),
    /// `unscaled * 10^-scale`
    BigDecimal { unscaled: BigInt, scale: i64 },
}

impl NumericValue {
    /// The value as an arbitrary-precision integer, for integral values.
    pub fn to_bigint(&self) -> Option<BigInt> {
        match self {
            NumericValue::Int(v) => Some(BigInt::from(*v)),
            NumericValue::Long(v) => Some(BigInt::from(*v)),
            NumericValue::BigInt(v) => Some(v.clone()),
            _ => None,
        }
    }

    /// The value as an `f64`. Lossy for big values.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            NumericValue::Int(v) => Some(f64::from(*v)),
            NumericValue::Long(v) => v.to_f64(),
            NumericValue::BigInt(v) => v.to_f64(),
            NumericValue::Float(v) => Some(f64::from(*v)),
            NumericValue::Double(v) => Some(*v),
            NumericValue::BigDecimal { unscaled, scale } => {
                let scale = i32::try_from(*scale).ok()?;
                Some(unscaled.to_f64()? * 10f64.powi(-scale))
            },
        }
    }
}

/// Decodes the text of a numeric token of kind `kind`.
///
/// Errors are reported at the start of `span`.
///
/// # Example
///
/// ```
/// use gsc_lex::literal::{parse_numeric, NumericValue};
/// use gsc_lex::token::TokenKind;
/// use gsc_util::Span;
///
/// let v = parse_numeric(TokenKind::NumInt, "0x7FFF_FFFF", Span::DUMMY).unwrap();
/// assert_eq!(v, NumericValue::Int(i32::MAX));
/// let v = parse_numeric(TokenKind::NumInt, "0x8000_0000", Span::DUMMY).unwrap();
/// assert_eq!(v, NumericValue::Long(1 << 31));
/// ```
pub fn parse_numeric(kind: TokenKind, text: &str, span: Span) -> LexResult<NumericValue> {
    let error = |message: String| LexError::malformed(message, span.line, span.column);
    let clean: String = text.chars().filter(|&c| c != '_').collect();

    match kind {
        TokenKind::NumInt | TokenKind::NumLong | TokenKind::NumBigInt => {
            let value = parse_integer(&clean)
                .ok_or_else(|| error(format!("invalid integer literal '{text}'")))?;
            let suffixed = clean.ends_with(|c: char| matches!(c, 'i' | 'I'));
            match kind {
                TokenKind::NumInt if suffixed => value
                    .to_i32()
                    .map(NumericValue::Int)
                    .ok_or_else(|| error(format!("integer literal '{text}' is too large for type int"))),
                TokenKind::NumInt => Ok(narrowest_integer(value)),
                TokenKind::NumLong => value
                    .to_i64()
                    .map(NumericValue::Long)
                    .ok_or_else(|| error(format!("integer literal '{text}' is too large for type long"))),
                _ => Ok(NumericValue::BigInt(value)),
            }
        },
        TokenKind::NumFloat => {
            let value: f32 = strip_float_suffix(&clean)
                .parse()
                .map_err(|_| error(format!("invalid floating point literal '{text}'")))?;
            if value.is_finite() {
                Ok(NumericValue::Float(value))
            } else {
                Err(error(format!("floating point literal '{text}' is too large for type float")))
            }
        },
        TokenKind::NumDouble => {
            let value: f64 = strip_float_suffix(&clean)
                .parse()
                .map_err(|_| error(format!("invalid floating point literal '{text}'")))?;
            if value.is_finite() {
                Ok(NumericValue::Double(value))
            } else {
                Err(error(format!("floating point literal '{text}' is too large for type double")))
            }
        },
        TokenKind::NumBigDecimal => parse_decimal(strip_float_suffix(&clean))
            .ok_or_else(|| error(format!("invalid decimal literal '{text}'"))),
        _ => Err(error(format!("'{text}' is not a numeric literal"))),
    }
}

/// Parses an integer with an optional base prefix and optional suffix.
fn parse_integer(clean: &str) -> Option<BigInt> {
    let digits = clean.trim_end_matches(|c: char| matches!(c, 'l' | 'L' | 'i' | 'I' | 'g' | 'G'));
    let (digits, radix) = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(bin) = digits.strip_prefix("0b").or_else(|| digits.strip_prefix("0B")) {
        (bin, 2)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (&digits[1..], 8)
    } else {
        (digits, 10)
    };
    if digits.is_empty() {
        return None;
    }
    BigInt::parse_bytes(digits.as_bytes(), radix)
}

fn narrowest_integer(value: BigInt) -> NumericValue {
    if let Some(v) = value.to_i32() {
        NumericValue::Int(v)
    } else if let Some(v) = value.to_i64() {
        NumericValue::Long(v)
    } else {
        NumericValue::BigInt(value)
    }
}

fn strip_float_suffix(clean: &str) -> &str {
    clean.trim_end_matches(|c: char| matches!(c, 'f' | 'F' | 'd' | 'D' | 'g' | 'G'))
}

/// Parses `digits[.digits][e[+-]digits]` exactly.
fn parse_decimal(clean: &str) -> Option<NumericValue> {
    let (mantissa, exponent) = match clean.find(['e', 'E']) {
        Some(pos) => (&clean[..pos], clean[pos + 1..].parse::<i64>().ok()?),
        None => (clean, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{int_part}{frac_part}");
    if digits.is_empty() {
        return None;
    }
    let unscaled = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    let frac_len = i64::try_from(frac_part.len()).ok()?;
    let scale = frac_len.checked_sub(exponent)?;
    Some(NumericValue::BigDecimal { unscaled, scale })
}
