//! Text to number parsing with unsigned range semantics.
//!
//! Unsigned results come back as the signed carrier of the same width, so
//! `parse_u32("4294967295")` is `-1`. Every function here is strict: no
//! surrounding whitespace is accepted except by [`parse_double`], and a
//! failure never yields a partial value.

use crate::config::{ParseConfig, UlongParsing};
use crate::error::{Error, ParseError, ParseErrorKind, Result, Target};
use crate::value::Value;
use std::num::ParseIntError;

fn int_error(text: &str, target: Target, err: &ParseIntError) -> Error {
    ParseError::new(text, target, ParseErrorKind::from(err)).into()
}

/// Parse a signed 32-bit decimal.
pub fn parse_i32(text: &str) -> Result<i32> {
    text.parse::<i32>()
        .map_err(|e| int_error(text, Target::I32, &e))
}

/// Parse an unsigned 32-bit decimal into its carrier.
///
/// The text is read as an `i64` first, which covers the whole unsigned
/// 32-bit range. Values past `i32::MAX` are rebuilt from their 16-bit
/// halves so the result holds the same bits as the unsigned value.
///
/// # Test Cases
/// - parse_u32("4294967295") = -1
/// - parse_u32("2147483648") = i32::MIN
/// - parse_u32("-1") fails
pub fn parse_u32(text: &str) -> Result<i32> {
    let wide = text
        .parse::<i64>()
        .map_err(|e| int_error(text, Target::U32, &e))?;

    if wide < 0 {
        return Err(ParseError::new(text, Target::U32, ParseErrorKind::Negative).into());
    }
    if wide > i64::from(u32::MAX) {
        return Err(ParseError::new(text, Target::U32, ParseErrorKind::OutOfRange).into());
    }
    if wide <= i64::from(i32::MAX) {
        return Ok(wide as i32);
    }

    let low = (wide & 0xFFFF) as i32;
    let high = (wide >> 16) as i32;
    Ok(low.wrapping_add(high << 16))
}

/// Parse a signed 64-bit decimal.
pub fn parse_i64(text: &str) -> Result<i64> {
    text.parse::<i64>()
        .map_err(|e| int_error(text, Target::I64, &e))
}

/// Parse an unsigned 64-bit decimal into its carrier.
///
/// Digits are accumulated by hand so that magnitudes above `i64::MAX` are
/// accepted. An optional leading `+` is allowed; a leading `-` is not.
///
/// # Test Cases
/// - parse_u64("18446744073709551615") = -1
/// - parse_u64("9223372036854775808") = i64::MIN
/// - parse_u64("18446744073709551616") fails
pub fn parse_u64(text: &str) -> Result<i64> {
    let fail = |kind| -> Error { ParseError::new(text, Target::U64, kind).into() };

    let digits = match text.as_bytes().first() {
        None => return Err(fail(ParseErrorKind::Empty)),
        Some(b'-') => return Err(fail(ParseErrorKind::Negative)),
        Some(b'+') => &text[1..],
        Some(_) => text,
    };
    if digits.is_empty() {
        return Err(fail(ParseErrorKind::InvalidDigit));
    }

    let mut acc: u64 = 0;
    for byte in digits.bytes() {
        let digit = match byte {
            b'0'..=b'9' => u64::from(byte - b'0'),
            _ => return Err(fail(ParseErrorKind::InvalidDigit)),
        };
        acc = acc
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| fail(ParseErrorKind::OutOfRange))?;
    }
    Ok(acc as i64)
}

/// Parse a boolean.
///
/// `true`/`false` match in any ASCII case. Anything else is read as an
/// `i32` and is true when non-zero.
pub fn parse_bool(text: &str) -> Result<bool> {
    if text.eq_ignore_ascii_case("true") {
        return Ok(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Ok(false);
    }

    match text.parse::<i32>() {
        Ok(n) => {
            log::trace!("parse_bool numeric fallback: {:?} -> {}", text, n);
            Ok(n != 0)
        }
        Err(_) => Err(ParseError::new(text, Target::Bool, ParseErrorKind::Malformed).into()),
    }
}

/// Parse a decimal or scientific `f64`. Surrounding ASCII whitespace is ignored.
pub fn parse_double(text: &str) -> Result<f64> {
    let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() {
        return Err(ParseError::new(text, Target::Double, ParseErrorKind::Empty).into());
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| ParseError::new(text, Target::Double, ParseErrorKind::Malformed).into())
}

/// Parse text holding exactly one character.
pub fn parse_char(text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => {
            let len = text.chars().count();
            Err(ParseError::new(text, Target::Char, ParseErrorKind::NotSingleChar { len }).into())
        }
    }
}

/// Parse `text` for a target chosen at run time.
///
/// With `UlongParsing::Unsupported`, `u64` requests fail with
/// [`Error::UnsupportedOperation`] instead of being parsed.
pub fn parse_as(target: Target, text: &str, config: &ParseConfig) -> Result<Value> {
    let token = if config.trim_whitespace {
        text.trim_matches(|c: char| c.is_ascii_whitespace())
    } else {
        text
    };

    // Errors report the text as the caller passed it, not the trimmed token.
    dispatch(target, token, config).map_err(|err| match err {
        Error::Parse(mut e) => {
            e.text = text.to_string();
            Error::Parse(e)
        }
        other => other,
    })
}

fn dispatch(target: Target, text: &str, config: &ParseConfig) -> Result<Value> {
    let value = match target {
        Target::I32 => Value::I32(parse_i32(text)?),
        Target::U32 => Value::U32(parse_u32(text)?),
        Target::I64 => Value::I64(parse_i64(text)?),
        Target::U64 => match config.ulong {
            UlongParsing::Native => Value::U64(parse_u64(text)?),
            UlongParsing::Unsupported => return Err(Error::unsupported("parse_u64")),
        },
        Target::Bool => Value::Bool(parse_bool(text)?),
        Target::Double => Value::Double(parse_double(text)?),
        Target::Char => Value::Char(parse_char(text)?),
    };
    Ok(value)
}
