//! Diagnostic rendering of carrier values.
//!
//! Test harnesses for generated code compare printed output line by line,
//! so every formatter here produces one canonical spelling. Unsigned
//! carriers print as their unsigned magnitude.

use crate::convert::widen_u32;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Spelling used for booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoolStyle {
    /// `True` / `False`
    #[default]
    Python,
    /// `true` / `false`
    Lower,
}

pub fn format_int(v: i32) -> String {
    v.to_string()
}

pub fn format_uint(v: i32) -> String {
    widen_u32(v).to_string()
}

pub fn format_long(v: i64) -> String {
    v.to_string()
}

pub fn format_ulong(v: i64) -> String {
    (v as u64).to_string()
}

pub fn format_bool(v: bool, style: BoolStyle) -> String {
    let s = match (style, v) {
        (BoolStyle::Python, true) => "True",
        (BoolStyle::Python, false) => "False",
        (BoolStyle::Lower, true) => "true",
        (BoolStyle::Lower, false) => "false",
    };
    s.to_string()
}

/// Shortest round-trip spelling; integral values keep a `.0`.
///
/// Large magnitudes use Rust's exponent form (`1e20`), not `1.0E20`.
pub fn format_double(v: f64) -> String {
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    format!("{:?}", v)
}

/// Double-quoted, with embedded quotes escaped.
pub fn format_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

pub fn format_value(value: &Value, style: BoolStyle) -> String {
    match *value {
        Value::I32(v) => format_int(v),
        Value::U32(v) => format_uint(v),
        Value::I64(v) => format_long(v),
        Value::U64(v) => format_ulong(v),
        Value::Bool(v) => format_bool(v, style),
        Value::Double(v) => format_double(v),
        Value::Char(c) => c.to_string(),
    }
}

/// Writes one formatted value per line.
///
/// The dumper owns its writer; share a single instance behind a lock when
/// several threads need a deterministic interleaving.
pub struct Dumper<W: Write> {
    out: W,
    style: BoolStyle,
}

impl<W: Write> Dumper<W> {
    pub fn new(out: W) -> Self {
        Self::with_style(out, BoolStyle::default())
    }

    pub fn with_style(out: W, style: BoolStyle) -> Self {
        Self { out, style }
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn int(&mut self, v: i32) -> io::Result<()> {
        self.line(&format_int(v))
    }

    pub fn uint(&mut self, v: i32) -> io::Result<()> {
        self.line(&format_uint(v))
    }

    pub fn long(&mut self, v: i64) -> io::Result<()> {
        self.line(&format_long(v))
    }

    pub fn ulong(&mut self, v: i64) -> io::Result<()> {
        self.line(&format_ulong(v))
    }

    pub fn boolean(&mut self, v: bool) -> io::Result<()> {
        let text = format_bool(v, self.style);
        self.line(&text)
    }

    pub fn double(&mut self, v: f64) -> io::Result<()> {
        self.line(&format_double(v))
    }

    pub fn string(&mut self, s: &str) -> io::Result<()> {
        self.line(&format_string(s))
    }

    pub fn value(&mut self, value: &Value) -> io::Result<()> {
        let text = format_value(value, self.style);
        self.line(&text)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_unsigned() {
        assert_eq!(format_uint(-1), "4294967295");
        assert_eq!(format_uint(i32::MIN), "2147483648");
        assert_eq!(format_uint(65535), "65535");
        assert_eq!(format_ulong(-1), "18446744073709551615");
        assert_eq!(format_ulong(i64::MIN), "9223372036854775808");
    }

    #[test]
    fn test_format_bool() {
        assert_eq!(format_bool(true, BoolStyle::Python), "True");
        assert_eq!(format_bool(false, BoolStyle::Python), "False");
        assert_eq!(format_bool(true, BoolStyle::Lower), "true");
    }

    #[test]
    fn test_format_double() {
        assert_eq!(format_double(1.0), "1.0");
        assert_eq!(format_double(-0.5), "-0.5");
        assert_eq!(format_double(4294967295.0), "4294967295.0");
        assert_eq!(format_double(f64::INFINITY), "Infinity");
        assert_eq!(format_double(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_double(f64::NAN), "NaN");
        assert_eq!(format_double(1e7), "10000000.0");
        assert_eq!(format_double(1e20), "1e20");
    }

    #[test]
    fn test_format_string_escapes_quotes() {
        assert_eq!(format_string("abc"), "\"abc\"");
        assert_eq!(format_string("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(format_string(""), "\"\"");
    }

    #[test]
    fn test_dumper_lines() {
        let mut dumper = Dumper::new(Vec::new());
        dumper.int(-1).unwrap();
        dumper.uint(-1).unwrap();
        dumper.boolean(false).unwrap();
        dumper.double(2.0).unwrap();
        dumper.string("q\"").unwrap();
        dumper.value(&Value::U64(-1)).unwrap();
        let text = String::from_utf8(dumper.into_inner()).unwrap();
        assert_eq!(
            text,
            "-1\n4294967295\nFalse\n2.0\n\"q\\\"\"\n18446744073709551615\n"
        );
    }
}
