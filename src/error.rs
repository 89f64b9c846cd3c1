//! Error types for unsigned emulation.
//!
//! Failures fall into three kinds: bad text handed to a `parse_*` function,
//! a capability that is switched off, and a caller breaking a documented
//! precondition. None of them are transient.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use thiserror::Error;

/// The interpretation a piece of text was parsed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    I32,
    U32,
    I64,
    U64,
    Bool,
    Double,
    Char,
}

impl Target {
    /// All targets, in declaration order.
    pub const ALL: [Target; 7] = [
        Target::I32,
        Target::U32,
        Target::I64,
        Target::U64,
        Target::Bool,
        Target::Double,
        Target::Char,
    ];

    /// Short lowercase name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Target::I32 => "i32",
            Target::U32 => "u32",
            Target::I64 => "i64",
            Target::U64 => "u64",
            Target::Bool => "bool",
            Target::Double => "double",
            Target::Char => "char",
        }
    }

    /// Look up a target by its short name.
    pub fn from_name(name: &str) -> Option<Target> {
        Target::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a piece of text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    /// No text at all.
    Empty,
    /// A character that is not a digit where a digit was required.
    InvalidDigit,
    /// A well-formed number outside the target's range.
    OutOfRange,
    /// A minus sign on an unsigned target.
    Negative,
    /// A `char` target given text that is not exactly one character.
    NotSingleChar { len: usize },
    /// Text that is neither a number nor an accepted keyword.
    Malformed,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Empty => write!(f, "empty input"),
            ParseErrorKind::InvalidDigit => write!(f, "invalid digit"),
            ParseErrorKind::OutOfRange => write!(f, "value out of range"),
            ParseErrorKind::Negative => write!(f, "negative value for unsigned type"),
            ParseErrorKind::NotSingleChar { len } => {
                write!(f, "expected exactly one character, found {}", len)
            }
            ParseErrorKind::Malformed => write!(f, "malformed literal"),
        }
    }
}

impl From<&ParseIntError> for ParseErrorKind {
    fn from(err: &ParseIntError) -> Self {
        match err.kind() {
            IntErrorKind::Empty => ParseErrorKind::Empty,
            IntErrorKind::InvalidDigit => ParseErrorKind::InvalidDigit,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseErrorKind::OutOfRange,
            _ => ParseErrorKind::Malformed,
        }
    }
}

/// Text that is not a valid literal for the requested target.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("cannot parse {text:?} as {target}: {kind}")]
pub struct ParseError {
    pub text: String,
    pub target: Target,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(text: &str, target: Target, kind: ParseErrorKind) -> Self {
        log::debug!("rejecting {:?} as {}: {}", text, target, kind);
        Self {
            text: text.to_string(),
            target,
            kind,
        }
    }
}

/// Errors returned by the emulation layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("unsupported operation: {operation}")]
    UnsupportedOperation { operation: &'static str },

    #[error("precondition violated in {operation}: {detail}")]
    PreconditionViolation {
        operation: &'static str,
        detail: String,
    },
}

impl Error {
    pub(crate) fn unsupported(operation: &'static str) -> Self {
        log::debug!("{} is switched off", operation);
        Error::UnsupportedOperation { operation }
    }

    pub(crate) fn precondition(operation: &'static str, detail: String) -> Self {
        log::debug!("{} precondition failed: {}", operation, detail);
        Error::PreconditionViolation { operation, detail }
    }

    /// The parse failure, if this is one.
    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for emulation operations.
pub type Result<T> = std::result::Result<T, Error>;
