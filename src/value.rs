//! Tagged values produced by run-time dispatch.

use crate::convert::widen_u32;
use crate::error::Target;

/// A parsed value together with its interpretation.
///
/// `U32` and `U64` hold the signed carrier; use [`Value::unsigned_magnitude`]
/// to recover the unsigned number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    I32(i32),
    U32(i32),
    I64(i64),
    U64(i64),
    Bool(bool),
    Double(f64),
    Char(char),
}

impl Value {
    pub fn target(&self) -> Target {
        match self {
            Value::I32(_) => Target::I32,
            Value::U32(_) => Target::U32,
            Value::I64(_) => Target::I64,
            Value::U64(_) => Target::U64,
            Value::Bool(_) => Target::Bool,
            Value::Double(_) => Target::Double,
            Value::Char(_) => Target::Char,
        }
    }

    /// The unsigned number behind an unsigned carrier.
    pub fn unsigned_magnitude(&self) -> Option<u64> {
        match *self {
            Value::U32(v) => Some(widen_u32(v) as u64),
            Value::U64(v) => Some(v as u64),
            _ => None,
        }
    }

    /// The carrier of a `U32` value.
    pub fn as_u32_carrier(&self) -> Option<i32> {
        match *self {
            Value::U32(v) => Some(v),
            _ => None,
        }
    }

    /// The carrier of a `U64` value.
    pub fn as_u64_carrier(&self) -> Option<i64> {
        match *self {
            Value::U64(v) => Some(v),
            _ => None,
        }
    }

    /// The raw carrier bits of an integer value, sign-extended to 64 bits.
    pub fn carrier_bits(&self) -> Option<i64> {
        match *self {
            Value::I32(v) | Value::U32(v) => Some(i64::from(v)),
            Value::I64(v) | Value::U64(v) => Some(v),
            _ => None,
        }
    }
}
