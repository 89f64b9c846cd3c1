//! uemu - Unsigned Integer Emulation over Signed Words
//!
//! Runtime support for code generated against a target whose only native
//! integers are signed 32-bit and 64-bit words. An unsigned value travels in
//! a signed carrier of the same width holding the same bits: the carrier
//! `v: i32` stands for `v mod 2^32`, and `v: i64` for `v mod 2^64`.
//!
//! # Operations
//!
//! - **Comparison**: [`compare_u32`], [`compare_u64`] order carriers as unsigned
//! - **Conversion**: [`u32_to_double`], [`double_to_u32`], [`widen_u32`]
//! - **Parsing**: [`parse_i32`], [`parse_u32`], [`parse_i64`], [`parse_u64`],
//!   [`parse_bool`], [`parse_double`], [`parse_char`]
//! - **Bitwise**: [`bitwise_not_i64`]
//!
//! All of these are pure functions and safe to call from any thread.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use uemu::{compare_u32, parse_u32, u32_to_double};
//!
//! let max = parse_u32("4294967295").unwrap();
//! assert_eq!(max, -1);
//! assert_eq!(compare_u32(max, 0), Ordering::Greater);
//! assert_eq!(u32_to_double(max), 4294967295.0);
//! ```
//!
//! # Tooling
//!
//! [`parse_as`] parses for a [`Target`] chosen at run time, [`dump`] renders
//! values for diagnostic output, and [`config`] loads `uemu.toml`. The `uemu`
//! binary wires these together.

#![warn(clippy::all)]

pub mod bitwise;
pub mod compare;
pub mod config;
pub mod convert;
pub mod dump;
pub mod error;
pub mod parse;
pub mod value;

// Re-export the core operations
pub use bitwise::bitwise_not_i64;
pub use compare::{compare_u32, compare_u32_code, compare_u64, compare_u64_code};
pub use convert::{double_to_u32, u32_to_double, widen_u32};
pub use parse::{
    parse_as, parse_bool, parse_char, parse_double, parse_i32, parse_i64, parse_u32, parse_u64,
};

pub use config::{ConfigError, OutputFormat, ParseConfig, UemuConfig, UlongParsing};
pub use dump::{BoolStyle, Dumper};
pub use error::{Error, ParseError, ParseErrorKind, Result, Target};
pub use value::Value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
