//! Unsigned ordering over signed carrier words.
//!
//! A negative carrier has its top bit set, so as an unsigned magnitude it is
//! at least `2^31` (or `2^63`). Within one sign class signed and unsigned
//! ordering agree; across classes the negative carrier is the larger one.

use std::cmp::Ordering;

/// Compare two 32-bit carriers as unsigned magnitudes.
///
/// # Test Cases
/// - compare_u32(0xFFFFFFFF, 0) = Greater
/// - compare_u32(0x80000000, 0xFFFF) = Greater
/// - compare_u32(0xFFFF, 0xFFFFFFFF) = Less
pub fn compare_u32(a: i32, b: i32) -> Ordering {
    if (a | b) & i32::MIN == 0 {
        // Both below 2^31, the difference cannot overflow.
        return (a - b).cmp(&0);
    }

    log::trace!("compare_u32 slow path: {:#x} vs {:#x}", a, b);
    if a == b {
        return Ordering::Equal;
    }
    match (a < 0, b < 0) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // The 2^31 offset cancels when both are high.
        _ => a.cmp(&b),
    }
}

/// Compare two 64-bit carriers as unsigned magnitudes.
///
/// # Test Cases
/// - compare_u64(0xFFFFFFFFFFFFFFFF, 0) = Greater
/// - compare_u64(0x8000000000000000, 0xFFFF) = Greater
/// - compare_u64(0xFFFF, 0x8000000000000000) = Less
pub fn compare_u64(a: i64, b: i64) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    match (a < 0, b < 0) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => a.cmp(&b),
    }
}

/// Three-way code for [`compare_u32`]: `-1`, `0` or `1`.
///
/// Generated code branches on the sign of this value.
pub fn compare_u32_code(a: i32, b: i32) -> i32 {
    compare_u32(a, b) as i32
}

/// Three-way code for [`compare_u64`]: `-1`, `0` or `1`.
pub fn compare_u64_code(a: i64, b: i64) -> i32 {
    compare_u64(a, b) as i32
}
