//! Bitwise helpers on 64-bit carriers.

/// One's complement of a 64-bit pattern.
///
/// # Test Cases
/// - bitwise_not_i64(0) = -1
/// - bitwise_not_i64(0x00FF00FF00FF00FF) = 0xFF00FF00FF00FF00
pub fn bitwise_not_i64(v: i64) -> i64 {
    !v
}
