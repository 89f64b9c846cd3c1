//! Conversions between unsigned carriers and `f64`.
//!
//! Only the 32-bit width converts to and from doubles: an `f64` holds every
//! 32-bit magnitude exactly but not every 64-bit one.

use crate::error::{Error, Result};

/// Weight of the high 16-bit half.
const HALF_WORD: f64 = 65536.0;

/// Unsigned magnitude of a 32-bit carrier as an `f64`.
///
/// Negative carriers are split into 16-bit halves so that no signed
/// wraparound reaches the float.
///
/// # Test Cases
/// - u32_to_double(-1) = 4294967295.0
/// - u32_to_double(0x80000000) = 2147483648.0
pub fn u32_to_double(v: i32) -> f64 {
    if v >= 0 {
        return v as f64;
    }
    let bits = v as u32;
    let low = bits & 0xFFFF;
    let high = bits >> 16;
    log::trace!("u32_to_double split: high={:#x} low={:#x}", high, low);
    low as f64 + high as f64 * HALF_WORD
}

/// Truncate an `f64` to the 32-bit carrier of its unsigned magnitude.
///
/// # Preconditions
///
/// After truncation `d` must lie in `0..=2^32 - 1`. Negative values above
/// `-1.0` truncate to 0. Values up to `i32::MAX` take a direct truncating
/// cast; anything larger is split into 16-bit halves. When `d` is `-1.0` or
/// below, NaN, infinite, or its high half does not fit in 16 bits, this
/// returns [`Error::PreconditionViolation`].
pub fn double_to_u32(d: f64) -> Result<i32> {
    if d <= -1.0 {
        return Err(Error::precondition(
            "double_to_u32",
            format!("{} is negative", d),
        ));
    }
    if d <= i32::MAX as f64 {
        return Ok(d as i32);
    }

    let low = d.floor() % HALF_WORD;
    let high = (d / HALF_WORD).floor();
    if !(0.0..HALF_WORD).contains(&high) || !(0.0..HALF_WORD).contains(&low) {
        return Err(Error::precondition(
            "double_to_u32",
            format!("{} is not representable in 32 unsigned bits", d),
        ));
    }

    log::trace!("double_to_u32 split: high={} low={}", high, low);
    let bits = ((high as u32) << 16) | low as u32;
    Ok(bits as i32)
}

/// Zero-extend a 32-bit carrier into an `i64` holding its unsigned magnitude.
pub fn widen_u32(v: i32) -> i64 {
    i64::from(v as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_to_double_non_negative() {
        assert_eq!(u32_to_double(0), 0.0);
        assert_eq!(u32_to_double(0xFFFF), 65535.0);
        assert_eq!(u32_to_double(i32::MAX), 2147483647.0);
    }

    #[test]
    fn test_u32_to_double_high_values() {
        assert_eq!(u32_to_double(-1), 4294967295.0);
        assert_eq!(u32_to_double(i32::MIN), 2147483648.0);
        assert_eq!(u32_to_double(0xDEAD_BEEFu32 as i32), 3735928559.0);
    }

    #[test]
    fn test_double_to_u32_direct() {
        assert_eq!(double_to_u32(0.0), Ok(0));
        assert_eq!(double_to_u32(42.9), Ok(42));
        assert_eq!(double_to_u32(2147483647.0), Ok(i32::MAX));
        assert_eq!(double_to_u32(-0.5), Ok(0));
        assert_eq!(double_to_u32(-0.0), Ok(0));
    }

    #[test]
    fn test_double_to_u32_split() {
        assert_eq!(double_to_u32(2147483648.0), Ok(i32::MIN));
        assert_eq!(double_to_u32(4294967295.0), Ok(-1));
        assert_eq!(double_to_u32(4294967295.75), Ok(-1));
        assert_eq!(double_to_u32(2147483647.5), Ok(i32::MAX));
        assert_eq!(double_to_u32(3735928559.0), Ok(0xDEAD_BEEFu32 as i32));
    }

    #[test]
    fn test_double_to_u32_precondition() {
        for bad in [
            4294967296.0,
            1e20,
            f64::INFINITY,
            f64::NAN,
            -1.0,
            -1e20,
            f64::NEG_INFINITY,
        ] {
            match double_to_u32(bad) {
                Err(Error::PreconditionViolation { operation, .. }) => {
                    assert_eq!(operation, "double_to_u32")
                }
                other => panic!("expected precondition violation for {}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_round_trip_samples() {
        let mut m: u64 = 0;
        while m <= u32::MAX as u64 {
            let pattern = m as u32 as i32;
            assert_eq!(double_to_u32(u32_to_double(pattern)), Ok(pattern));
            m += 65521;
        }
        for pattern in [0, 1, -1, i32::MIN, i32::MAX, 0xFFFF, 0x1_0000] {
            assert_eq!(double_to_u32(u32_to_double(pattern)), Ok(pattern));
        }
    }

    #[test]
    fn test_widen_u32() {
        assert_eq!(widen_u32(-1), 4294967295);
        assert_eq!(widen_u32(i32::MIN), 2147483648);
        assert_eq!(widen_u32(12), 12);
    }
}
