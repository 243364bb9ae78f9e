//! Fixed-point helpers
//!
//! The G.722 arithmetic runs on 32-bit intermediates that are forced back into
//! the signed 16-bit range at specific points. Overflow must clamp, never wrap.

/// Saturate a 32-bit intermediate to the signed 16-bit range
///
/// Values that survive a round trip through `i16` pass through unchanged;
/// anything else is clamped to `i16::MAX` or `i16::MIN`.
#[inline]
pub fn saturate(amp: i32) -> i32 {
    let amp16 = amp as i16;
    if amp == i32::from(amp16) {
        amp
    } else if amp > i32::from(i16::MAX) {
        i32::from(i16::MAX)
    } else {
        i32::from(i16::MIN)
    }
}

/// Sign of a saturated 16-bit value: `0` for non-negative, `-1` for negative
#[inline]
pub(crate) fn sign(value: i32) -> i32 {
    value >> 15
}
