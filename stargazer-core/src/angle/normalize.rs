//! Azimuth wrapping.
//!
//! `libm::fmod` is a remainder, not a modulo, so negative inputs come back
//! negative and are shifted up afterwards.

use crate::constants::FULL_CIRCLE_DEG;

/// Wraps an angle to [0, 360) degrees. Values already in range come back
/// unchanged.
#[inline]
pub fn wrap_0_360(deg: f64) -> f64 {
    let w = libm::fmod(deg, FULL_CIRCLE_DEG);
    let w = if w < 0.0 { w + FULL_CIRCLE_DEG } else { w };
    // fmod(-tiny, 360) + 360 can round up to exactly 360
    if w >= FULL_CIRCLE_DEG {
        0.0
    } else {
        w
    }
}
