//! Sexagesimal formatting for the RA/Dec strings carried by chart positions.
//!
//! - DMS (declination, latitude, altitude): `±DD° MM' SS.ss"`, sign always shown.
//! - HMS (right ascension): `HHʰ MMᵐ SS.ssˢ`, wrapped into [0h, 24h).
//!
//! ```
//! use stargazer_core::Angle;
//! use stargazer_core::angle::{DmsFmt, HmsFmt};
//!
//! let dec = Angle::from_degrees(38.783611);
//! assert_eq!(DmsFmt { frac_digits: 0 }.fmt(dec), "+38° 47' 1\"");
//!
//! let ra = Angle::from_hours(18.615556);
//! assert_eq!(HmsFmt { frac_digits: 0 }.fmt(ra), "18ʰ 36ᵐ 56ˢ");
//! ```

use super::Angle;
use std::fmt;

pub struct DmsFmt {
    pub frac_digits: u8,
}

pub struct HmsFmt {
    pub frac_digits: u8,
}

/// Splits a non-negative quantity measured in "units" (degrees or hours) into
/// whole units, whole minutes and seconds, rounding seconds to `frac_digits`
/// first so that 59.999 never prints as 60.
fn split_sexagesimal(value: f64, frac_digits: u8) -> (f64, f64, f64) {
    let scale = libm::pow(10.0, frac_digits as f64);
    let total = libm::round(value * 3600.0 * scale) / scale;
    let whole = libm::floor(total / 3600.0);
    let rest = total - whole * 3600.0;
    let min = libm::floor(rest / 60.0);
    let sec = (rest - min * 60.0).max(0.0);
    (whole, min, sec)
}

impl DmsFmt {
    #[inline]
    pub fn fmt(&self, a: Angle) -> String {
        let (deg, min, sec) = split_sexagesimal(a.degrees().abs(), self.frac_digits);
        // sign follows the rounded value so tiny negatives print as +0
        let rounds_to_zero = deg == 0.0 && min == 0.0 && sec == 0.0;
        let sign = if a.degrees() < 0.0 && !rounds_to_zero { '-' } else { '+' };
        format!(
            "{sign}{deg:.0}° {min:.0}' {sec:.*}\"",
            self.frac_digits as usize
        )
    }
}

impl HmsFmt {
    #[inline]
    pub fn fmt(&self, a: Angle) -> String {
        let h = a.hours().rem_euclid(24.0);
        let (hh, mm, ss) = split_sexagesimal(h, self.frac_digits);
        let hh = hh % 24.0;
        format!("{hh:.0}ʰ {mm:.0}ᵐ {ss:.*}ˢ", self.frac_digits as usize)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}
