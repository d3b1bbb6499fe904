//! Range checks applied once, when positions enter the chart.
//!
//! Chart positions arrive from providers in degrees and are checked in
//! degrees, so an accepted value is stored bit-for-bit as given.

use super::core::Angle;
use super::normalize::wrap_0_360;
use crate::constants::{HALF_PI, ZENITH_ALTITUDE_DEG};
use crate::SkyError;

/// Altitude must be finite and within [-90°, +90°]. Returned unchanged.
pub fn validate_altitude_deg(alt: f64) -> Result<f64, SkyError> {
    if !alt.is_finite() {
        return Err(SkyError::not_finite("validate_altitude_deg", "Alt not finite"));
    }

    if (-ZENITH_ALTITUDE_DEG..=ZENITH_ALTITUDE_DEG).contains(&alt) {
        return Ok(alt);
    }

    Err(SkyError::out_of_range(
        "validate_altitude_deg",
        format!("Alt {:.2}° out of range [-90°, +90°]", alt),
    ))
}

/// Azimuth must be finite; it is wrapped to [0°, 360°).
pub fn validate_azimuth_deg(az: f64) -> Result<f64, SkyError> {
    if !az.is_finite() {
        return Err(SkyError::not_finite("validate_azimuth_deg", "Az not finite"));
    }

    Ok(wrap_0_360(az))
}

pub fn validate_declination(angle: Angle) -> Result<Angle, SkyError> {
    let rad = angle.radians();
    if !rad.is_finite() {
        return Err(SkyError::not_finite("validate_declination", "Dec not finite"));
    }

    if (-HALF_PI..=HALF_PI).contains(&rad) {
        return Ok(angle);
    }

    Err(SkyError::out_of_range(
        "validate_declination",
        format!("Dec {:.2}° out of range [-90°, +90°]", angle.degrees()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_altitude_limits() {
        assert_eq!(validate_altitude_deg(90.0), Ok(90.0));
        assert_eq!(validate_altitude_deg(-90.0), Ok(-90.0));
        assert_eq!(validate_altitude_deg(0.0), Ok(0.0));
    }

    #[test]
    fn test_validate_altitude_out_of_range() {
        match validate_altitude_deg(95.0) {
            Err(SkyError::OutOfRange { message, .. }) => assert!(message.contains("95.00")),
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_altitude_nan() {
        let result = validate_altitude_deg(f64::NAN);
        assert!(matches!(result, Err(SkyError::NotFinite { .. })));
    }

    #[test]
    fn test_validate_azimuth_wraps() {
        assert_eq!(validate_azimuth_deg(-45.0), Ok(315.0));
        assert_eq!(validate_azimuth_deg(360.0), Ok(0.0));
        assert_eq!(validate_azimuth_deg(133.7), Ok(133.7));
    }

    #[test]
    fn test_validate_azimuth_infinite() {
        assert!(validate_azimuth_deg(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_declination() {
        assert!(validate_declination(Angle::from_degrees(-89.9)).is_ok());
        assert!(validate_declination(Angle::from_degrees(90.1)).is_err());
        assert!(validate_declination(Angle::from_degrees(f64::NAN)).is_err());
    }
}
