//! Untracked exposure limits.
//!
//! The "500 rule" bounds the exposure of a fixed-tripod shot before stars
//! visibly trail: `500 / (focal length × crop factor)` seconds.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numerator of the 500 rule, in millimetre-seconds.
pub const EXPOSURE_RULE_CONSTANT: f64 = 500.0;

/// Exposures shorter than this call for the high ISO tier.
pub const HIGH_ISO_BELOW_SECONDS: f64 = 15.0;
/// Exposures shorter than this (and not in the high tier) call for the mid tier.
pub const MID_ISO_BELOW_SECONDS: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SensorFormat {
    #[default]
    FullFrame,
    ApsC,
    MicroFourThirds,
}

impl SensorFormat {
    pub const ALL: [SensorFormat; 3] = [
        SensorFormat::FullFrame,
        SensorFormat::ApsC,
        SensorFormat::MicroFourThirds,
    ];

    pub fn crop_factor(self) -> f64 {
        match self {
            SensorFormat::FullFrame => 1.0,
            SensorFormat::ApsC => 1.5,
            SensorFormat::MicroFourThirds => 2.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SensorFormat::FullFrame => "full-frame",
            SensorFormat::ApsC => "APS-C",
            SensorFormat::MicroFourThirds => "Micro Four Thirds",
        }
    }
}

impl fmt::Display for SensorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unrounded 500-rule limit in seconds.
///
/// `focal_length_mm` must be positive; zero yields infinity.
#[inline]
pub fn max_exposure(focal_length_mm: f64, crop_factor: f64) -> f64 {
    debug_assert!(focal_length_mm > 0.0, "focal length must be positive");
    EXPOSURE_RULE_CONSTANT / (focal_length_mm * crop_factor)
}

/// 500-rule limit rounded to the nearest whole second (halves round up).
///
/// ```
/// use stargazer_guide::exposure::max_exposure_seconds;
///
/// assert_eq!(max_exposure_seconds(24.0, 1.0), 21);
/// assert_eq!(max_exposure_seconds(50.0, 1.5), 7);
/// ```
#[inline]
pub fn max_exposure_seconds(focal_length_mm: f64, crop_factor: f64) -> u32 {
    libm::round(max_exposure(focal_length_mm, crop_factor)) as u32
}

/// ISO band recommended for a given untracked exposure time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IsoTier {
    High,
    Mid,
    Low,
}

impl IsoTier {
    /// Buckets the unrounded exposure: < 15 s high, < 25 s mid, otherwise low.
    pub fn for_exposure(seconds: f64) -> Self {
        if seconds < HIGH_ISO_BELOW_SECONDS {
            IsoTier::High
        } else if seconds < MID_ISO_BELOW_SECONDS {
            IsoTier::Mid
        } else {
            IsoTier::Low
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            IsoTier::High => "6400 or higher",
            IsoTier::Mid => "3200-6400",
            IsoTier::Low => "1600-3200",
        }
    }
}

impl fmt::Display for IsoTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.recommendation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_frame_24mm() {
        assert_eq!(max_exposure_seconds(24.0, 1.0), 21);
    }

    #[test]
    fn test_apsc_50mm() {
        assert_eq!(max_exposure_seconds(50.0, 1.5), 7);
    }

    #[test]
    fn test_crop_factors() {
        assert_eq!(SensorFormat::FullFrame.crop_factor(), 1.0);
        assert_eq!(SensorFormat::ApsC.crop_factor(), 1.5);
        assert_eq!(SensorFormat::MicroFourThirds.crop_factor(), 2.0);
    }

    #[test]
    fn test_mft_doubles_focal_length() {
        let mft = max_exposure(14.0, SensorFormat::MicroFourThirds.crop_factor());
        let ff = max_exposure(28.0, SensorFormat::FullFrame.crop_factor());
        assert!((mft - ff).abs() < 1e-12);
    }

    #[test]
    fn test_half_rounds_up() {
        // 500 / 40 = 12.5
        assert_eq!(max_exposure_seconds(40.0, 1.0), 13);
    }

    #[test]
    fn test_iso_tier_boundaries() {
        assert_eq!(IsoTier::for_exposure(14.99), IsoTier::High);
        assert_eq!(IsoTier::for_exposure(15.0), IsoTier::Mid);
        assert_eq!(IsoTier::for_exposure(24.99), IsoTier::Mid);
        assert_eq!(IsoTier::for_exposure(25.0), IsoTier::Low);
    }

    #[test]
    fn test_iso_tier_uses_unrounded_exposure() {
        // 500 / 20.1 = 24.875..., rounds to 25 but stays in the mid tier
        let raw = max_exposure(20.1, 1.0);
        assert_eq!(max_exposure_seconds(20.1, 1.0), 25);
        assert_eq!(IsoTier::for_exposure(raw), IsoTier::Mid);
    }

    #[test]
    fn test_iso_recommendations() {
        assert_eq!(IsoTier::High.to_string(), "6400 or higher");
        assert_eq!(IsoTier::Mid.to_string(), "3200-6400");
        assert_eq!(IsoTier::Low.to_string(), "1600-3200");
    }
}
