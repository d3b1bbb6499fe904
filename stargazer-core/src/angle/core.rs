use crate::constants::{DEGREES_PER_HOUR, DEG_TO_RAD, RAD_TO_DEG};
use crate::SkyResult;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg * DEG_TO_RAD,
        }
    }

    #[inline]
    pub fn from_hours(hours: f64) -> Self {
        Self::from_degrees(hours * DEGREES_PER_HOUR)
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad * RAD_TO_DEG
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / DEGREES_PER_HOUR
    }

    pub fn validate_declination(self) -> SkyResult<Self> {
        super::validate::validate_declination(self)
    }
}
