use crate::math::{great_circle_separation_deg, planar_separation_deg};
use crate::{SkyError, SkyResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A geographic position in degrees: latitude north-positive, longitude
/// east-positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Validated constructor. Latitude must lie in [-90, 90] and longitude in
    /// [-180, 180]; both must be finite.
    pub fn new(latitude: f64, longitude: f64) -> SkyResult<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(SkyError::not_finite(
                "GeoPoint::new",
                format!("lat={latitude}, lon={longitude}"),
            ));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SkyError::out_of_range(
                "GeoPoint::new",
                format!("Lat {latitude:.4}° out of range [-90°, +90°]"),
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SkyError::out_of_range(
                "GeoPoint::new",
                format!("Lon {longitude:.4}° out of range [-180°, +180°]"),
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Unchecked constructor for compile-time tables and already-validated input.
    pub const fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn planar_distance_deg(&self, other: &GeoPoint) -> f64 {
        planar_separation_deg(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    pub fn great_circle_distance_deg(&self, other: &GeoPoint) -> f64 {
        great_circle_separation_deg(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
