use crate::constants::{DEG_TO_RAD, RAD_TO_DEG};

/// Straight-line separation of two points treated as `(lat, lon)` pairs on a
/// flat plane, in degrees.
///
/// Longitude wrap-around is ignored, so points either side of the
/// antimeridian come out far apart.
#[inline]
pub fn planar_separation_deg(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    libm::sqrt((lat1 - lat2).powi(2) + (lon1 - lon2).powi(2))
}

#[inline]
pub fn vincenty_angular_separation(
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lat2: f64,
    cos_lat2: f64,
    delta_lon: f64,
) -> f64 {
    let (sin_delta_lon, cos_delta_lon) = libm::sincos(delta_lon);

    let num = libm::sqrt(
        (cos_lat2 * sin_delta_lon).powi(2)
            + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon).powi(2),
    );
    let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    libm::atan2(num, den)
}

/// Great-circle separation between two `(lat, lon)` points, in degrees.
pub fn great_circle_separation_deg(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (sin_lat1, cos_lat1) = libm::sincos(lat1 * DEG_TO_RAD);
    let (sin_lat2, cos_lat2) = libm::sincos(lat2 * DEG_TO_RAD);
    let delta_lon = (lon2 - lon1) * DEG_TO_RAD;

    vincenty_angular_separation(sin_lat1, cos_lat1, sin_lat2, cos_lat2, delta_lon) * RAD_TO_DEG
}
