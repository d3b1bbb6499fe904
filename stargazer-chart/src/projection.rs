//! Alt/az ↔ chart-plane mapping.
//!
//! This is a linear zenithal layout rather than a true stereographic or
//! orthographic projection: radial distance is proportional to zenith angle.
//!
//! ```text
//! r     = (1 - alt / 90) * R
//! angle = (az - 90) * π / 180
//! x     = cx + r cos(angle)
//! y     = cy + r sin(angle)
//! ```
//!
//! With screen y growing downward, azimuth 0 (North) lands at `(cx, cy - r)`,
//! the top of the chart, and azimuth 90 (East) at `(cx + r, cy)`.

use stargazer_core::angle::wrap_0_360;
use stargazer_core::constants::{DEG_TO_RAD, RAD_TO_DEG, ZENITH_ALTITUDE_DEG};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl ChartPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &ChartPoint) -> f64 {
        libm::hypot(self.x - other.x, self.y - other.y)
    }
}

/// Maps a horizontal position onto a circular chart of `radius` centered on
/// `(center_x, center_y)`.
///
/// Expects `altitude_deg` in (0, 90] and `azimuth_deg` in [0, 360). Callers
/// drop bodies at or below the horizon before calling; no range checks are
/// made here beyond a debug assertion.
#[inline]
pub fn project(
    altitude_deg: f64,
    azimuth_deg: f64,
    center_x: f64,
    center_y: f64,
    radius: f64,
) -> ChartPoint {
    debug_assert!(
        altitude_deg.is_finite() && azimuth_deg.is_finite(),
        "non-finite alt/az passed to project"
    );

    let r = (1.0 - altitude_deg / ZENITH_ALTITUDE_DEG) * radius;
    let angle = (azimuth_deg - 90.0) * DEG_TO_RAD;
    let (sin_a, cos_a) = libm::sincos(angle);

    ChartPoint {
        x: center_x + r * cos_a,
        y: center_y + r * sin_a,
    }
}

/// Inverse of [`project`]: recovers `(altitude_deg, azimuth_deg)` for a chart point.
///
/// Returns `None` when the point lies outside the chart disc. The azimuth at
/// the exact center is undefined and reported as 0.
pub fn unproject(
    point: ChartPoint,
    center_x: f64,
    center_y: f64,
    radius: f64,
) -> Option<(f64, f64)> {
    if radius <= 0.0 {
        return None;
    }

    let dx = point.x - center_x;
    let dy = point.y - center_y;
    let r = libm::hypot(dx, dy);

    if r > radius * (1.0 + 1e-12) {
        return None;
    }

    let altitude_deg = ZENITH_ALTITUDE_DEG * (1.0 - r / radius);
    let azimuth_deg = if r == 0.0 {
        0.0
    } else {
        wrap_0_360(libm::atan2(dy, dx) * RAD_TO_DEG + 90.0)
    };

    Some((altitude_deg, azimuth_deg))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CX: f64 = 100.0;
    const CY: f64 = 100.0;
    const R: f64 = 100.0;

    fn azimuth_gap(a: f64, b: f64) -> f64 {
        ((a - b + 540.0).rem_euclid(360.0) - 180.0).abs()
    }

    #[test]
    fn test_zenith_maps_to_center() {
        for az in [0.0, 45.0, 90.0, 180.0, 271.3, 359.9] {
            let p = project(90.0, az, CX, CY, R);
            assert!((p.x - CX).abs() < 1e-12, "az={az}");
            assert!((p.y - CY).abs() < 1e-12, "az={az}");
        }
    }

    #[test]
    fn test_radial_distance_is_linear_in_altitude() {
        let center = ChartPoint::new(CX, CY);
        for alt in [0.5, 10.0, 30.0, 45.0, 60.0, 89.0, 90.0] {
            for az in [0.0, 33.0, 90.0, 180.0, 225.0, 359.0] {
                let p = project(alt, az, CX, CY, R);
                let expected = (1.0 - alt / 90.0) * R;
                assert!(
                    (p.distance_to(&center) - expected).abs() < 1e-9,
                    "alt={alt} az={az}"
                );
            }
        }
    }

    #[test]
    fn test_north_at_horizon_is_top_of_chart() {
        // azimuth 0 -> angle -90°, (cos, sin) = (0, -1), so y = cy - r
        let eps = 1e-9;
        let p = project(eps, 0.0, CX, CY, R);
        assert!((p.x - CX).abs() < 1e-6);
        assert!((p.y - (CY - R)).abs() < 1e-6);
    }

    #[test]
    fn test_cardinal_points() {
        let east = project(0.0, 90.0, CX, CY, R);
        assert!((east.x - (CX + R)).abs() < 1e-9);
        assert!((east.y - CY).abs() < 1e-9);

        let south = project(0.0, 180.0, CX, CY, R);
        assert!((south.x - CX).abs() < 1e-9);
        assert!((south.y - (CY + R)).abs() < 1e-9);

        let west = project(0.0, 270.0, CX, CY, R);
        assert!((west.x - (CX - R)).abs() < 1e-9);
        assert!((west.y - CY).abs() < 1e-9);
    }

    #[test]
    fn test_offset_center_and_radius() {
        let p = project(45.0, 90.0, 10.0, -5.0, 40.0);
        assert!((p.x - 30.0).abs() < 1e-9);
        assert!((p.y - (-5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_unproject_inverts_project() {
        for alt in [1.0, 15.0, 45.0, 72.5, 89.0] {
            for az in [0.0, 12.0, 90.0, 179.0, 181.0, 300.0] {
                let p = project(alt, az, CX, CY, R);
                let (alt2, az2) = unproject(p, CX, CY, R).unwrap();
                assert!((alt - alt2).abs() < 1e-9, "alt={alt} az={az}");
                assert!(azimuth_gap(az, az2) < 1e-9, "alt={alt} az={az}");
            }
        }
    }

    #[test]
    fn test_unproject_center_and_outside() {
        let (alt, az) = unproject(ChartPoint::new(CX, CY), CX, CY, R).unwrap();
        assert_eq!(alt, 90.0);
        assert_eq!(az, 0.0);

        assert!(unproject(ChartPoint::new(CX + R + 1.0, CY), CX, CY, R).is_none());
        assert!(unproject(ChartPoint::new(CX, CY), CX, CY, 0.0).is_none());
    }
}
