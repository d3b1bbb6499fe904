use stargazer_core::constants::ZENITH_ALTITUDE_DEG;
use stargazer_core::Angle;
use tracing::{debug, trace};

use crate::position::CelestialPosition;
use crate::projection::{project, unproject, ChartPoint};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chart sizing and background-star parameters.
///
/// The chart is a square canvas of `size` units; the sky disc fills it, so
/// both center coordinates and the radius are `size / 2`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChartConfig {
    pub size: f64,
    pub star_count: usize,
    pub star_seed: u64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            size: 200.0,
            star_count: 150,
            star_seed: 1337,
        }
    }
}

/// A position that survived the horizon cut, with its chart coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlottedBody {
    pub position: CelestialPosition,
    pub point: ChartPoint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkyChart {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl Default for SkyChart {
    fn default() -> Self {
        Self::from_config(&ChartConfig::default())
    }
}

impl SkyChart {
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    pub fn from_config(config: &ChartConfig) -> Self {
        let half = config.size / 2.0;
        Self::new(half, half, half)
    }

    pub fn center(&self) -> ChartPoint {
        ChartPoint::new(self.center_x, self.center_y)
    }

    /// Radius of the ring drawn for a given altitude (30° and 60° are the usual guides).
    pub fn altitude_ring_radius(&self, altitude_deg: f64) -> f64 {
        (1.0 - altitude_deg / ZENITH_ALTITUDE_DEG) * self.radius
    }

    /// `None` for bodies at or below the horizon.
    pub fn project_position(&self, position: &CelestialPosition) -> Option<ChartPoint> {
        if !position.is_above_horizon() {
            return None;
        }
        Some(project(
            position.altitude_deg(),
            position.azimuth_deg(),
            self.center_x,
            self.center_y,
            self.radius,
        ))
    }

    /// Projects every body above the horizon, keeping input order.
    pub fn plot(&self, positions: &[CelestialPosition]) -> Vec<PlottedBody> {
        let plotted: Vec<PlottedBody> = positions
            .iter()
            .filter_map(|p| {
                let point = self.project_position(p);
                match point {
                    Some(pt) => trace!(
                        body = p.name(),
                        alt = p.altitude_deg(),
                        az = p.azimuth_deg(),
                        x = pt.x,
                        y = pt.y,
                        "plotted"
                    ),
                    None => trace!(body = p.name(), alt = p.altitude_deg(), "below horizon"),
                }
                point.map(|pt| PlottedBody {
                    position: p.clone(),
                    point: pt,
                })
            })
            .collect();

        debug!(
            total = positions.len(),
            plotted = plotted.len(),
            "sky chart plotted"
        );
        plotted
    }

    /// Altitude and azimuth under a chart point, or `None` outside the disc.
    pub fn horizontal_at(&self, point: ChartPoint) -> Option<(Angle, Angle)> {
        unproject(point, self.center_x, self.center_y, self.radius)
            .map(|(alt, az)| (Angle::from_degrees(alt), Angle::from_degrees(az)))
    }
}
