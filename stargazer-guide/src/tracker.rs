//! Location → body positions → sky chart.
//!
//! [`SkyTracker`] wires a [`Geocoder`] and a [`PositionProvider`] to a
//! [`SkyChart`]. Each call is a single attempt: no retries, no timeouts, no
//! cancellation. Those belong to whatever transport backs the providers.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use stargazer_chart::{CelestialPosition, PlottedBody, SkyChart};
use stargazer_core::GeoPoint;
use tracing::{debug, warn};

use crate::errors::{GuideError, GuideResult};
use crate::location::{resolve_location, Geocoder, ResolvedLocation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bodies tracked when the user asks what is up tonight.
pub const DEFAULT_BODIES: [&str; 7] = [
    "sun", "moon", "mercury", "venus", "mars", "jupiter", "saturn",
];

/// Night-sky subset used for the "current conditions" summary.
pub const NIGHT_BODIES: [&str; 6] = ["moon", "mercury", "venus", "mars", "jupiter", "saturn"];

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionRequest {
    pub location: GeoPoint,
    pub elevation_m: f64,
    pub timestamp: DateTime<Utc>,
    pub bodies: Vec<String>,
}

/// Source of alt/az positions for named bodies, typically a remote ephemeris API.
///
/// Implementations return positions in the order of `request.bodies`.
pub trait PositionProvider {
    fn body_positions(&self, request: &PositionRequest) -> GuideResult<Vec<CelestialPosition>>;
}

impl<P: PositionProvider + ?Sized> PositionProvider for &P {
    fn body_positions(&self, request: &PositionRequest) -> GuideResult<Vec<CelestialPosition>> {
        (**self).body_positions(request)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkyReport {
    pub location: ResolvedLocation,
    pub timestamp: DateTime<Utc>,
    pub positions: Vec<CelestialPosition>,
    pub plotted: Vec<PlottedBody>,
}

impl SkyReport {
    pub fn below_horizon(&self) -> impl Iterator<Item = &CelestialPosition> {
        self.positions.iter().filter(|p| !p.is_above_horizon())
    }
}

/// Builds a UTC timestamp from a `YYYY-MM-DD` date and an `HH:MM` time.
pub fn observation_time(date: &str, time: &str) -> GuideResult<DateTime<Utc>> {
    let invalid =
        || GuideError::invalid_input("The selected date or time is invalid. Please check your input.");
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M").map_err(|_| invalid())?;
    Ok(date.and_time(time).and_utc())
}

pub struct SkyTracker<G, P> {
    geocoder: G,
    provider: P,
    chart: SkyChart,
    bodies: Vec<String>,
    elevation_m: f64,
}

impl<G: Geocoder, P: PositionProvider> SkyTracker<G, P> {
    pub fn new(geocoder: G, provider: P) -> Self {
        Self {
            geocoder,
            provider,
            chart: SkyChart::default(),
            bodies: DEFAULT_BODIES.iter().map(|b| b.to_string()).collect(),
            elevation_m: 0.0,
        }
    }

    pub fn with_chart(mut self, chart: SkyChart) -> Self {
        self.chart = chart;
        self
    }

    pub fn with_bodies<I, S>(mut self, bodies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bodies = bodies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_elevation(mut self, elevation_m: f64) -> Self {
        self.elevation_m = elevation_m;
        self
    }

    pub fn chart(&self) -> &SkyChart {
        &self.chart
    }

    /// Resolves `query` (coordinates or place name), fetches positions for
    /// the configured bodies at `timestamp` and plots those above the horizon.
    pub fn track(&self, query: &str, timestamp: DateTime<Utc>) -> GuideResult<SkyReport> {
        let location = resolve_location(query, &self.geocoder)?;
        self.track_resolved(location, timestamp)
    }

    /// Same as [`track`](Self::track) for an already-known position, e.g. a
    /// device location or a map click.
    pub fn track_point(&self, point: GeoPoint, timestamp: DateTime<Utc>) -> GuideResult<SkyReport> {
        self.track_resolved(
            ResolvedLocation {
                point,
                geocoded_from: None,
            },
            timestamp,
        )
    }

    fn track_resolved(
        &self,
        location: ResolvedLocation,
        timestamp: DateTime<Utc>,
    ) -> GuideResult<SkyReport> {
        let request = PositionRequest {
            location: location.point,
            elevation_m: self.elevation_m,
            timestamp,
            bodies: self.bodies.clone(),
        };

        debug!(
            location = %request.location,
            %timestamp,
            bodies = request.bodies.len(),
            "requesting body positions"
        );

        let positions = self.provider.body_positions(&request).inspect_err(|e| {
            warn!(location = %request.location, error = %e, "position lookup failed");
        })?;

        if positions.is_empty() {
            return Err(GuideError::no_data(
                "provider returned no positions for the requested bodies",
            ));
        }

        let plotted = self.chart.plot(&positions);
        debug!(
            returned = positions.len(),
            above_horizon = plotted.len(),
            "sky report ready"
        );

        Ok(SkyReport {
            location,
            timestamp,
            positions,
            plotted,
        })
    }
}
