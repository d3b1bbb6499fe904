use stargazer_core::GeoPoint;
use tracing::debug;

use super::bortle::BortleClass;
use super::reference::ReferencePoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the distance to a reference point is measured.
///
/// `Planar` treats (lat, lon) as flat Euclidean coordinates in degrees and is
/// what the class thresholds were tuned against. `GreatCircle` is the true
/// angular separation; it shrinks east-west distances at high latitude and
/// handles the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistanceMetric {
    #[default]
    Planar,
    GreatCircle,
}

impl DistanceMetric {
    pub fn distance_deg(self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        match self {
            DistanceMetric::Planar => a.planar_distance_deg(b),
            DistanceMetric::GreatCircle => a.great_circle_distance_deg(b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestReference<'a> {
    pub point: &'a ReferencePoint,
    pub distance_deg: f64,
}

/// Nearest reference point to `(lat, lon)`. Ties keep the earlier entry.
pub fn nearest_reference(
    lat: f64,
    lon: f64,
    reference_points: &[ReferencePoint],
    metric: DistanceMetric,
) -> Option<NearestReference<'_>> {
    let query = GeoPoint::from_degrees(lat, lon);
    reference_points
        .iter()
        .map(|point| NearestReference {
            point,
            distance_deg: metric.distance_deg(&query, &point.location),
        })
        .fold(None, |best: Option<NearestReference<'_>>, candidate| match best {
            Some(b) if b.distance_deg <= candidate.distance_deg => Some(b),
            _ => Some(candidate),
        })
}

/// Bortle class at `(lat, lon)` using planar degree distance.
///
/// An empty reference set counts as infinitely far from any city: class 1.
pub fn classify(lat: f64, lon: f64, reference_points: &[ReferencePoint]) -> BortleClass {
    classify_with(lat, lon, reference_points, DistanceMetric::Planar)
}

pub fn classify_with(
    lat: f64,
    lon: f64,
    reference_points: &[ReferencePoint],
    metric: DistanceMetric,
) -> BortleClass {
    let distance = nearest_reference(lat, lon, reference_points, metric)
        .map(|n| n.distance_deg)
        .unwrap_or(f64::INFINITY);
    BortleClass::from_distance(distance)
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NearestMatch {
    pub name: String,
    pub distance_deg: f64,
}

/// A classified location, with the reference point that decided it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkyBrightnessSample {
    pub latitude: f64,
    pub longitude: f64,
    pub bortle_class: BortleClass,
    pub nearest: Option<NearestMatch>,
}

impl SkyBrightnessSample {
    pub fn description(&self) -> &'static str {
        self.bortle_class.description()
    }

    pub fn recommendation(&self) -> &'static str {
        self.bortle_class.recommendation()
    }
}

pub fn assess(lat: f64, lon: f64, reference_points: &[ReferencePoint]) -> SkyBrightnessSample {
    assess_with(lat, lon, reference_points, DistanceMetric::Planar)
}

pub fn assess_with(
    lat: f64,
    lon: f64,
    reference_points: &[ReferencePoint],
    metric: DistanceMetric,
) -> SkyBrightnessSample {
    let nearest = nearest_reference(lat, lon, reference_points, metric);
    let distance = nearest.map(|n| n.distance_deg).unwrap_or(f64::INFINITY);
    let bortle_class = BortleClass::from_distance(distance);

    debug!(
        lat,
        lon,
        ?metric,
        nearest = nearest.map(|n| &*n.point.name).unwrap_or("-"),
        distance_deg = distance,
        class = bortle_class.value(),
        "sky brightness assessed"
    );

    SkyBrightnessSample {
        latitude: lat,
        longitude: lon,
        bortle_class,
        nearest: nearest.map(|n| NearestMatch {
            name: n.point.name.to_string(),
            distance_deg: n.distance_deg,
        }),
    }
}
