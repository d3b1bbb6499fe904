//! Turning the user's location input into coordinates.
//!
//! Input of the form `"lat, lon"` is taken literally; anything else is a
//! place name handed to a [`Geocoder`].

use stargazer_core::GeoPoint;
use tracing::debug;

use crate::errors::{GuideError, GuideResult};

/// Resolves free-text place names to coordinates.
///
/// `Ok(None)` means the service answered but found nothing; transport and
/// service failures are `Err`.
pub trait Geocoder {
    fn geocode(&self, query: &str) -> GuideResult<Option<GeoPoint>>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn geocode(&self, query: &str) -> GuideResult<Option<GeoPoint>> {
        (**self).geocode(query)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Coordinates(GeoPoint),
    Place(String),
}

impl LocationQuery {
    /// Exactly two comma-separated finite numbers are coordinates, validated
    /// as a [`GeoPoint`]. Any other non-empty text, including `NaN` or `inf`
    /// spellings, is a place name.
    pub fn parse(input: &str) -> GuideResult<Self> {
        let query = input.trim();
        if query.is_empty() {
            return Err(GuideError::invalid_input(
                "Location input is required. Please enter a location.",
            ));
        }

        let parts: Vec<&str> = query.split(',').map(str::trim).collect();
        if let [lat, lon] = parts.as_slice() {
            if let (Ok(lat), Ok(lon)) = (lat.parse::<f64>(), lon.parse::<f64>()) {
                if lat.is_finite() && lon.is_finite() {
                    return Ok(LocationQuery::Coordinates(GeoPoint::new(lat, lon)?));
                }
            }
        }

        Ok(LocationQuery::Place(query.to_string()))
    }
}

/// A location ready for position lookups, remembering whether a geocoder
/// produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub point: GeoPoint,
    pub geocoded_from: Option<String>,
}

pub fn resolve_location<G: Geocoder + ?Sized>(
    input: &str,
    geocoder: &G,
) -> GuideResult<ResolvedLocation> {
    match LocationQuery::parse(input)? {
        LocationQuery::Coordinates(point) => Ok(ResolvedLocation {
            point,
            geocoded_from: None,
        }),
        LocationQuery::Place(name) => {
            debug!(query = %name, "geocoding");
            let point = geocoder
                .geocode(&name)?
                .ok_or_else(|| GuideError::location_not_found(name.as_str()))?;
            debug!(query = %name, %point, "geocoded");
            Ok(ResolvedLocation {
                point,
                geocoded_from: Some(name),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FixedGeocoder {
        answer: Option<GeoPoint>,
        calls: Cell<usize>,
    }

    impl Geocoder for FixedGeocoder {
        fn geocode(&self, _query: &str) -> GuideResult<Option<GeoPoint>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.answer)
        }
    }

    struct FailingGeocoder;

    impl Geocoder for FailingGeocoder {
        fn geocode(&self, _query: &str) -> GuideResult<Option<GeoPoint>> {
            Err(GuideError::provider("Geocoding", "502 Bad Gateway"))
        }
    }

    #[test]
    fn test_parse_coordinates() {
        let q = LocationQuery::parse(" 34.0522 , -118.2437 ").unwrap();
        assert_eq!(
            q,
            LocationQuery::Coordinates(GeoPoint::from_degrees(34.0522, -118.2437))
        );
    }

    #[test]
    fn test_parse_place() {
        let q = LocationQuery::parse("Flagstaff, AZ").unwrap();
        assert_eq!(q, LocationQuery::Place("Flagstaff, AZ".into()));

        let q = LocationQuery::parse("1, 2, 3").unwrap();
        assert_eq!(q, LocationQuery::Place("1, 2, 3".into()));
    }

    #[test]
    fn test_parse_non_finite_numbers_are_places() {
        for text in ["NaN, 5", "inf, 10", "12, -infinity"] {
            let q = LocationQuery::parse(text).unwrap();
            assert_eq!(q, LocationQuery::Place(text.to_string()));
        }
    }

    #[test]
    fn test_non_finite_query_is_geocoded() {
        let geocoder = FixedGeocoder {
            answer: Some(GeoPoint::from_degrees(1.0, 2.0)),
            calls: Cell::new(0),
        };
        let resolved = resolve_location("NaN, 5", &geocoder).unwrap();
        assert_eq!(resolved.geocoded_from.as_deref(), Some("NaN, 5"));
        assert_eq!(geocoder.calls.get(), 1);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            LocationQuery::parse("   "),
            Err(GuideError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_parse_out_of_range_coordinates() {
        assert!(matches!(
            LocationQuery::parse("95, 10"),
            Err(GuideError::Sky { .. })
        ));
    }

    #[test]
    fn test_coordinates_skip_geocoder() {
        let geocoder = FixedGeocoder {
            answer: None,
            calls: Cell::new(0),
        };
        let resolved = resolve_location("10.5, 20.25", &geocoder).unwrap();
        assert_eq!(resolved.point, GeoPoint::from_degrees(10.5, 20.25));
        assert!(resolved.geocoded_from.is_none());
        assert_eq!(geocoder.calls.get(), 0);
    }

    #[test]
    fn test_place_geocoded() {
        let geocoder = FixedGeocoder {
            answer: Some(GeoPoint::from_degrees(35.1983, -111.6513)),
            calls: Cell::new(0),
        };
        let resolved = resolve_location("Flagstaff", &geocoder).unwrap();
        assert_eq!(resolved.point.latitude, 35.1983);
        assert_eq!(resolved.geocoded_from.as_deref(), Some("Flagstaff"));
        assert_eq!(geocoder.calls.get(), 1);
    }

    #[test]
    fn test_place_not_found() {
        let geocoder = FixedGeocoder {
            answer: None,
            calls: Cell::new(0),
        };
        let err = resolve_location("Atlantis", &geocoder).unwrap_err();
        assert!(matches!(err, GuideError::LocationNotFound { ref query } if query == "Atlantis"));
    }

    #[test]
    fn test_geocoder_failure_propagates() {
        let err = resolve_location("Flagstaff", &FailingGeocoder).unwrap_err();
        assert!(matches!(err, GuideError::Provider { .. }));
    }
}
