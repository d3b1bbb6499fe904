use std::borrow::Cow;

use stargazer_core::GeoPoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferencePoint {
    pub name: Cow<'static, str>,
    pub location: GeoPoint,
}

impl ReferencePoint {
    pub const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            location: GeoPoint::from_degrees(latitude, longitude),
        }
    }

    pub fn owned(name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            location,
        }
    }
}

/// Major light-polluted metros used as brightness anchors.
pub static REFERENCE_CITIES: [ReferencePoint; 8] = [
    ReferencePoint::new("Los Angeles", 34.0522, -118.2437),
    ReferencePoint::new("New York", 40.7128, -74.0060),
    ReferencePoint::new("London", 51.5074, -0.1278),
    ReferencePoint::new("Tokyo", 35.6762, 139.6503),
    ReferencePoint::new("Sydney", -33.8688, 151.2093),
    ReferencePoint::new("Phoenix", 33.4484, -112.0740),
    ReferencePoint::new("Sao Paulo", -23.5505, -46.6333),
    ReferencePoint::new("Johannesburg", -26.2041, 28.0473),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_cities_are_valid_points() {
        for city in REFERENCE_CITIES.iter() {
            assert!(GeoPoint::new(city.location.latitude, city.location.longitude).is_ok());
            assert!(!city.name.is_empty());
        }
    }

    #[test]
    fn test_reference_cities_borrow_is_static() {
        let cities: &'static [ReferencePoint] = &REFERENCE_CITIES;
        let tokyo = cities.iter().find(|c| c.name == "Tokyo").unwrap();
        assert!((tokyo.location.longitude - 139.6503).abs() < 1e-9);
    }

    #[test]
    fn test_owned_reference_point() {
        let p = ReferencePoint::owned("Las Vegas", GeoPoint::from_degrees(36.17, -115.14));
        assert_eq!(p.name, "Las Vegas");
    }
}
