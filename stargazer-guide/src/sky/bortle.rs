use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper distance bounds (degrees, exclusive) and the class assigned below
/// each one, brightest first. Anything beyond the last bound is class 1.
pub const BORTLE_THRESHOLDS: [(f64, u8); 8] = [
    (0.5, 9),
    (1.5, 8),
    (3.0, 7),
    (5.0, 6),
    (8.0, 5),
    (12.0, 4),
    (20.0, 3),
    (30.0, 2),
];

const DESCRIPTIONS: [(&str, &str); 9] = [
    (
        "Excellent Dark-Sky Site",
        "The galactic core casts shadows. Ideal for observing faint objects like nebulae and galaxies.",
    ),
    (
        "Typical Truly Dark Site",
        "The Milky Way is highly structured. Excellent for all deep-sky objects. Airglow may be visible.",
    ),
    (
        "Rural Sky",
        "Some light pollution on the horizon. The Milky Way is still impressive. Good for most observing.",
    ),
    (
        "Rural/Suburban Transition",
        "Light pollution domes visible. The Milky Way is visible but lacks detail. Good for planets and bright objects.",
    ),
    (
        "Suburban Sky",
        "The Milky Way is very weak or invisible. Only bright deep-sky objects like Andromeda are visible. Focus on planets.",
    ),
    (
        "Bright Suburban Sky",
        "The sky has a reddish/grey glow. The Milky Way is lost. Limited to planets and the moon.",
    ),
    (
        "Suburban/Urban Transition",
        "Entire sky is light grey. Heavily filtered astrophotography is possible, but visual is very limited.",
    ),
    (
        "City Sky",
        "You can see the moon, planets, and a few bright star clusters. The sky glows white/orange.",
    ),
    (
        "Inner-City Sky",
        "Only the brightest stars, planets, and the Moon are visible. Sky is brilliant.",
    ),
];

/// Bortle dark-sky scale, 1 (darkest) to 9 (inner city).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct BortleClass(u8);

impl BortleClass {
    pub const DARKEST: BortleClass = BortleClass(1);
    pub const BRIGHTEST: BortleClass = BortleClass(9);

    pub fn new(value: u8) -> Option<Self> {
        (1..=9).contains(&value).then_some(Self(value))
    }

    /// Class for a given distance (degrees) to the nearest bright reference point.
    pub fn from_distance(distance_deg: f64) -> Self {
        BORTLE_THRESHOLDS
            .iter()
            .find(|(bound, _)| distance_deg < *bound)
            .map(|&(_, class)| Self(class))
            .unwrap_or(Self::DARKEST)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn description(self) -> &'static str {
        DESCRIPTIONS[(self.0 - 1) as usize].0
    }

    pub fn recommendation(self) -> &'static str {
        DESCRIPTIONS[(self.0 - 1) as usize].1
    }
}

impl fmt::Display for BortleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class {}", self.0)
    }
}

impl TryFrom<u8> for BortleClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("Bortle class {value} out of range 1-9"))
    }
}

impl From<BortleClass> for u8 {
    fn from(class: BortleClass) -> Self {
        class.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_edges() {
        let cases = [
            (0.0, 9),
            (0.49, 9),
            (0.5, 8),
            (1.49, 8),
            (1.5, 7),
            (2.99, 7),
            (3.0, 6),
            (5.0, 5),
            (8.0, 4),
            (12.0, 3),
            (20.0, 2),
            (29.99, 2),
            (30.0, 1),
            (180.0, 1),
            (f64::INFINITY, 1),
        ];
        for (distance, expected) in cases {
            assert_eq!(
                BortleClass::from_distance(distance).value(),
                expected,
                "distance {distance}"
            );
        }
    }

    #[test]
    fn test_thresholds_ascending() {
        for pair in BORTLE_THRESHOLDS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert_eq!(pair[0].1, pair[1].1 + 1);
        }
    }

    #[test]
    fn test_new_range() {
        assert!(BortleClass::new(0).is_none());
        assert!(BortleClass::new(10).is_none());
        assert_eq!(BortleClass::new(5).map(|c| c.value()), Some(5));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(BortleClass::DARKEST.description(), "Excellent Dark-Sky Site");
        assert_eq!(BortleClass::BRIGHTEST.description(), "Inner-City Sky");
        assert!(BortleClass::BRIGHTEST.recommendation().contains("brightest stars"));
        for v in 1..=9 {
            let c = BortleClass::new(v).unwrap();
            assert!(!c.description().is_empty());
            assert!(!c.recommendation().is_empty());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(BortleClass::BRIGHTEST.to_string(), "Class 9");
    }
}
