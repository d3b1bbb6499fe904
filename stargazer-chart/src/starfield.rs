//! Decorative background stars for the sky chart.
//!
//! Placement comes from a sine-hash sequence (`frac(sin(n) * 10000)` for
//! `n = seed, seed + 1, ...`), so a given seed always produces the same field.
//! It is not a statistical RNG; it only needs to look scattered.

use stargazer_core::constants::TWOPI;

use crate::chart::SkyChart;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BackgroundStar {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub opacity: f64,
}

struct SineHash {
    counter: u64,
}

impl SineHash {
    fn new(seed: u64) -> Self {
        Self { counter: seed }
    }

    fn next_unit(&mut self) -> f64 {
        let v = libm::sin(self.counter as f64) * 10000.0;
        self.counter = self.counter.wrapping_add(1);
        v - libm::floor(v)
    }
}

/// Generates `count` stars uniformly spread over the chart disc.
///
/// Each star consumes four draws in a fixed order: angle, distance, radius,
/// opacity. Radius falls in [0.3, 0.7) and opacity in [0.4, 0.9).
pub fn background_stars(chart: &SkyChart, count: usize, seed: u64) -> Vec<BackgroundStar> {
    let mut rng = SineHash::new(seed);
    (0..count)
        .map(|_| {
            let a = rng.next_unit() * TWOPI;
            let r = libm::sqrt(rng.next_unit()) * chart.radius;
            let (sin_a, cos_a) = libm::sincos(a);
            BackgroundStar {
                x: chart.center_x + r * cos_a,
                y: chart.center_y + r * sin_a,
                radius: 0.3 + rng.next_unit() * 0.4,
                opacity: 0.4 + rng.next_unit() * 0.5,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ChartPoint;

    #[test]
    fn test_same_seed_same_field() {
        let chart = SkyChart::default();
        let a = background_stars(&chart, 150, 1337);
        let b = background_stars(&chart, 150, 1337);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_field() {
        let chart = SkyChart::default();
        let a = background_stars(&chart, 10, 1337);
        let b = background_stars(&chart, 10, 42);
        assert_ne!(a, b);
    }

    #[test]
    fn test_stars_inside_disc_with_bounded_attributes() {
        let chart = SkyChart::default();
        let center = chart.center();
        for star in background_stars(&chart, 500, 1337) {
            let d = ChartPoint::new(star.x, star.y).distance_to(&center);
            assert!(d <= chart.radius + 1e-9);
            assert!((0.3..0.7).contains(&star.radius));
            assert!((0.4..0.9).contains(&star.opacity));
        }
    }

    #[test]
    fn test_first_draw_matches_sine_hash() {
        let mut rng = SineHash::new(1337);
        let v = libm::sin(1337.0) * 10000.0;
        assert_eq!(rng.next_unit(), v - libm::floor(v));
    }

    #[test]
    fn test_zero_count() {
        assert!(background_stars(&SkyChart::default(), 0, 1).is_empty());
    }
}
