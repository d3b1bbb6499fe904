//! Circular alt/az sky chart.
//!
//! Zenith sits at the chart center and the horizon on its rim; radial
//! distance falls off linearly with altitude. North is at the top of the
//! chart and azimuth increases clockwise on screen (y grows downward).
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`position`] | [`CelestialPosition`] records handed in by a position provider |
//! | [`projection`] | [`project`] / [`unproject`] and [`ChartPoint`] |
//! | [`chart`] | [`SkyChart`] geometry, [`ChartConfig`], plotting of position lists |
//! | [`starfield`] | Deterministic decorative background stars |
//! | [`viewport`] | Pan/zoom state and click detection for the map view |
//!
//! ```
//! use stargazer_chart::{CelestialPosition, SkyChart};
//!
//! let chart = SkyChart::default();
//! let positions = vec![
//!     CelestialPosition::from_degrees("moon", "", "", 45.0, 90.0)?,
//!     CelestialPosition::from_degrees("sun", "", "", -12.0, 300.0)?,
//! ];
//! let plotted = chart.plot(&positions);
//! assert_eq!(plotted.len(), 1);
//! assert_eq!(plotted[0].position.name(), "moon");
//! # Ok::<(), stargazer_core::SkyError>(())
//! ```

pub mod chart;
pub mod position;
pub mod projection;
pub mod starfield;
pub mod viewport;

pub use chart::{ChartConfig, PlottedBody, SkyChart};
pub use position::CelestialPosition;
pub use projection::{project, unproject, ChartPoint};
pub use starfield::{background_stars, BackgroundStar};
pub use viewport::{PanGesture, Viewport};

pub use stargazer_core::{Angle, GeoPoint, SkyError, SkyResult};
