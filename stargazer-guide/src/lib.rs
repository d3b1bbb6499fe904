//! Field-guide computations for visual observing and astrophotography.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`exposure`] | 500-rule exposure limit, [`SensorFormat`] crop factors, ISO tiers |
//! | [`settings`] | Personalizing a [`CameraSettings`] preset for the user's equipment |
//! | [`sky`] | Bortle-class estimate from distance to reference cities |
//! | [`location`] | Parsing "lat, lon" input and geocoding place names |
//! | [`tracker`] | Resolve location → fetch body positions → plot on the sky chart |
//! | `config` | JSON configuration file (feature `serde`) |
//! | [`errors`] | [`GuideError`] and the [`GuideResult`] alias |
//!
//! # Quick Start
//!
//! ```
//! use stargazer_guide::exposure::{max_exposure_seconds, SensorFormat};
//! use stargazer_guide::sky::{classify, REFERENCE_CITIES};
//!
//! assert_eq!(max_exposure_seconds(24.0, SensorFormat::FullFrame.crop_factor()), 21);
//! assert_eq!(classify(34.0522, -118.2437, &REFERENCE_CITIES).value(), 9);
//! ```
//!
//! # Features
//!
//! - **`serde`**: `Serialize`/`Deserialize` on the public data types and
//!   the JSON `config` loader.
//! - **`cli`**: builds the `stargazer` command-line tool.

#[cfg(feature = "serde")]
pub mod config;
pub mod errors;
pub mod exposure;
pub mod location;
pub mod settings;
pub mod sky;
pub mod tracker;

pub use errors::{GuideError, GuideResult};
pub use exposure::{max_exposure_seconds, IsoTier, SensorFormat};
pub use location::{resolve_location, Geocoder, LocationQuery};
pub use settings::{personalize, CameraSettings, Equipment, ShootingMode};
pub use sky::{assess, classify, BortleClass, ReferencePoint, SkyBrightnessSample};
pub use tracker::{PositionProvider, PositionRequest, SkyReport, SkyTracker};
