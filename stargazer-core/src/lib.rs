//! Shared building blocks for the stargazer crates.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] value type, normalization, validation, HMS/DMS formatting |
//! | [`location`] | [`GeoPoint`] observer / map coordinates |
//! | [`math`] | Planar and great-circle separations in degree space |
//! | [`errors`] | [`SkyError`] and the [`SkyResult`] alias |
//! | [`constants`] | Angular conversion constants |

pub mod angle;
pub mod constants;
pub mod errors;
pub mod location;
pub mod math;

pub use angle::Angle;
pub use errors::{SkyError, SkyResult};
pub use location::GeoPoint;
