//! Rough sky-brightness (Bortle class) estimates.
//!
//! The estimate is the distance from the query point to the nearest of a
//! small set of bright reference cities, bucketed through fixed thresholds.
//! Distance is measured in raw degree space by default; see
//! [`DistanceMetric`] for the great-circle alternative.

mod bortle;
mod classify;
mod reference;

pub use bortle::{BortleClass, BORTLE_THRESHOLDS};
pub use classify::{
    assess, assess_with, classify, classify_with, nearest_reference, DistanceMetric,
    NearestReference, SkyBrightnessSample,
};
pub use reference::{ReferencePoint, REFERENCE_CITIES};
