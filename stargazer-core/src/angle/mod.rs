//! Angle value type and the conversions astronomy code needs around it.
//!
//! [`Angle`] stores radians internally. Constructors exist for degrees and
//! hours; accessors convert back. Chart and catalog data in this
//! workspace is mostly degrees, so `from_degrees`/`degrees` are the common path.

mod core;
mod format;
mod normalize;
mod validate;

pub use self::core::Angle;
pub use format::{DmsFmt, HmsFmt};
pub use normalize::wrap_0_360;
pub use validate::{validate_altitude_deg, validate_azimuth_deg, validate_declination};
