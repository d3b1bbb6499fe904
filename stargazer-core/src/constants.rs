#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const FULL_CIRCLE_DEG: f64 = 360.0;

/// Altitude of the zenith, in degrees.
pub const ZENITH_ALTITUDE_DEG: f64 = 90.0;
