use stargazer_core::angle::{validate_altitude_deg, validate_azimuth_deg, DmsFmt, HmsFmt};
use stargazer_core::{Angle, SkyError, SkyResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a named body sits in an observer's sky at one instant.
///
/// RA and Dec are kept as the display strings the provider produced; only
/// altitude and azimuth take part in chart geometry. Both are held in the
/// degrees they arrived in, so the getters hand back exactly what was given
/// (azimuth wrapped into [0, 360)). Values are validated on construction and
/// cannot change afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "PositionRecord", into = "PositionRecord")
)]
pub struct CelestialPosition {
    name: String,
    right_ascension: String,
    declination: String,
    altitude_deg: f64,
    azimuth_deg: f64,
}

impl CelestialPosition {
    pub fn from_degrees(
        name: impl Into<String>,
        right_ascension: impl Into<String>,
        declination: impl Into<String>,
        altitude_deg: f64,
        azimuth_deg: f64,
    ) -> SkyResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SkyError::invalid_input(
                "CelestialPosition::from_degrees",
                "body name is empty",
            ));
        }

        Ok(Self {
            name,
            right_ascension: right_ascension.into(),
            declination: declination.into(),
            altitude_deg: validate_altitude_deg(altitude_deg)?,
            azimuth_deg: validate_azimuth_deg(azimuth_deg)?,
        })
    }

    /// Builds a position from numeric equatorial coordinates, formatting RA
    /// as HMS and Dec as DMS (one decimal on RA seconds, whole arcseconds on Dec).
    pub fn from_equatorial(
        name: impl Into<String>,
        ra: Angle,
        dec: Angle,
        altitude_deg: f64,
        azimuth_deg: f64,
    ) -> SkyResult<Self> {
        let dec = dec.validate_declination()?;
        let ra_str = HmsFmt { frac_digits: 1 }.fmt(ra);
        let dec_str = DmsFmt { frac_digits: 0 }.fmt(dec);
        Self::from_degrees(name, ra_str, dec_str, altitude_deg, azimuth_deg)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn right_ascension(&self) -> &str {
        &self.right_ascension
    }

    pub fn declination(&self) -> &str {
        &self.declination
    }

    pub fn altitude_deg(&self) -> f64 {
        self.altitude_deg
    }

    pub fn azimuth_deg(&self) -> f64 {
        self.azimuth_deg
    }

    /// Strictly above the horizon. A body with altitude exactly 0 is not plotted.
    pub fn is_above_horizon(&self) -> bool {
        self.altitude_deg > 0.0
    }
}

/// Flat provider record, `{ name, ra, dec, altitude, azimuth }` with angles in degrees.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PositionRecord {
    name: String,
    #[serde(default)]
    ra: String,
    #[serde(default)]
    dec: String,
    altitude: f64,
    azimuth: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<PositionRecord> for CelestialPosition {
    type Error = SkyError;

    fn try_from(r: PositionRecord) -> Result<Self, Self::Error> {
        CelestialPosition::from_degrees(r.name, r.ra, r.dec, r.altitude, r.azimuth)
    }
}

#[cfg(feature = "serde")]
impl From<CelestialPosition> for PositionRecord {
    fn from(p: CelestialPosition) -> Self {
        PositionRecord {
            altitude: p.altitude_deg(),
            azimuth: p.azimuth_deg(),
            name: p.name,
            ra: p.right_ascension,
            dec: p.declination,
        }
    }
}
