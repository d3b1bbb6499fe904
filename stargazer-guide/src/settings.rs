//! Tailoring a subject's camera-settings preset to the user's gear.
//!
//! Presets themselves are reference data supplied by the caller. This module
//! only applies the equipment-specific overrides.

use tracing::debug;

use crate::exposure::{max_exposure, IsoTier, SensorFormat};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Subject whose tripod exposure is recomputed with the 500 rule.
pub const MILKY_WAY_SUBJECT_ID: &str = "milkyway";

/// Notes value marking a preset that does not apply to the chosen mode.
pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CameraSettings {
    pub aperture: String,
    pub exposure: String,
    pub iso: String,
    pub white_balance: String,
    pub timer: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShootingMode {
    #[default]
    Tripod,
    Tracker,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equipment {
    pub sensor: SensorFormat,
    pub focal_length_mm: Option<u32>,
    /// Widest f-number of the lens, e.g. `1.8`.
    pub max_aperture: Option<f64>,
}

/// Applies the user's equipment to a preset.
///
/// - A preset whose notes are `"N/A"` is returned untouched.
/// - A known, positive max aperture replaces the aperture with
///   `f/{n} (Your widest)`.
/// - Tripod shots of the Milky Way with a known, positive focal length get a
///   500-rule exposure, a matching ISO tier and an explanatory tip.
///
/// Remaining notes are the non-empty parts joined by a single space.
pub fn personalize(
    base: &CameraSettings,
    subject_id: &str,
    mode: ShootingMode,
    equipment: &Equipment,
) -> CameraSettings {
    if base.notes.as_deref() == Some(NOT_APPLICABLE) {
        return base.clone();
    }

    let mut settings = base.clone();
    let mut notes: Vec<String> = vec![base.notes.clone().unwrap_or_default()];

    if let Some(aperture) = equipment.max_aperture.filter(|&a| a > 0.0) {
        settings.aperture = format!("f/{aperture} (Your widest)");
    }

    let focal = equipment.focal_length_mm.filter(|&f| f > 0);
    if let (ShootingMode::Tripod, MILKY_WAY_SUBJECT_ID, Some(focal)) = (mode, subject_id, focal) {
        let seconds = max_exposure(focal as f64, equipment.sensor.crop_factor());
        let tier = IsoTier::for_exposure(seconds);

        settings.exposure = format!("{} seconds (Max)", libm::round(seconds));
        settings.iso = tier.recommendation().to_string();
        notes.push(format!(
            "Personalized Tip: Exposure is calculated with the 500 Rule for your {focal}mm lens on a {} sensor.",
            equipment.sensor
        ));

        debug!(focal, sensor = %equipment.sensor, seconds, ?tier, "applied 500 rule");
    }

    settings.notes = Some(
        notes
            .into_iter()
            .filter(|n| !n.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    );

    settings
}
