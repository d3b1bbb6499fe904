//! JSON configuration for the guide tools.
//!
//! ```json
//! {
//!   "chart": { "size": 400.0, "star_count": 200, "star_seed": 7 },
//!   "reference_points": [
//!     { "name": "Las Vegas", "location": { "latitude": 36.17, "longitude": -115.14 } }
//!   ],
//!   "distance_metric": "planar"
//! }
//! ```
//!
//! Every field is optional. Omitted reference points fall back to
//! [`REFERENCE_CITIES`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use stargazer_chart::ChartConfig;
use tracing::debug;

use crate::errors::{GuideError, GuideResult};
use crate::sky::{DistanceMetric, ReferencePoint, REFERENCE_CITIES};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    pub chart: ChartConfig,
    pub reference_points: Option<Vec<ReferencePoint>>,
    pub distance_metric: DistanceMetric,
}

impl GuideConfig {
    pub fn load(path: impl AsRef<Path>) -> GuideResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        let text = std::fs::read_to_string(path)
            .map_err(|e| GuideError::config(&path_str, e.to_string()))?;
        let config = Self::from_json(&text).map_err(|e| match e {
            GuideError::Config { message, .. } => GuideError::config(&path_str, message),
            other => other,
        })?;
        debug!(path = %path_str, ?config, "loaded config");
        Ok(config)
    }

    pub fn from_json(text: &str) -> GuideResult<Self> {
        serde_json::from_str(text).map_err(|e| GuideError::config("<inline>", e.to_string()))
    }

    pub fn reference_points(&self) -> &[ReferencePoint] {
        self.reference_points.as_deref().unwrap_or(&REFERENCE_CITIES)
    }
}
