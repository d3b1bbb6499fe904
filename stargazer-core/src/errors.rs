//! Error type for the value types and helpers in this crate.
//!
//! Checks such as [`validate_altitude_deg`](crate::angle::validate_altitude_deg)
//! and [`GeoPoint::new`](crate::GeoPoint::new) return [`SkyResult<T>`]. The pure
//! chart and classification functions built on top of these types never fail;
//! validation happens once, when data enters the system.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Convenience alias for `Result<T, SkyError>`.
pub type SkyResult<T> = Result<T, SkyError>;

#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SkyError {
    /// Input could not be interpreted at all (empty name, malformed text).
    #[error("Invalid input in {operation}: {message}")]
    InvalidInput { operation: String, message: String },

    /// Value is finite but outside its physical domain (e.g. altitude > 90°).
    #[error("Value out of range in {operation}: {message}")]
    OutOfRange { operation: String, message: String },

    /// Value is NaN or infinite.
    #[error("Non-finite value in {operation}: {message}")]
    NotFinite { operation: String, message: String },
}

impl SkyError {
    pub fn invalid_input(operation: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            operation: operation.to_string(),
            message: message.into(),
        }
    }

    pub fn out_of_range(operation: &str, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            operation: operation.to_string(),
            message: message.into(),
        }
    }

    pub fn not_finite(operation: &str, message: impl Into<String>) -> Self {
        Self::NotFinite {
            operation: operation.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = SkyError::out_of_range("validate_altitude", "Alt 95.00° out of range");
        let msg = err.to_string();
        assert!(msg.contains("validate_altitude"));
        assert!(msg.contains("95.00"));
    }

    #[test]
    fn test_invalid_input_message() {
        let err = SkyError::invalid_input("CelestialPosition::from_degrees", "empty name");
        assert!(err.to_string().contains("empty name"));
    }
}
