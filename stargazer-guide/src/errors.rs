use stargazer_core::SkyError;
use thiserror::Error;

pub type GuideResult<T> = Result<T, GuideError>;

#[derive(Debug, Error)]
pub enum GuideError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Could not resolve location: \"{query}\"")]
    LocationNotFound { query: String },

    /// Failure reported by an external geocoding or position provider.
    ///
    /// Kept as an opaque string; providers own their transport errors.
    #[error("{provider} error: {message}")]
    Provider { provider: String, message: String },

    #[error("No data: {message}")]
    NoData { message: String },

    #[error("Config error ({path}): {message}")]
    Config { path: String, message: String },

    #[error(transparent)]
    Sky {
        #[from]
        source: SkyError,
    },
}

impl GuideError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn location_not_found(query: impl Into<String>) -> Self {
        Self::LocationNotFound {
            query: query.into(),
        }
    }

    pub fn provider(provider: &str, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    pub fn config(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn no_data(message: impl Into<String>) -> Self {
        Self::NoData {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_not_found_quotes_query() {
        let err = GuideError::location_not_found("Atlantis");
        assert_eq!(err.to_string(), "Could not resolve location: \"Atlantis\"");
    }

    #[test]
    fn test_provider_message() {
        let err = GuideError::provider("Geocoding", "503 Service Unavailable");
        assert_eq!(err.to_string(), "Geocoding error: 503 Service Unavailable");
    }

    #[test]
    fn test_from_sky_error_is_transparent() {
        let sky = SkyError::out_of_range("GeoPoint::new", "Lat 91.0000° out of range");
        let expected = sky.to_string();
        let err: GuideError = sky.into();
        assert_eq!(err.to_string(), expected);
    }
}
