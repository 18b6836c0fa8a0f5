use thiserror::Error;

use crate::audio::PlaybackError;
use crate::config::error::ConfigError;
use crate::external::sirens::FetchError;

/// Application-wide error type for everything that can stop the watcher
/// before (or instead of) entering the poll loop.
///
/// Errors raised inside a poll cycle never reach this type: fetch and
/// playback failures are logged and absorbed by the observer and the loop.
#[derive(Error, Debug)]
pub enum AppError {
    /// A collaborator failed to initialize (audio device, sound asset, HTTP client)
    #[error("Startup failed: {component}")]
    Startup {
        component: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// One-shot status fetch failed (the poll loop absorbs these instead)
    #[error("Status fetch failed")]
    Fetch(#[from] FetchError),

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },
}

impl AppError {
    pub fn startup(component: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        AppError::Startup {
            component: component.into(),
            source: source.into(),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::ValidationError { field, message } => AppError::Validation {
                field,
                reason: message,
            },
            other => AppError::Configuration {
                key: "settings".to_string(),
                source: other.into(),
            },
        }
    }
}

impl From<PlaybackError> for AppError {
    fn from(error: PlaybackError) -> Self {
        AppError::startup("audio", error)
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_config_error_maps_to_validation() {
        let err: AppError = ConfigError::validation("poll.interval_secs", "must be positive").into();
        match err {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "poll.interval_secs");
                assert_eq!(reason, "must be positive");
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_other_config_error_maps_to_configuration() {
        let err: AppError = ConfigError::FileNotFound("config/default.toml".to_string()).into();
        assert!(matches!(err, AppError::Configuration { .. }));
        assert_eq!(err.to_string(), "Configuration error: settings");
    }

    #[test]
    fn test_playback_error_is_startup_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "siren.mp3");
        let err: AppError = PlaybackError::Io(io).into();
        assert!(matches!(err, AppError::Startup { ref component, .. } if component == "audio"));
    }

    #[test]
    fn test_fetch_error_keeps_cause() {
        let err: AppError = FetchError::Status {
            url: "http://localhost/".to_string(),
            code: 503,
        }
        .into();
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert!(source.is_some_and(|s| s.contains("503")));
    }
}
