//! Configuration error types

use thiserror::Error;

/// Failure to load or validate settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration file named explicitly does not exist
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    #[error("invalid {field}: {message}")]
    ValidationError { field: String, message: String },

    /// `SIREN_CONFIG_DIR` and `SIREN_CONFIG_FILE` were both set
    #[error("conflicting configuration sources: {0}")]
    MutualExclusivityError(String),

    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
