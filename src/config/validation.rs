//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use reqwest::Url;

use crate::config::error::ConfigError;
use crate::config::settings::{
    AlertConfig, ApiConfig, FileSettings, LoggerSettings, PollConfig, Settings,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Parse a status endpoint URL, accepting only http(s) URLs with a host
pub fn parse_status_url(raw: &str) -> Result<Url, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Status API URL is required.".to_string());
    }

    let url = Url::parse(raw).map_err(|e| format!("Invalid status API URL '{}': {}.", raw, e))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!(
            "Status API URL must use http or https, got '{}'.",
            url.scheme()
        ));
    }

    if url.host().is_none() {
        return Err(format!("Status API URL '{}' has no host.", raw));
    }

    Ok(url)
}

/// Loudest volume accepted; rodio amplifies linearly above 1.0
pub const MAX_VOLUME: f32 = 2.0;

impl ApiConfig {
    /// Validate status API configuration
    ///
    /// # Validation Rules
    /// - URL must not be empty and must use http or https
    /// - Request timeout must be greater than 0
    /// - Connect timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_status_url(&self.url).map_err(|reason| ConfigError::validation("api.url", reason))?;

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "api.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout == 0 {
            return Err(ConfigError::validation(
                "api.connect_timeout",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl AlertConfig {
    /// Validate alert configuration
    ///
    /// # Validation Rules
    /// - Sound path must not be empty
    /// - Volume must be between 0.0 and [`MAX_VOLUME`]
    /// - Playback poll interval must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sound_path.as_os_str().is_empty() {
            return Err(ConfigError::validation(
                "alert.sound_path",
                "Sound file path is required.",
            ));
        }

        if !self.volume.is_finite() || !(0.0..=MAX_VOLUME).contains(&self.volume) {
            return Err(ConfigError::validation(
                "alert.volume",
                format!("Volume must be between 0.0 and {}, got {}.", MAX_VOLUME, self.volume),
            ));
        }

        if self.playback_poll_interval_ms == 0 {
            return Err(ConfigError::validation(
                "alert.playback_poll_interval_ms",
                "Playback poll interval must be greater than 0 milliseconds.",
            ));
        }

        Ok(())
    }
}

impl PollConfig {
    /// Validate poll loop configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_secs == 0 {
            return Err(ConfigError::validation(
                "poll.interval_secs",
                "Poll interval must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger configuration
    ///
    /// # Validation Rules
    /// - Level must be one of: trace, debug, info, warn, error
    /// - At least one output (console or file) must be enabled
    /// - File settings must be valid when file output is enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level",
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        if self.file.enabled {
            self.file.validate()?;
        }

        Ok(())
    }
}

impl FileSettings {
    /// Validate file logger configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "Log file path cannot be empty when file output is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.file.format",
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate the entire configuration, section by section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.alert.validate()?;
        self.poll.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn field_of(result: Result<(), ConfigError>) -> String {
        match result {
            Err(ConfigError::ValidationError { field, .. }) => field,
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_api_url_required() {
        let config = ApiConfig {
            url: "  ".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(field_of(config.validate()), "api.url");
    }

    #[test]
    fn test_api_url_scheme() {
        let config = ApiConfig {
            url: "ftp://sirens.example/api".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(field_of(config.validate()), "api.url");

        let config = ApiConfig {
            url: "http://localhost:8080/".to_string(),
            ..ApiConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_url_must_parse() {
        for url in [
            "http://localhost:99999/",
            "http://exa[mple/",
            "https://",
            "http://exa mple.com/",
            "sirens.in.ua/api/v1/",
        ] {
            let config = ApiConfig {
                url: url.to_string(),
                ..ApiConfig::default()
            };
            assert_eq!(field_of(config.validate()), "api.url", "url {:?}", url);
        }
    }

    #[test]
    fn test_parse_status_url_keeps_path() {
        let url = parse_status_url(" https://sirens.in.ua/api/v1/ ").unwrap();
        assert_eq!(url.host_str(), Some("sirens.in.ua"));
        assert_eq!(url.path(), "/api/v1/");
    }

    #[test]
    fn test_api_timeouts_positive() {
        let config = ApiConfig {
            request_timeout: 0,
            ..ApiConfig::default()
        };
        assert_eq!(field_of(config.validate()), "api.request_timeout");

        let config = ApiConfig {
            connect_timeout: 0,
            ..ApiConfig::default()
        };
        assert_eq!(field_of(config.validate()), "api.connect_timeout");
    }

    #[test]
    fn test_alert_volume_range() {
        for volume in [-0.1, 2.5, f32::NAN] {
            let config = AlertConfig {
                volume,
                ..AlertConfig::default()
            };
            assert_eq!(field_of(config.validate()), "alert.volume");
        }

        for volume in [0.0, 0.5, 1.0, MAX_VOLUME] {
            let config = AlertConfig {
                volume,
                ..AlertConfig::default()
            };
            assert!(config.validate().is_ok(), "volume {} should be valid", volume);
        }
    }

    #[test]
    fn test_alert_sound_path_required() {
        let config = AlertConfig {
            sound_path: PathBuf::new(),
            ..AlertConfig::default()
        };
        assert_eq!(field_of(config.validate()), "alert.sound_path");
    }

    #[test]
    fn test_playback_poll_interval_positive() {
        let config = AlertConfig {
            playback_poll_interval_ms: 0,
            ..AlertConfig::default()
        };
        assert_eq!(field_of(config.validate()), "alert.playback_poll_interval_ms");
    }

    #[test]
    fn test_poll_interval_positive() {
        let config = PollConfig { interval_secs: 0 };
        assert_eq!(field_of(config.validate()), "poll.interval_secs");
    }

    #[test]
    fn test_logger_level_vocabulary() {
        let mut settings = LoggerSettings::default();
        settings.level = "verbose".to_string();
        assert_eq!(field_of(settings.validate()), "logger.level");

        settings.level = "WARN".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_logger_needs_an_output() {
        let mut settings = LoggerSettings::default();
        settings.console.enabled = false;
        settings.file.enabled = false;
        assert_eq!(field_of(settings.validate()), "logger");
    }

    #[test]
    fn test_file_logger_checked_only_when_enabled() {
        let mut settings = LoggerSettings::default();
        settings.file.format = "xml".to_string();
        assert!(settings.validate().is_ok());

        settings.file.enabled = true;
        assert_eq!(field_of(settings.validate()), "logger.file.format");
    }

    #[test]
    fn test_settings_reports_first_invalid_section() {
        let mut settings = Settings::default();
        settings.poll.interval_secs = 0;
        settings.logger.level = "loud".to_string();
        assert_eq!(field_of(settings.validate()), "poll.interval_secs");
    }
}
