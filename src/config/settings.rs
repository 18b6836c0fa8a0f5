//! Configuration settings structures for siren-watch
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::external::sirens::DEFAULT_API_URL;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_sound_path() -> PathBuf {
    PathBuf::from("siren.mp3")
}

fn default_volume() -> f32 {
    1.0
}

fn default_playback_poll_interval_ms() -> u64 {
    100
}

fn default_poll_interval_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/siren-watch.log".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

// ============================================================================
// Status API Configuration
// ============================================================================

/// Remote status endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint returning the region → status JSON object
    #[serde(default = "default_api_url")]
    pub url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// TCP/TLS connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

// ============================================================================
// Alert Configuration
// ============================================================================

/// Audible alert configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Sound file played while any region is active
    #[serde(default = "default_sound_path")]
    pub sound_path: PathBuf,

    /// Playback volume, 1.0 is the file's own level
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// How often to check whether the alert has finished, in milliseconds
    #[serde(default = "default_playback_poll_interval_ms")]
    pub playback_poll_interval_ms: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            sound_path: default_sound_path(),
            volume: default_volume(),
            playback_poll_interval_ms: default_playback_poll_interval_ms(),
        }
    }
}

// ============================================================================
// Poll Configuration
// ============================================================================

/// Poll loop configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollConfig {
    /// Seconds to wait after each cycle before fetching again
    #[serde(default = "default_poll_interval_secs")]
    pub interval_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_poll_interval_secs(),
        }
    }
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Path to the log file
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to existing file
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert the file representation into the runtime [`LoggerConfig`]
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        self.validate()?;

        Ok(LoggerConfig {
            console: ConsoleConfig {
                enabled: self.console.enabled,
                colored: self.console.colored,
            },
            file: self.file.into_file_config()?,
            level: self.level.to_lowercase(),
        })
    }
}

impl FileSettings {
    /// The format is only checked when file output is enabled.
    fn into_file_config(self) -> Result<FileConfig, ConfigError> {
        let format = if self.enabled {
            self.format
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::validation("logger.file.format", e.to_string()))?
        } else {
            LogFormat::default()
        };

        Ok(FileConfig {
            enabled: self.enabled,
            path: PathBuf::from(self.path),
            append: self.append,
            format,
        })
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Complete siren-watch configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Status API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Alert sound configuration
    #[serde(default)]
    pub alert: AlertConfig,

    /// Poll loop configuration
    #[serde(default)]
    pub poll: PollConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}
