//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::build;
use crate::config::Environment;

/// Audible air-raid siren watcher
#[derive(Parser, Debug)]
#[command(name = "siren-watch")]
#[command(about = "Poll regional siren status and play an alert while any region is active")]
#[command(long_about = "
siren-watch polls a regional siren status API, keeps the latest status of every
region it has ever seen, and plays an alert sound once per cycle in which at least
one region reports a full or partial alert.

EXAMPLES:
    # Watch with default configuration
    siren-watch

    # Poll every 30 seconds with a custom sound
    siren-watch watch --interval 30 --sound /usr/share/sounds/siren.mp3

    # Use a custom configuration file
    siren-watch --config /etc/siren-watch/production.toml watch

    # Check configuration and the sound file without polling
    siren-watch watch --dry-run

    # Fetch once and print the current status
    siren-watch status
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute (defaults to `watch`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Load a single TOML file instead of the layered configuration directory.
    /// The file must exist and be readable.
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` layer is loaded.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Poll the status API forever and sound the alert (default)
    Watch {
        /// Status endpoint URL
        #[arg(long, value_name = "URL", value_parser = super::validation::validate_url)]
        url: Option<String>,

        /// Seconds to wait between polls
        #[arg(short, long, value_name = "SECS", value_parser = super::validation::validate_interval)]
        interval: Option<u64>,

        /// Alert sound file
        #[arg(short, long, value_name = "FILE")]
        sound: Option<PathBuf>,

        /// Log level override
        ///
        /// Overrides both configuration files and the global --verbose/--quiet flags.
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and load the sound file, then exit
        #[arg(long)]
        dry_run: bool,
    },
    /// Fetch the status once and print it
    Status {
        /// Status endpoint URL
        #[arg(long, value_name = "URL", value_parser = super::validation::validate_url)]
        url: Option<String>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Watch {
            url: None,
            interval: None,
            sound: None,
            log_level: None,
            dry_run: false,
        }
    }
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_flag() {
        let err = Cli::try_parse_from(["siren-watch", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["siren-watch", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_default_behavior() {
        let cli = Cli::try_parse_from(["siren-watch"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
        assert!(cli.env.is_none());
    }

    #[test]
    fn test_watch_command() {
        let cli = Cli::try_parse_from([
            "siren-watch",
            "watch",
            "--interval",
            "30",
            "--sound",
            "alarm.mp3",
            "--url",
            "http://localhost:8080/api/",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Watch {
                url,
                interval,
                sound,
                log_level,
                dry_run,
            }) => {
                assert_eq!(url.as_deref(), Some("http://localhost:8080/api/"));
                assert_eq!(interval, Some(30));
                assert_eq!(sound, Some(PathBuf::from("alarm.mp3")));
                assert!(log_level.is_none());
                assert!(dry_run);
            }
            other => panic!("Expected Watch command, got {:?}", other),
        }
    }

    #[test]
    fn test_watch_rejects_zero_interval() {
        let result = Cli::try_parse_from(["siren-watch", "watch", "--interval", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_url_rejected_at_parse_time() {
        for url in ["http://localhost:99999/", "http://exa[mple/"] {
            let err = Cli::try_parse_from(["siren-watch", "status", "--url", url]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn test_status_command() {
        let cli = Cli::try_parse_from(["siren-watch", "status"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Status { url: None })));
    }

    #[test]
    fn test_env_aliases() {
        let cli = Cli::try_parse_from(["siren-watch", "--env", "prod"]).unwrap();
        assert!(matches!(cli.env, Some(Environment::Production)));
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let err = Cli::try_parse_from(["siren-watch", "--verbose", "--quiet"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
