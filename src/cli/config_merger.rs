//! Configuration merger for CLI arguments and config files
//!
//! Applies CLI overrides on top of file and environment configuration.
//! Precedence: CLI > `SIREN_*` environment variables > files > defaults.

use std::path::Path;

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};

/// Configuration merger that handles CLI argument integration with file-based configuration
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load the base configuration honouring `--config` and `--env`
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = ConfigLoader::new()?;

        if let Some(env) = cli.env {
            loader = loader.with_environment(env);
        }

        if let Some(ref path) = cli.config {
            Self::validate_config_file_access(path)?;
            loader = loader.with_config_file(path);
        }

        // Validated after CLI overrides in `merge_cli_args`
        Ok(Self::new(loader.load_unvalidated()?))
    }

    fn validate_config_file_access(path: &Path) -> Result<(), ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::validation(
                "config_file",
                format!("Configuration path is not a readable file: '{}'", path.display()),
            ));
        }

        std::fs::File::open(path).map(|_| ()).map_err(|e| {
            ConfigError::validation(
                "config_file",
                format!("Cannot read configuration file '{}': {}", path.display(), e),
            )
        })
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// Global flags apply first; command flags override them.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        Self::apply_global_overrides(&mut config, cli);

        if let Some(ref command) = cli.command {
            Self::apply_command_overrides(&mut config, command);
        }

        config.validate()?;

        Ok(config)
    }

    fn apply_global_overrides(config: &mut Settings, cli: &Cli) {
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }
    }

    fn apply_command_overrides(config: &mut Settings, command: &Commands) {
        match command {
            Commands::Watch {
                url,
                interval,
                sound,
                log_level,
                dry_run: _,
            } => {
                if let Some(url) = url {
                    config.api.url = url.clone();
                }
                if let Some(secs) = interval {
                    config.poll.interval_secs = *secs;
                }
                if let Some(path) = sound {
                    config.alert.sound_path = path.clone();
                }
                if let Some(level) = log_level {
                    config.logger.level = (*level).into();
                }
            }
            Commands::Status { url } => {
                if let Some(url) = url {
                    config.api.url = url.clone();
                }
            }
        }
    }
}
