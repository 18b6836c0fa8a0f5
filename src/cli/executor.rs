//! Command executor for dispatching CLI commands
//!
//! Entry point for running a parsed command once configuration is loaded
//! and the logger is initialized.

use super::handlers::{StatusCommandHandler, WatchCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;

/// Execute a CLI command with the given settings
///
/// No command means `watch` with its defaults.
///
/// # Errors
/// Returns errors from command handlers
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    match cli.command.clone().unwrap_or_default() {
        Commands::Watch { dry_run, .. } => {
            WatchCommandHandler::new(settings).execute(dry_run).await
        }
        Commands::Status { .. } => StatusCommandHandler::new(settings).execute().await,
    }
}
