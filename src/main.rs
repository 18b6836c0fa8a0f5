use std::process::ExitCode;

use clap::Parser;
use siren_watch::cli::{self, Cli};
use siren_watch::error::AppError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // The logger is configured from settings, so loading errors go to stderr.
    let settings = match cli::load_and_merge_config(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            report(&e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = cli::init_logger_from_settings(&settings) {
        report(&e);
        return ExitCode::FAILURE;
    }

    tracing::debug!(
        version = siren_watch::pkg_version(),
        url = %settings.api.url,
        "Configuration loaded"
    );

    match cli::execute_command(&cli, settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "siren-watch failed");
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(error: &AppError) {
    eprintln!("Error: {}", error);
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}
