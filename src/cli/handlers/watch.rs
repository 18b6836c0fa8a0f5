//! Watch command handler
//!
//! Wires the status client, the observer, the alert player and the loop
//! together, then polls until the process receives a shutdown signal.

use tokio::signal;

use crate::audio::{AlertPlayer, RodioPlayer};
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::external::sirens::SirensApi;
use crate::notifier::{LoopTiming, NotificationLoop};
use crate::observer::RegionObserver;

/// Handler for the watch command
pub struct WatchCommandHandler {
    config: Settings,
}

impl WatchCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the watch command
    ///
    /// With `dry_run` the configuration is validated and the sound asset is
    /// loaded, then the handler returns without polling.
    ///
    /// # Errors
    /// - Configuration validation errors
    /// - Sound asset or audio device failures
    /// - HTTP client construction failures
    pub async fn execute(&self, dry_run: bool) -> AppResult<()> {
        self.config.validate()?;

        let player = self.load_player()?;

        if dry_run {
            println!("✓ Configuration is valid");
            println!("✓ Status endpoint: {}", self.config.api.url);
            println!("✓ Sound asset loaded: {}", player.path().display());
            println!("✓ Poll interval: {}s", self.config.poll.interval_secs);
            println!("Dry run completed successfully");
            return Ok(());
        }

        let mut notification_loop = self.build_loop(Box::new(player))?;

        tokio::select! {
            _ = notification_loop.run() => {}
            _ = shutdown_signal() => {}
        }

        tracing::info!("Siren observer stopped");
        Ok(())
    }

    fn load_player(&self) -> AppResult<RodioPlayer> {
        tracing::info!(
            path = %self.config.alert.sound_path.display(),
            "Initializing sound player"
        );

        RodioPlayer::load(&self.config.alert.sound_path, self.config.alert.volume).map_err(|e| {
            tracing::error!(error = %e, "Failed to initialize sound player");
            AppError::from(e)
        })
    }

    /// Assemble the loop around the configured status API and `player`
    pub fn build_loop(&self, player: Box<dyn AlertPlayer>) -> AppResult<NotificationLoop> {
        let api = SirensApi::new(&self.config.api)
            .map_err(|e| AppError::startup("http client", e))?;
        tracing::debug!(url = api.url(), "Status API client ready");

        let observer = RegionObserver::new(Box::new(api));
        Ok(NotificationLoop::new(
            observer,
            player,
            LoopTiming::from_settings(&self.config),
        ))
    }
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
