use std::time::Duration;

use crate::audio::AlertPlayer;
use crate::config::settings::Settings;
use crate::external::sirens::RegionId;
use crate::observer::{RegionObserver, UpdateOutcome};

/// Sleep intervals driving the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopTiming {
    /// Pause between the end of one cycle and the next fetch
    pub poll_interval: Duration,
    /// Pause between two `is_playing` checks while the alert sounds
    pub playback_poll: Duration,
}

impl LoopTiming {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            poll_interval: Duration::from_secs(settings.poll.interval_secs),
            playback_poll: Duration::from_millis(settings.alert.playback_poll_interval_ms),
        }
    }
}

impl Default for LoopTiming {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(10),
            playback_poll: Duration::from_millis(100),
        }
    }
}

/// What happened during one [`NotificationLoop::run_cycle`]
#[derive(Debug)]
pub struct CycleReport {
    pub update: UpdateOutcome,
    pub active_regions: Vec<RegionId>,
    pub alert_played: bool,
}

/// Process-wide control loop.
///
/// Each cycle updates the observer, and if any region is active plays the
/// alert and waits for it to finish before doing anything else. Status is not
/// refreshed while the alert is playing. There is no edge detection: a region
/// that stays active triggers the alert again on every cycle.
pub struct NotificationLoop {
    observer: RegionObserver,
    player: Box<dyn AlertPlayer>,
    timing: LoopTiming,
}

impl NotificationLoop {
    pub fn new(observer: RegionObserver, player: Box<dyn AlertPlayer>, timing: LoopTiming) -> Self {
        Self {
            observer,
            player,
            timing,
        }
    }

    pub fn observer(&self) -> &RegionObserver {
        &self.observer
    }

    /// Run cycles forever. Only returns when the future is dropped.
    pub async fn run(&mut self) {
        tracing::info!(
            poll_interval_secs = self.timing.poll_interval.as_secs(),
            "Starting region siren observer"
        );

        loop {
            self.run_cycle().await;

            tracing::info!(
                "Waiting {} seconds until updating region status",
                self.timing.poll_interval.as_secs()
            );
            tokio::time::sleep(self.timing.poll_interval).await;
        }
    }

    /// One fetch/merge/classify/notify pass, without the trailing sleep.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let update = self.observer.update().await;
        let active_regions = self.observer.active_regions();

        if active_regions.is_empty() {
            tracing::info!("No regions have an active siren alert");
            return CycleReport {
                update,
                active_regions,
                alert_played: false,
            };
        }

        tracing::info!(
            regions = ?active_regions,
            "One or more regions have an active siren alert ({})",
            active_regions.join(", ")
        );

        let alert_played = self.sound_alert().await;
        CycleReport {
            update,
            active_regions,
            alert_played,
        }
    }

    async fn sound_alert(&mut self) -> bool {
        tracing::info!("Playing siren alert...");
        if let Err(e) = self.player.play() {
            tracing::error!(error = %e, "Failed to play siren alert");
            return false;
        }

        while self.player.is_playing() {
            tokio::time::sleep(self.timing.playback_poll).await;
        }
        tracing::debug!("Siren alert finished");
        true
    }
}
