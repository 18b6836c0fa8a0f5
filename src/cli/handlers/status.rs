//! Status command handler
//!
//! Fetches the status once and prints every reported region and the
//! active set.

use std::fmt::Write;

use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::external::sirens::{SirensApi, StatusSource};
use crate::observer::ObservationState;

/// Handler for the status command
pub struct StatusCommandHandler {
    config: Settings,
}

impl StatusCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Fetch from the configured endpoint and print the report to stdout
    ///
    /// # Errors
    /// Fails if the HTTP client cannot be built or the fetch fails.
    pub async fn execute(&self) -> AppResult<()> {
        let api = SirensApi::new(&self.config.api)
            .map_err(|e| AppError::startup("http client", e))?;
        let report = Self::fetch_report(&api).await?;
        print!("{}", report);
        Ok(())
    }

    /// Fetch once from `source` and render the result
    pub async fn fetch_report(source: &dyn StatusSource) -> AppResult<String> {
        let snapshot = source.fetch().await?;

        let mut state = ObservationState::new();
        state.merge(snapshot);
        Ok(render(&state))
    }
}

fn render(state: &ObservationState) -> String {
    let mut regions: Vec<_> = state.iter().collect();
    regions.sort_by(|a, b| a.0.cmp(b.0));

    let width = regions.iter().map(|(id, _)| id.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (id, status) in regions {
        let marker = if status.is_active() { "*" } else { " " };
        // Writing to a String cannot fail
        let _ = writeln!(out, "{} {:<width$}  {}", marker, id, status, width = width);
    }

    let active = state.active_regions();
    if active.is_empty() {
        out.push_str("No regions have an active siren alert\n");
    } else {
        let _ = writeln!(out, "Active: {}", active.join(", "));
    }
    out
}
