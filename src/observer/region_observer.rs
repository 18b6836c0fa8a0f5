use crate::external::sirens::{FetchError, RegionId, StatusSource};

use super::state::ObservationState;

/// What a single [`RegionObserver::update`] did.
#[derive(Debug)]
pub enum UpdateOutcome {
    /// The fetch succeeded and this many regions were written
    Merged { regions: usize },
    /// The fetch failed; state is untouched
    Failed(FetchError),
}

impl UpdateOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, UpdateOutcome::Failed(_))
    }
}

/// Owns the observation state and keeps it in sync with a [`StatusSource`].
pub struct RegionObserver {
    source: Box<dyn StatusSource>,
    state: ObservationState,
}

impl RegionObserver {
    /// Create an observer with empty state
    pub fn new(source: Box<dyn StatusSource>) -> Self {
        Self {
            source,
            state: ObservationState::new(),
        }
    }

    /// Fetch once and merge the result.
    ///
    /// Never fails: a fetch error is logged and returned as
    /// [`UpdateOutcome::Failed`], and the state is left exactly as it was.
    pub async fn update(&mut self) -> UpdateOutcome {
        match self.source.fetch().await {
            Ok(snapshot) => {
                let regions = self.state.merge(snapshot);
                tracing::debug!(
                    source = self.source.name(),
                    regions,
                    known_regions = self.state.len(),
                    "Region status updated"
                );
                UpdateOutcome::Merged { regions }
            }
            Err(e) => {
                match e.status_code() {
                    Some(code) => tracing::warn!(
                        source = self.source.name(),
                        code,
                        "Failed to get new siren status (code: {})",
                        code
                    ),
                    None => tracing::warn!(
                        source = self.source.name(),
                        error = %e,
                        "Failed to get new siren status"
                    ),
                }
                UpdateOutcome::Failed(e)
            }
        }
    }

    /// Regions currently in an active alert, sorted by name
    pub fn active_regions(&self) -> Vec<RegionId> {
        self.state.active_regions()
    }

    /// Read-only view of everything observed so far
    pub fn state(&self) -> &ObservationState {
        &self.state
    }
}
