//! Region observation: cumulative per-region status and the active-region query.

mod region_observer;
mod state;

pub use region_observer::{RegionObserver, UpdateOutcome};
pub use state::ObservationState;
