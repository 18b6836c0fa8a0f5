//! Regional alert status API.
//!
//! [`SirensApi`] is the production [`StatusSource`]; anything else that can
//! produce a [`StatusMap`] (test stubs, replay files) plugs into the observer
//! through the same trait.

mod client;
mod error;
mod provider;
mod types;

pub use client::SirensApi;
pub use error::FetchError;
pub use provider::StatusSource;
pub use types::{RegionId, RegionStatus, StatusMap, decode_status_map};

/// Public endpoint polled when no `api.url` is configured
pub const DEFAULT_API_URL: &str = "https://sirens.in.ua/api/v1/";
