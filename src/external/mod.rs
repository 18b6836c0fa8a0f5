//! Clients for remote services the watcher depends on.

pub mod client;
pub mod sirens;
