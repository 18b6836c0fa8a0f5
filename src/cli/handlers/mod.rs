//! Command handlers for CLI operations
//!
//! Each handler owns the merged settings and performs one command.

pub mod status;
pub mod watch;

pub use status::StatusCommandHandler;
pub use watch::WatchCommandHandler;
