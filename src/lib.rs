//! siren-watch library
//!
//! Polls a regional siren status API and plays an alert sound while any
//! region reports an active alert.

use shadow_rs::shadow;
shadow!(build);

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod notifier;
pub mod observer;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
