//! Audible alert playback.
//!
//! The poll loop only sees [`AlertPlayer`]; [`RodioPlayer`] is the
//! implementation backed by the default system output device.

mod error;
mod player;
mod rodio_player;

pub use error::PlaybackError;
pub use player::AlertPlayer;
pub use rodio_player::RodioPlayer;
