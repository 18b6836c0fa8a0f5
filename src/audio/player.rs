use super::error::PlaybackError;

/// Something that can render the alert sound.
///
/// `play` starts playback and returns immediately; callers poll
/// `is_playing` to find out when the sound has finished.
pub trait AlertPlayer {
    /// Start playing the loaded alert from the beginning
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Whether the alert started by the last `play` is still audible
    fn is_playing(&self) -> bool;
}
