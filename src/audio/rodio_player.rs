use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use super::error::PlaybackError;
use super::player::AlertPlayer;

/// Alert player on the default output device.
///
/// The asset is read into memory once by [`RodioPlayer::load`]; every
/// `play` decodes a fresh source from those bytes.
pub struct RodioPlayer {
    // Dropping the stream silences the sink.
    _stream: OutputStream,
    sink: Sink,
    asset: Arc<[u8]>,
    path: PathBuf,
}

impl RodioPlayer {
    /// Load the alert sound and open the default output stream.
    ///
    /// # Errors
    /// - the file cannot be read
    /// - the file is not in a supported audio format
    /// - no output device is available
    pub fn load(path: impl AsRef<Path>, volume: f32) -> Result<Self, PlaybackError> {
        let path = path.as_ref().to_path_buf();
        let asset: Arc<[u8]> = std::fs::read(&path)?.into();

        // Reject undecodable assets at startup, not on the first alert.
        Decoder::new(Cursor::new(Arc::clone(&asset)))?;

        let stream = OutputStreamBuilder::open_default_stream()?;
        let sink = Sink::connect_new(stream.mixer());
        sink.set_volume(volume);

        tracing::debug!(path = %path.display(), bytes = asset.len(), volume, "Sound asset loaded");

        Ok(Self {
            _stream: stream,
            sink,
            asset,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AlertPlayer for RodioPlayer {
    fn play(&mut self) -> Result<(), PlaybackError> {
        let source = Decoder::new(Cursor::new(Arc::clone(&self.asset)))?;
        self.sink.append(source);
        self.sink.play();
        Ok(())
    }

    fn is_playing(&self) -> bool {
        !self.sink.empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = RodioPlayer::load(dir.path().join("missing.mp3"), 1.0);
        assert!(matches!(result, Err(PlaybackError::Io(_))));
    }

    #[test]
    fn test_load_garbage_is_decode_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"definitely not audio").unwrap();
        file.flush().unwrap();

        let result = RodioPlayer::load(file.path(), 1.0);
        assert!(matches!(result, Err(PlaybackError::Decode(_))));
    }
}
