use thiserror::Error;

/// Errors raised while loading or playing the alert sound
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("failed to read sound asset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode sound asset: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    #[error("failed to open audio output: {0}")]
    Stream(#[from] rodio::StreamError),
}
