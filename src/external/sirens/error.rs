use thiserror::Error;

/// Why a status fetch produced no usable mapping.
///
/// Every variant is recoverable: the observer logs it, keeps its previous
/// state and the loop tries again on the next tick.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout or a broken body stream
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with something other than 200 OK
    #[error("unexpected HTTP status {code} from {url}")]
    Status { url: String, code: u16 },

    /// The body was not a JSON object
    #[error("invalid status payload: {message}")]
    Parse { message: String },
}

impl FetchError {
    pub fn parse(message: impl Into<String>) -> Self {
        FetchError::Parse {
            message: message.into(),
        }
    }

    /// HTTP status code, if the failure was a non-OK response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}
