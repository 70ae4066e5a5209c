use thiserror::Error;

/// Everything that can go wrong between sending a request and holding a typed
/// response.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The request never produced a response (DNS, connection reset, CORS, ...).
    #[error("Network error: {0}")]
    Transport(String),

    /// The body was not the JSON we expected.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The body parsed but broke an invariant (score out of range, more
    /// passing constraints than total, empty task id).
    #[error("Invalid response: {0}")]
    InvalidPayload(String),

    #[error("Invalid backend URL {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Status code for HTTP failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Http {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
