use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay settings incomplete: {0}")]
    Settings(String),
    #[error("failed to reach email relay endpoint: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("email relay rejected the message (status {status})")]
    Rejected { status: StatusCode },
}

impl RelayError {
    /// Transport-level outcomes are outside this system's control and worth
    /// retrying; rejected submissions usually point at bad credentials.
    pub fn is_transport(&self) -> bool {
        matches!(self, RelayError::Transport { .. })
    }
}
