use thiserror::Error;

/// Errors from the booking API boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connection, middleware, retry exhaustion.
    #[error("booking request failed: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// The response could not be read or decoded.
    #[error("booking response unreadable: {0}")]
    Decode(#[from] reqwest::Error),

    /// The API answered with a failure. Carries the remote's free-text
    /// message, which downstream classification inspects.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// The remote's own failure message, when there is one.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(message) => Some(message),
            _ => None,
        }
    }
}
