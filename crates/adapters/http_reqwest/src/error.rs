//! Gateway-specific error type wrapping reqwest errors.

use staffdir_domain::error::StaffDirError;

/// Errors originating from the HTTP transport layer.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request failed in transit or while reading the body.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<GatewayError> for StaffDirError {
    fn from(err: GatewayError) -> Self {
        Self::Transport(Box::new(err))
    }
}
