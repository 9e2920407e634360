//! Common error types used across the workspace.
//!
//! Every layer speaks [`StaffDirError`]. Adapters define their own typed
//! errors and convert into the [`Transport`](StaffDirError::Transport)
//! variant; non-success HTTP responses are normalized into
//! [`Api`](StaffDirError::Api) with the status carried as data. No status
//! code is special-cased anywhere downstream.

use thiserror::Error;

/// Failures surfaced to the store and, through it, to the UI.
#[derive(Debug, Error)]
pub enum StaffDirError {
    /// A client-side guard rejected the call before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Api {
        /// Raw HTTP status code, kept as data rather than branched on.
        status: u16,
        /// Message extracted from the response body, or a generic fallback.
        message: String,
    },

    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StaffDirError {
    /// Wrap an arbitrary transport-layer failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }
}

/// Guards applied before a request goes out.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A new location must not carry an identifier; the server assigns one.
    #[error("a new location must not carry an id")]
    IdPresent,

    /// Updates address an existing record and therefore need its identifier.
    #[error("an update requires the location id")]
    IdMissing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_status_and_message_for_api_errors() {
        let err = StaffDirError::Api {
            status: 500,
            message: "internal server error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: internal server error");
    }

    #[test]
    fn should_display_validation_message_transparently() {
        let err = StaffDirError::from(ValidationError::IdMissing);
        assert_eq!(err.to_string(), "an update requires the location id");
    }

    #[test]
    fn should_expose_source_for_transport_errors() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = StaffDirError::transport(inner);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("transport error:"));
    }
}
