//! Error type for notification client operations.

use http::StatusCode;
use thiserror::Error;

use crate::transport::HttpError;

/// Error returned by [`NotificationClient`](super::NotificationClient).
///
/// Nothing is retried or logged by the client; every failure reaches the
/// caller as one of these variants.
#[derive(Debug, Error)]
pub enum NotifierError {
    /// No response was received.
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with a non-success status.
    #[error("Request failed with status {status}")]
    RequestFailed {
        /// Response status
        status: StatusCode,
        /// Response body, when it is valid UTF-8. Kept for diagnostics only.
        body: Option<String>,
    },

    /// The request body could not be encoded.
    #[error("Failed to encode request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A success response did not carry the expected JSON.
    #[error("Failed to decode response body: {source}")]
    Decode {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
        /// Response body, when it is valid UTF-8
        body: Option<String>,
    },

    /// The base address is not a usable HTTP base URL.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected address
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The credential cannot be sent as an HTTP header value.
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),
}

impl NotifierError {
    /// Returns the HTTP status for [`NotifierError::RequestFailed`].
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if no response was received.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
