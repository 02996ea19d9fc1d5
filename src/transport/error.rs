//! Transport-level error type.

use thiserror::Error;

/// A request could not be sent, or no response came back.
///
/// Any HTTP status, including 4xx and 5xx, is a response and never shows
/// up here.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// Covers DNS resolution failures, refused connections and errors
    /// while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The underlying transport gave up waiting for a response.
    #[error("Request timed out")]
    Timeout,

    /// The transport rejected the request before sending it.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl HttpError {
    /// Wraps any error as a connection failure.
    pub fn connection(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Connection(source.into())
    }
}
