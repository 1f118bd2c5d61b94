//! Error types for brain operations.

use thiserror::Error;

/// Errors that can occur while calling a text-generation provider.
///
/// No variant is retried by callers; every provider call is attempted once.
#[derive(Debug, Error)]
pub enum BrainError {
    /// The brain could not be constructed (missing key, bad client settings).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with a non-success status.
    #[error("provider error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// The provider answered 2xx but the body was not a usable reply.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// The provider did not answer within the configured timeout.
    #[error("provider request timed out")]
    Timeout,
}

impl BrainError {
    /// Upstream HTTP status, if the provider returned one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            BrainError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}
