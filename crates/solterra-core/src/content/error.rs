//! Content fetch error taxonomy
//!
//! Fetch failures are never fatal: sections render an inline error and the
//! rest of the page keeps working. Cancellation is distinguished from real
//! failures so navigation-triggered aborts are suppressed, not shown.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    /// Transport-level failure (DNS, connect, timeout)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the content API
    #[error("server returned status {code}")]
    Status { code: u16 },

    /// Payload did not match the expected envelope
    #[error("malformed response: {0}")]
    Decode(String),

    /// Fetch aborted by navigation
    #[error("request cancelled")]
    Cancelled,
}

impl ContentError {
    /// Whether the caller may offer a retry
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }

    /// Cancellations are suppressed rather than rendered
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
