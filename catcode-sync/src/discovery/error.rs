//! Discovery error types.

use crate::host::HostError;
use thiserror::Error;

/// Errors that abort a discovery run.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The search endpoint answered with a non-success status.
    #[error("Code search failed with HTTP {status_code}: {body}")]
    SearchFailure { status_code: u16, body: String },

    /// The search rate limit could not be read.
    #[error("Search rate limit check failed: {0}")]
    RateLimitCheck(#[source] HostError),

    /// The search request could not be completed.
    #[error("Code search request failed: {0}")]
    Host(#[source] HostError),

    /// A search item lacked a field needed to build a match.
    #[error("Malformed search item {index} on page {page}: missing {field}")]
    MalformedItem {
        page: u32,
        index: usize,
        field: &'static str,
    },
}

impl From<HostError> for DiscoveryError {
    fn from(error: HostError) -> Self {
        match error {
            HostError::Status { status_code, body } => Self::SearchFailure { status_code, body },
            other => Self::Host(other),
        }
    }
}
