//! Code host error types.

use thiserror::Error;

/// Errors returned by a [`CodeHost`](super::CodeHost).
#[derive(Debug, Error)]
pub enum HostError {
    /// The service answered with a non-success status.
    #[error("HTTP {status_code}: {body}")]
    Status { status_code: u16, body: String },

    /// GitHub client or transport error.
    #[error("GitHub API error: {0}")]
    GitHubError(octocrab::Error),
}

impl HostError {
    /// Returns the HTTP status code, if the service produced one.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status_code, .. } => Some(*status_code),
            Self::GitHubError(_) => None,
        }
    }
}

impl From<octocrab::Error> for HostError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => Self::Status {
                status_code: source.status_code.as_u16(),
                body: source.message,
            },
            other => Self::GitHubError(other),
        }
    }
}
