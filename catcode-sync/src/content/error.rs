//! Content fetch error types.

use crate::host::HostError;
use thiserror::Error;

/// Errors that can occur while retrieving a tracked file.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The response carried no content field.
    #[error("No content returned for '{path}' in {repository}")]
    ContentNotFound { repository: String, path: String },

    /// The contents endpoint answered with a non-success status.
    #[error("Fetching '{path}' in {repository} failed with HTTP {status_code}")]
    FetchFailure {
        repository: String,
        path: String,
        status_code: u16,
    },

    /// The request could not be completed.
    #[error("Fetching '{path}' in {repository} failed: {source}")]
    Host {
        repository: String,
        path: String,
        #[source]
        source: HostError,
    },

    /// The content was not valid base64.
    #[error("Content is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The decoded bytes were not UTF-8 text.
    #[error("Content is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}
