//! Tracked file retrieval and decoding.

mod error;

pub use error::FetchError;

use crate::discovery::FileMatch;
use crate::host::{CodeHost, HostError};
use base64::{engine::general_purpose, Engine as _};
use tracing::debug;

/// Retrieves the text of a discovered tracked file.
///
/// # Errors
///
/// Returns [`FetchError::ContentNotFound`] when the response has no content,
/// [`FetchError::FetchFailure`] on a non-success status, and a decode error
/// when the body is not base64 encoded UTF-8.
pub async fn fetch_content<H: CodeHost>(host: &H, file: &FileMatch) -> Result<String, FetchError> {
    let repository = file.full_name();
    debug!(repo = %repository, path = %file.path, "Fetching tracked file");

    let response = host
        .get_file(&file.owner_login, &file.repository_name, &file.path)
        .await
        .map_err(|e| match e {
            HostError::Status { status_code, .. } => FetchError::FetchFailure {
                repository: repository.clone(),
                path: file.path.clone(),
                status_code,
            },
            other => FetchError::Host {
                repository: repository.clone(),
                path: file.path.clone(),
                source: other,
            },
        })?;

    let encoded = response.content.ok_or_else(|| FetchError::ContentNotFound {
        repository: repository.clone(),
        path: file.path.clone(),
    })?;

    decode_content(&encoded)
}

/// Decodes a base64 content blob into text.
///
/// GitHub wraps encoded content at 60 columns, so whitespace is ignored.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] or [`FetchError::NotUtf8`].
pub fn decode_content(encoded: &str) -> Result<String, FetchError> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = general_purpose::STANDARD.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}
