//! Ingestion error types.

use thiserror::Error;

/// Errors that can occur while turning a tracked file into a descriptor.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file is not a well-formed YAML document.
    #[error("Failed to parse '{path}' in {repository}: {source}")]
    ParseFailure {
        repository: String,
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document does not match the application schema.
    #[error("Invalid application in '{path}' of {repository}: {message}")]
    SchemaValidationError {
        repository: String,
        path: String,
        message: String,
    },
}
