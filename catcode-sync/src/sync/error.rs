//! Synchronizer error types.

use crate::content::FetchError;
use crate::discovery::DiscoveryError;
use crate::events::PublishError;
use crate::ingest::IngestError;
use thiserror::Error;

/// Why a single tracked file produced no application.
#[derive(Debug, Error)]
pub enum EntryError {
    /// Retrieval failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Parsing or validation failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

impl EntryError {
    /// Returns true when the file was found but its response had no content.
    #[must_use]
    pub fn is_missing_content(&self) -> bool {
        matches!(self, Self::Fetch(FetchError::ContentNotFound { .. }))
    }
}

/// Errors that fail a synchronization run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Discovery could not complete.
    #[error("Discovery failed: {0}")]
    Discovery(#[from] DiscoveryError),

    /// A tracked file failed under the abort policy.
    #[error("Aborting after failure in {repository} at '{path}': {source}")]
    Entry {
        repository: String,
        path: String,
        #[source]
        source: EntryError,
    },

    /// The event bus rejected an event.
    #[error("Failed to publish component from {repository} at '{path}': {source}")]
    Publish {
        repository: String,
        path: String,
        #[source]
        source: PublishError,
    },
}
