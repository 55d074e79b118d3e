//! Startup synchronization summary.

use crate::discovery::FileMatch;
use crate::sync::EntryError;
use serde::Serialize;

/// A tracked file that did not make it into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryFailure {
    /// Repository full name.
    pub repository: String,
    /// Path of the tracked file.
    pub path: String,
    /// Error message.
    pub error: String,
}

/// Summary of a complete synchronization run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncSummary {
    /// Number of tracked files found by discovery.
    pub files_discovered: usize,

    /// Number of events delivered to the bus.
    pub components_published: usize,

    /// Files whose response carried no content.
    pub skipped: Vec<EntryFailure>,

    /// Files that failed to fetch, parse or validate.
    pub failures: Vec<EntryFailure>,
}

impl SyncSummary {
    /// Creates an empty summary for `files_discovered` matches.
    #[must_use]
    pub fn new(files_discovered: usize) -> Self {
        Self {
            files_discovered,
            ..Default::default()
        }
    }

    /// Counts one delivered event.
    pub fn record_published(&mut self) {
        self.components_published += 1;
    }

    /// Records a file that did not produce an application.
    pub fn record_failure(&mut self, file: &FileMatch, error: &EntryError) {
        let failure = EntryFailure {
            repository: file.full_name(),
            path: file.path.clone(),
            error: error.to_string(),
        };
        if error.is_missing_content() {
            self.skipped.push(failure);
        } else {
            self.failures.push(failure);
        }
    }

    /// Returns true if any file failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Returns true if every discovered file was published.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.failures.is_empty() && self.skipped.is_empty()
    }
}
