//! Per-entry processing outcomes.

use crate::discovery::FileMatch;
use crate::events::DiscoveryEvent;
use crate::sync::EntryError;

/// Result of fetching and ingesting a single tracked file.
#[derive(Debug)]
pub enum EntryOutcome {
    /// The file produced an application.
    Ingested {
        /// File the application was read from.
        file: FileMatch,
        /// Event to publish for it.
        event: DiscoveryEvent,
    },

    /// The file could not be turned into an application.
    Failed {
        /// File that failed.
        file: FileMatch,
        /// Why it failed.
        error: EntryError,
    },
}

impl EntryOutcome {
    /// The file this outcome belongs to.
    #[must_use]
    pub fn file(&self) -> &FileMatch {
        match self {
            Self::Ingested { file, .. } | Self::Failed { file, .. } => file,
        }
    }
}
