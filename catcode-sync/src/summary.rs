//! Synchronization outcome types and helpers.

mod outcome;
mod sync_summary;

pub use outcome::EntryOutcome;
pub use sync_summary::{EntryFailure, SyncSummary};
