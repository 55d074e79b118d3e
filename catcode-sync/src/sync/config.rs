//! Synchronizer configuration.

use crate::discovery::RESULTS_PER_PAGE;
use serde::Deserialize;

/// Tracked configuration file searched for by default.
pub const DEFAULT_TRACKED_FILE: &str = "catcode.yaml";

/// What to do when a single tracked file cannot be ingested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Log the failure and continue with the next file.
    #[default]
    Skip,

    /// Stop the run at the first failure. Files without content are still
    /// skipped.
    Abort,
}

/// Configuration for a catalog synchronization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// User or organization whose repositories are searched.
    owner_login: String,
    /// Name of the tracked configuration file.
    tracked_file: String,
    /// Results requested per search page.
    page_size: u8,
    /// Maximum files fetched at once.
    concurrency: usize,
    /// Handling of per-file failures.
    failure_policy: FailurePolicy,
}

impl SyncConfig {
    /// Creates a configuration for `owner_login` with default settings.
    pub fn new(owner_login: impl Into<String>) -> Self {
        Self {
            owner_login: owner_login.into(),
            tracked_file: DEFAULT_TRACKED_FILE.to_string(),
            page_size: RESULTS_PER_PAGE,
            concurrency: 1,
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Sets the tracked file name.
    pub fn with_tracked_file(mut self, tracked_file: impl Into<String>) -> Self {
        self.tracked_file = tracked_file.into();
        self
    }

    /// Sets the search page size, clamped to `1..=100`.
    pub fn with_page_size(mut self, page_size: u8) -> Self {
        self.page_size = page_size.clamp(1, RESULTS_PER_PAGE);
        self
    }

    /// Sets how many files may be fetched at once (at least 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Sets the per-file failure policy.
    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    /// Returns the searched owner.
    pub fn owner_login(&self) -> &str {
        &self.owner_login
    }

    /// Returns the tracked file name.
    pub fn tracked_file(&self) -> &str {
        &self.tracked_file
    }

    /// Returns the search page size.
    pub fn page_size(&self) -> u8 {
        self.page_size
    }

    /// Returns the fetch concurrency.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Returns the per-file failure policy.
    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }
}
