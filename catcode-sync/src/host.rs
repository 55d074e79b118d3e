//! Network seam for the code hosting service.
//!
//! The pipeline only talks to the remote service through [`CodeHost`], so the
//! production GitHub client and the in-memory hosts used by tests are
//! interchangeable.

mod error;
mod github;
mod types;

pub use error::HostError;
pub use github::GitHubHost;
pub use types::{CodeItem, CodeRepository, FileContent};

use crate::rate_limit::RateLimitInfo;
use std::future::Future;

/// Remote operations needed to discover and fetch tracked files.
pub trait CodeHost {
    /// Runs one page of a code search.
    ///
    /// `page` is 1-based.
    fn search_code(
        &self,
        query: &str,
        page: u32,
        per_page: u8,
    ) -> impl Future<Output = Result<Vec<CodeItem>, HostError>> + Send;

    /// Retrieves a single file from `owner/repo`.
    fn get_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> impl Future<Output = Result<FileContent, HostError>> + Send;

    /// Returns the current rate limit for the search resource.
    fn search_rate_limit(&self) -> impl Future<Output = Result<RateLimitInfo, HostError>> + Send;
}
