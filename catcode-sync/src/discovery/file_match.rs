//! Discovered tracked file identity.

use serde::Serialize;

/// Identity of one tracked configuration file found by code search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileMatch {
    /// Repository name without the owner.
    pub repository_name: String,

    /// Repository owner (user or organization).
    pub owner_login: String,

    /// Path of the file within the repository.
    pub path: String,

    /// Blob hash of the file at discovery time.
    pub blob_hash: String,

    /// API URL of the repository.
    pub repository_api_url: String,
}

impl FileMatch {
    /// Full repository name in "owner/name" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner_login, self.repository_name)
    }
}
