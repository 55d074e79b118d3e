//! Wire shapes returned by a code host.

use serde::{Deserialize, Serialize};

/// One item of a code search page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeItem {
    /// Path of the matched file within its repository.
    pub path: String,

    /// Blob hash of the matched file.
    pub sha: String,

    /// Repository containing the file.
    pub repository: CodeRepository,
}

/// Repository block of a search item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRepository {
    /// Repository name without the owner.
    pub name: String,

    /// Owner login. The search API may omit the owner block.
    pub owner_login: Option<String>,

    /// API URL of the repository.
    pub url: String,
}

/// Response of a file contents request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    /// Base64 encoded file body, absent for directories and oversized files.
    pub content: Option<String>,
}
