//! Tracked file discovery using GitHub Code Search API.
//!
//! Finds every copy of the tracked configuration file owned by a user or
//! organization, paging through the search results.

mod error;
mod file_match;

pub use error::DiscoveryError;
pub use file_match::FileMatch;

use crate::host::{CodeHost, CodeItem};
use crate::rate_limit::{ensure_search_rate_limit, Pacer};
use std::collections::HashSet;
use tracing::{debug, info, info_span, warn, Instrument};

/// Maximum results from GitHub Code Search API.
pub const MAX_SEARCH_RESULTS: usize = 1000;

/// Results per page for code search.
pub const RESULTS_PER_PAGE: u8 = 100;

/// Finds all tracked files named `file_name` owned by `owner_login`.
///
/// Pages are requested one at a time, each gated by `pacer`, until a page
/// comes back empty or shorter than `page_size`.
///
/// # Returns
///
/// Matches in discovery order, deduplicated by owner, repository, path and
/// blob hash.
///
/// # Errors
///
/// Returns [`DiscoveryError`] if any page fails or carries a malformed item.
/// No partial results are returned.
pub async fn search_tracked_files<H, P>(
    host: &H,
    pacer: &P,
    owner_login: &str,
    file_name: &str,
    page_size: u8,
) -> Result<Vec<FileMatch>, DiscoveryError>
where
    H: CodeHost,
    P: Pacer,
{
    let span = info_span!("discover", owner = %owner_login, file = %file_name);

    async {
        info!("Starting tracked file discovery");

        ensure_search_rate_limit(host)
            .await
            .map_err(DiscoveryError::RateLimitCheck)?;

        let query = build_search_query(file_name, owner_login);
        debug!(query = %query, page_size, "Executing code search");

        let results = execute_code_search(host, pacer, &query, page_size).await?;
        let matches = deduplicate_matches(results);

        info!(count = matches.len(), "Discovery complete");
        for file in &matches {
            debug!(repo = %file.full_name(), path = %file.path, sha = %file.blob_hash, "Found tracked file");
        }
        Ok(matches)
    }
    .instrument(span)
    .await
}

/// Builds a GitHub code search query.
///
/// Format: `filename:{file_name} user:{owner_login}`
fn build_search_query(file_name: &str, owner_login: &str) -> String {
    format!("filename:{} user:{}", file_name, owner_login)
}

/// Executes the code search with pagination.
async fn execute_code_search<H, P>(
    host: &H,
    pacer: &P,
    query: &str,
    page_size: u8,
) -> Result<Vec<FileMatch>, DiscoveryError>
where
    H: CodeHost,
    P: Pacer,
{
    let mut all_results = Vec::new();
    let mut page = 1u32;

    loop {
        pacer.wait().await;

        debug!(page, "Fetching search page");
        let items = host.search_code(query, page, page_size).await?;
        let received = items.len();

        if received == 0 {
            debug!(page, "No more items found");
            break;
        }

        all_results.extend(extract_page_results(page, items)?);
        debug!(
            page,
            received,
            total = all_results.len(),
            "Collected search results"
        );

        if received < usize::from(page_size) {
            debug!(page, "Short page, assuming no more pages");
            break;
        }

        if all_results.len() >= MAX_SEARCH_RESULTS {
            warn!(
                max = MAX_SEARCH_RESULTS,
                "Reached maximum search results limit"
            );
            break;
        }

        page += 1;
    }

    Ok(all_results)
}

/// Maps one page of search items into matches.
fn extract_page_results(page: u32, items: Vec<CodeItem>) -> Result<Vec<FileMatch>, DiscoveryError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let owner_login = item
                .repository
                .owner_login
                .ok_or(DiscoveryError::MalformedItem {
                    page,
                    index,
                    field: "repository.owner.login",
                })?;

            Ok(FileMatch {
                repository_name: item.repository.name,
                owner_login,
                path: item.path,
                blob_hash: item.sha,
                repository_api_url: item.repository.url,
            })
        })
        .collect()
}

/// Drops repeated matches, keeping the first occurrence.
fn deduplicate_matches(results: Vec<FileMatch>) -> Vec<FileMatch> {
    let mut seen = HashSet::new();
    let mut matches = Vec::new();

    for result in results {
        let key = (
            result.owner_login.clone(),
            result.repository_name.clone(),
            result.path.clone(),
            result.blob_hash.clone(),
        );
        if seen.insert(key) {
            matches.push(result);
        }
    }

    matches
}
