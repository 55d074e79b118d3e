//! Rate limiting for code search requests.
//!
//! Two mechanisms keep discovery within the service's search budget: a
//! [`Pacer`] that spaces consecutive page requests, and a proactive check of
//! the search rate limit that waits for the reset when almost exhausted.

mod info;
mod pacer;

pub use info::RateLimitInfo;
pub use pacer::{MinIntervalPacer, NoPacing, Pacer, DEFAULT_PAGE_INTERVAL};

use crate::host::{CodeHost, HostError};
use std::time::Duration;
use tracing::{info, warn};

/// Maximum time to wait for rate limit reset (1 hour).
const MAX_WAIT_SECS: u64 = 3600;

/// Minimum remaining requests before proactively waiting.
const MIN_REMAINING_THRESHOLD: u32 = 5;

/// Returns how long to wait before the next search, if at all.
///
/// `now` is a Unix timestamp in seconds.
#[must_use]
pub fn required_wait(info: &RateLimitInfo, now: u64) -> Option<Duration> {
    if info.remaining >= MIN_REMAINING_THRESHOLD || info.reset <= now {
        return None;
    }

    let wait_secs = info.reset - now;
    if wait_secs > MAX_WAIT_SECS {
        warn!(
            wait_secs,
            max_wait = MAX_WAIT_SECS,
            "Rate limit reset too far in future, capping wait time"
        );
    }

    Some(Duration::from_secs(wait_secs.min(MAX_WAIT_SECS)))
}

/// Waits if the rate limit is low, returning true if we waited.
pub async fn wait_if_needed(info: &RateLimitInfo) -> bool {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let Some(wait) = required_wait(info, now) else {
        return false;
    };

    info!(
        remaining = info.remaining,
        wait_secs = wait.as_secs(),
        "Search rate limit low, waiting for reset"
    );
    tokio::time::sleep(wait).await;
    true
}

/// Ensures sufficient rate limit before making search API calls.
///
/// # Errors
///
/// Returns an error if the rate limit check fails.
pub async fn ensure_search_rate_limit<H: CodeHost>(host: &H) -> Result<(), HostError> {
    let info = host.search_rate_limit().await?;
    wait_if_needed(&info).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_wait_with_remaining_budget() {
        let info = RateLimitInfo {
            remaining: 100,
            reset: 2_000,
            limit: 1000,
        };

        assert_eq!(required_wait(&info, 1_000), None);
    }

    #[test]
    fn no_wait_when_reset_passed() {
        let info = RateLimitInfo {
            remaining: 1,
            reset: 500,
            limit: 30,
        };

        assert_eq!(required_wait(&info, 1_000), None);
    }

    #[test]
    fn waits_until_reset_when_low() {
        let info = RateLimitInfo {
            remaining: 2,
            reset: 1_042,
            limit: 30,
        };

        assert_eq!(required_wait(&info, 1_000), Some(Duration::from_secs(42)));
    }

    #[test]
    fn wait_is_capped() {
        let info = RateLimitInfo {
            remaining: 0,
            reset: 1_000 + MAX_WAIT_SECS * 3,
            limit: 30,
        };

        assert_eq!(
            required_wait(&info, 1_000),
            Some(Duration::from_secs(MAX_WAIT_SECS))
        );
    }

    #[tokio::test]
    async fn wait_if_needed_returns_immediately_with_budget() {
        let info = RateLimitInfo {
            remaining: 100,
            reset: 0,
            limit: 1000,
        };

        assert!(!wait_if_needed(&info).await);
    }
}
