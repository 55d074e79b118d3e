//! Pacing between consecutive search requests.

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

/// Interval between search pages when none is configured.
pub const DEFAULT_PAGE_INTERVAL: Duration = Duration::from_secs(1);

/// Decides when the next search request may be issued.
pub trait Pacer {
    /// Resolves once the next request is allowed.
    fn wait(&self) -> impl Future<Output = ()> + Send;
}

/// Issues requests immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    async fn wait(&self) {}
}

/// Keeps consecutive requests at least `interval` apart.
///
/// The first request is never delayed.
#[derive(Debug)]
pub struct MinIntervalPacer {
    interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl MinIntervalPacer {
    /// Creates a gate with the given minimum spacing.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(None),
        }
    }

    /// Returns the configured spacing.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Reserves the next slot and returns when it opens.
    fn reserve(&self, now: Instant) -> Instant {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        let slot = match *last {
            Some(previous) => (previous + self.interval).max(now),
            None => now,
        };
        *last = Some(slot);
        slot
    }
}

impl Default for MinIntervalPacer {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_INTERVAL)
    }
}

impl Pacer for MinIntervalPacer {
    async fn wait(&self) {
        let slot = self.reserve(Instant::now());
        tokio::time::sleep_until(slot).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_request_is_not_delayed() {
        let pacer = MinIntervalPacer::new(Duration::from_secs(1));
        let start = Instant::now();

        pacer.wait().await;

        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn consecutive_requests_are_spaced() {
        let pacer = MinIntervalPacer::new(Duration::from_secs(1));
        let start = Instant::now();

        pacer.wait().await;
        pacer.wait().await;
        pacer.wait().await;

        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_time_counts_towards_interval() {
        let pacer = MinIntervalPacer::new(Duration::from_secs(1));
        let start = Instant::now();

        pacer.wait().await;
        tokio::time::advance(Duration::from_millis(600)).await;
        pacer.wait().await;

        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn no_pacing_returns_immediately() {
        NoPacing.wait().await;
    }
}
