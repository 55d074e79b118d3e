//! Rate limit information.

/// Rate limit information for a specific resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,

    /// Unix timestamp when the rate limit resets.
    pub reset: u64,

    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// A budget that never triggers a wait.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            remaining: u32::MAX,
            reset: 0,
            limit: u32::MAX,
        }
    }
}
