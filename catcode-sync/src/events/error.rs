//! Event publishing error types.

use thiserror::Error;

/// Errors that can occur while delivering an event.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The consumer is no longer receiving events.
    #[error("Event consumer has shut down")]
    Closed,

    /// The handler rejected the event.
    #[error("Event handler failed: {0}")]
    Handler(String),
}
