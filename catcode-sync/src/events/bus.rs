//! Event delivery capability.

use super::{DiscoveryEvent, PublishError};
use std::future::Future;
use tokio::sync::mpsc;

/// Destination for catalog notifications.
///
/// `publish` resolves once the handler has accepted the event.
pub trait EventBus {
    /// Delivers one event.
    fn publish(&self, event: DiscoveryEvent)
        -> impl Future<Output = Result<(), PublishError>> + Send;
}

/// Forwards events into a bounded channel for an in-process consumer.
#[derive(Debug, Clone)]
pub struct ChannelBus {
    sender: mpsc::Sender<DiscoveryEvent>,
}

impl ChannelBus {
    /// Creates a bus and the receiving end of its channel.
    #[must_use]
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<DiscoveryEvent>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self { sender }, receiver)
    }
}

impl EventBus for ChannelBus {
    async fn publish(&self, event: DiscoveryEvent) -> Result<(), PublishError> {
        self.sender
            .send(event)
            .await
            .map_err(|_| PublishError::Closed)
    }
}
