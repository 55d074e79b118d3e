//! Catalog notifications emitted for discovered applications.

mod bus;
mod error;

pub use bus::{ChannelBus, EventBus};
pub use error::PublishError;

use crate::descriptor::ApplicationDescriptor;
use serde::Serialize;

/// Kind of catalog notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// A component was discovered or changed.
    ComponentUpdated,
}

/// Notification sent to the catalog for one ingested application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveryEvent {
    /// Event kind.
    #[serde(rename = "type")]
    pub kind: EventType,

    /// The ingested application.
    pub body: ApplicationDescriptor,
}

impl DiscoveryEvent {
    /// Wraps a descriptor in a `COMPONENT_UPDATED` event.
    #[must_use]
    pub fn component_updated(body: ApplicationDescriptor) -> Self {
        Self {
            kind: EventType::ComponentUpdated,
            body,
        }
    }
}
