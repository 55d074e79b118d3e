#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod content;
pub mod descriptor;
pub mod discovery;
pub mod events;
pub mod host;
pub mod ingest;
pub mod rate_limit;
pub mod summary;
pub mod sync;

pub use config::{ConfigError, Settings};
pub use content::{decode_content, fetch_content, FetchError};
pub use descriptor::{ApplicationDescriptor, Metadata};
pub use discovery::{search_tracked_files, DiscoveryError, FileMatch};
pub use events::{ChannelBus, DiscoveryEvent, EventBus, EventType, PublishError};
pub use host::{CodeHost, CodeItem, CodeRepository, FileContent, GitHubHost, HostError};
pub use ingest::{ingest, parent_directory, IngestError, ORIGIN_URL_ANNOTATION, PATH_ANNOTATION};
pub use rate_limit::{
    ensure_search_rate_limit, wait_if_needed, MinIntervalPacer, NoPacing, Pacer, RateLimitInfo,
};
pub use summary::{EntryFailure, EntryOutcome, SyncSummary};
pub use sync::{CatalogSynchronizer, EntryError, FailurePolicy, SyncConfig, SyncError};
