//! Orchestrates discovery, ingestion and catalog notification.

mod config;
mod error;

pub use config::{FailurePolicy, SyncConfig, DEFAULT_TRACKED_FILE};
pub use error::{EntryError, SyncError};

use crate::content::fetch_content;
use crate::discovery::{search_tracked_files, FileMatch};
use crate::events::{DiscoveryEvent, EventBus};
use crate::host::CodeHost;
use crate::ingest::ingest;
use crate::rate_limit::Pacer;
use crate::summary::{EntryOutcome, SyncSummary};
use futures::stream::{self, Stream, StreamExt};
use tracing::{error, info, info_span, warn, Instrument};

/// Builds the catalog state from tracked files on a code host.
#[derive(Debug)]
pub struct CatalogSynchronizer<H, P> {
    host: H,
    pacer: P,
    config: SyncConfig,
}

impl<H, P> CatalogSynchronizer<H, P>
where
    H: CodeHost,
    P: Pacer,
{
    /// Creates a synchronizer over `host`, pacing searches with `pacer`.
    pub fn new(host: H, pacer: P, config: SyncConfig) -> Self {
        Self {
            host,
            pacer,
            config,
        }
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Returns the code host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Finds every tracked file for the configured owner.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Discovery`] if the search fails.
    pub async fn discover(&self) -> Result<Vec<FileMatch>, SyncError> {
        search_tracked_files(
            &self.host,
            &self.pacer,
            self.config.owner_login(),
            self.config.tracked_file(),
            self.config.page_size(),
        )
        .await
        .map_err(|e| {
            error!(
                owner = %self.config.owner_login(),
                error = %e,
                "Failed to discover tracked files"
            );
            SyncError::from(e)
        })
    }

    /// Fetches and ingests `matches`, yielding outcomes in discovery order.
    pub fn process(&self, matches: Vec<FileMatch>) -> impl Stream<Item = EntryOutcome> + '_ {
        stream::iter(matches)
            .map(move |file| self.process_entry(file))
            .buffered(self.config.concurrency())
    }

    /// Runs discovery from scratch and returns the per-file outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Discovery`] if the search fails. Per-file failures
    /// are yielded as [`EntryOutcome::Failed`].
    pub async fn synchronize(&self) -> Result<impl Stream<Item = EntryOutcome> + '_, SyncError> {
        let matches = self.discover().await?;
        Ok(self.process(matches))
    }

    /// Publishes every discovered application to `bus`, one at a time.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] when discovery or publishing fails, or when a
    /// file fails under [`FailurePolicy::Abort`].
    pub async fn on_startup<B: EventBus>(&self, bus: &B) -> Result<SyncSummary, SyncError> {
        let span = info_span!(
            "startup",
            owner = %self.config.owner_login(),
            file = %self.config.tracked_file()
        );

        async {
            let matches = self.discover().await?;
            info!(count = matches.len(), "Found tracked files");

            let mut summary = SyncSummary::new(matches.len());
            let mut outcomes = std::pin::pin!(self.process(matches));

            while let Some(outcome) = outcomes.next().await {
                match outcome {
                    EntryOutcome::Ingested { file, event } => {
                        bus.publish(event).await.map_err(|source| {
                            error!(repo = %file.full_name(), path = %file.path, error = %source, "Failed to publish component");
                            SyncError::Publish {
                                repository: file.full_name(),
                                path: file.path.clone(),
                                source,
                            }
                        })?;
                        summary.record_published();
                    }
                    EntryOutcome::Failed { file, error } => {
                        summary.record_failure(&file, &error);
                        if self.config.failure_policy() == FailurePolicy::Abort
                            && !error.is_missing_content()
                        {
                            error!(repo = %file.full_name(), path = %file.path, "Aborting startup synchronization");
                            return Err(SyncError::Entry {
                                repository: file.full_name(),
                                path: file.path,
                                source: error,
                            });
                        }
                    }
                }
            }

            info!(
                published = summary.components_published,
                skipped = summary.skipped.len(),
                failed = summary.failures.len(),
                "Finished start up processes"
            );
            Ok(summary)
        }
        .instrument(span)
        .await
    }

    async fn process_entry(&self, file: FileMatch) -> EntryOutcome {
        let span = info_span!("entry", repo = %file.full_name(), path = %file.path);

        async move {
            info!("Fetching tracked file");

            let result = match fetch_content(&self.host, &file).await {
                Ok(text) => ingest(&file, &text).map_err(EntryError::from),
                Err(e) => Err(EntryError::from(e)),
            };

            match result {
                Ok(descriptor) => EntryOutcome::Ingested {
                    event: DiscoveryEvent::component_updated(descriptor),
                    file,
                },
                Err(error) => {
                    warn!(error = %error, "Failed to ingest tracked file");
                    EntryOutcome::Failed { file, error }
                }
            }
        }
        .instrument(span)
        .await
    }
}
