//! CLI for catcode-sync.
//!
//! Runs the startup catalog synchronization: discovers every `catcode.yaml`
//! owned by a GitHub user or organization and emits one `COMPONENT_UPDATED`
//! event per application as a JSON line on stdout.

use catcode_sync::{
    CatalogSynchronizer, ConfigError, DiscoveryEvent, EventBus, FailurePolicy, GitHubHost,
    HostError, MinIntervalPacer, PublishError, Settings, SyncError, SyncSummary,
};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// catcode-sync - Publish catcode.yaml applications from GitHub to the catalog.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// GitHub user or organization to search.
    #[arg(long, env = "CATCODE_OWNER")]
    owner: Option<String>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Tracked configuration file name.
    #[arg(long)]
    tracked_file: Option<String>,

    /// Results requested per search page (1-100).
    #[arg(long)]
    page_size: Option<u8>,

    /// Minimum milliseconds between search pages.
    #[arg(long)]
    page_interval_ms: Option<u64>,

    /// Maximum files fetched at once.
    #[arg(long)]
    concurrency: Option<usize>,

    /// Abort on the first file that fails to fetch or parse.
    #[arg(long)]
    fail_fast: bool,

    /// GitHub Enterprise API root (e.g. https://github.example.com/api/v3/).
    #[arg(long)]
    api_base: Option<String>,
}

/// Errors that stop the CLI.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Settings could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The GitHub client could not be built.
    #[error(transparent)]
    Host(#[from] HostError),

    /// Synchronization failed.
    #[error(transparent)]
    Sync(#[from] SyncError),
}

/// Writes each event as a JSON line to stdout.
struct StdoutBus;

impl EventBus for StdoutBus {
    async fn publish(&self, event: DiscoveryEvent) -> Result<(), PublishError> {
        let line =
            serde_json::to_string(&event).map_err(|e| PublishError::Handler(e.to_string()))?;
        let mut stdout = std::io::stdout();
        writeln!(stdout, "{line}").map_err(|e| PublishError::Handler(e.to_string()))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so stdout only carries events.
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Merges the settings file with command line overrides.
fn resolve_settings(args: &Args) -> Result<Settings, ConfigError> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if let Some(owner) = &args.owner {
        settings.owner = Some(owner.clone());
    }
    if let Some(tracked_file) = &args.tracked_file {
        settings.tracked_file = tracked_file.clone();
    }
    if let Some(page_size) = args.page_size {
        settings.page_size = page_size;
    }
    if let Some(page_interval_ms) = args.page_interval_ms {
        settings.page_interval_ms = page_interval_ms;
    }
    if let Some(concurrency) = args.concurrency {
        settings.concurrency = concurrency;
    }
    if args.fail_fast {
        settings.failure_policy = FailurePolicy::Abort;
    }
    if let Some(api_base) = &args.api_base {
        settings.api_base = Some(api_base.clone());
    }

    let origin = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("<command line>"));
    settings.validate(&origin)?;
    Ok(settings)
}

/// Main execution logic.
async fn run(args: Args) -> Result<SyncSummary, CliError> {
    let settings = resolve_settings(&args)?;
    let config = settings.to_sync_config()?;
    let host = GitHubHost::new(args.token, settings.api_base_url()?.as_ref())?;
    let pacer = MinIntervalPacer::new(settings.page_interval());

    let synchronizer = CatalogSynchronizer::new(host, pacer, config);
    Ok(synchronizer.on_startup(&StdoutBus).await?)
}

/// Prints the final run summary.
fn print_summary(summary: &SyncSummary) {
    eprintln!("\nSummary:");
    eprintln!("  Files discovered: {}", summary.files_discovered);
    eprintln!("  Components published: {}", summary.components_published);
    eprintln!("  Skipped (no content): {}", summary.skipped.len());
    eprintln!("  Failed: {}", summary.failures.len());

    for failure in &summary.failures {
        eprintln!(
            "    {} ({}): {}",
            failure.repository, failure.path, failure.error
        );
    }
}
