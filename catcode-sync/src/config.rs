//! Settings file loading.
//!
//! Settings are read from an optional TOML file. Every key has a default, so
//! a run can be configured entirely from the command line.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{Settings, DEFAULT_PAGE_INTERVAL_MS};
