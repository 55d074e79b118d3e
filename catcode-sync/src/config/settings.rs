//! Settings deserialization and validation.

use crate::config::ConfigError;
use crate::discovery::RESULTS_PER_PAGE;
use crate::sync::{FailurePolicy, SyncConfig, DEFAULT_TRACKED_FILE};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Pause between search pages when none is configured.
pub const DEFAULT_PAGE_INTERVAL_MS: u64 = 1000;

/// Parsed settings from a TOML file.
///
/// ```toml
/// owner = "acme"
/// tracked-file = "catcode.yaml"
/// page-size = 100
/// page-interval-ms = 1000
/// concurrency = 4
/// failure-policy = "skip"
/// api-base = "https://github.example.com/api/v3/"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    /// User or organization to search.
    #[serde(default)]
    pub owner: Option<String>,

    /// Tracked configuration file name.
    #[serde(default = "default_tracked_file")]
    pub tracked_file: String,

    /// Results requested per search page.
    #[serde(default = "default_page_size")]
    pub page_size: u8,

    /// Minimum milliseconds between search pages.
    #[serde(default = "default_page_interval_ms")]
    pub page_interval_ms: u64,

    /// Maximum files fetched at once.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Handling of per-file failures.
    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// GitHub Enterprise API root.
    #[serde(default)]
    pub api_base: Option<String>,
}

fn default_tracked_file() -> String {
    DEFAULT_TRACKED_FILE.to_string()
}

fn default_page_size() -> u8 {
    RESULTS_PER_PAGE
}

fn default_page_interval_ms() -> u64 {
    DEFAULT_PAGE_INTERVAL_MS
}

fn default_concurrency() -> usize {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            owner: None,
            tracked_file: default_tracked_file(),
            page_size: default_page_size(),
            page_interval_ms: default_page_interval_ms(),
            concurrency: default_concurrency(),
            failure_policy: FailurePolicy::default(),
            api_base: None,
        }
    }
}

impl Settings {
    /// Loads and validates a settings file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, invalid, or fails
    /// validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading settings");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        settings.validate(path)?;
        Ok(settings)
    }

    /// Validates settings values.
    ///
    /// `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first problem.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: path.display().to_string(),
            message,
        };

        if let Some(owner) = &self.owner {
            if owner.trim().is_empty() {
                return Err(invalid("owner must not be empty".to_string()));
            }
        }

        if self.tracked_file.trim().is_empty() {
            return Err(invalid("tracked-file must not be empty".to_string()));
        }

        if self.tracked_file.contains('/') || self.tracked_file.contains('\\') {
            return Err(invalid(
                "tracked-file must not contain path separators".to_string(),
            ));
        }

        if self.page_size == 0 || self.page_size > RESULTS_PER_PAGE {
            return Err(invalid(format!(
                "page-size must be between 1 and {RESULTS_PER_PAGE}, got {}",
                self.page_size
            )));
        }

        if self.concurrency == 0 {
            return Err(invalid("concurrency must be at least 1".to_string()));
        }

        if let Some(base) = &self.api_base {
            if Url::parse(base).is_err() {
                return Err(invalid(format!("api-base is not a valid URL: {base}")));
            }
        }

        Ok(())
    }

    /// Returns the pause between search pages.
    #[must_use]
    pub fn page_interval(&self) -> Duration {
        Duration::from_millis(self.page_interval_ms)
    }

    /// Returns the parsed API root, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if `api-base` is not a URL.
    pub fn api_base_url(&self) -> Result<Option<Url>, ConfigError> {
        self.api_base
            .as_deref()
            .map(|base| {
                Url::parse(base).map_err(|e| ConfigError::ValidationError {
                    path: "api-base".to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()
    }

    /// Builds the synchronizer configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingOwner`] when no owner is set.
    pub fn to_sync_config(&self) -> Result<SyncConfig, ConfigError> {
        let owner = self
            .owner
            .as_deref()
            .filter(|owner| !owner.trim().is_empty())
            .ok_or(ConfigError::MissingOwner)?;

        Ok(SyncConfig::new(owner)
            .with_tracked_file(self.tracked_file.clone())
            .with_page_size(self.page_size)
            .with_concurrency(self.concurrency)
            .with_failure_policy(self.failure_policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_settings(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("catcode-sync.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_full_settings() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(
            &temp,
            r#"
owner = "MatiWall"
tracked-file = "catalog.yaml"
page-size = 50
page-interval-ms = 250
concurrency = 4
failure-policy = "abort"
api-base = "https://github.example.com/api/v3/"
"#,
        );

        let settings = Settings::load(&path).unwrap();

        assert_eq!(settings.owner.as_deref(), Some("MatiWall"));
        assert_eq!(settings.tracked_file, "catalog.yaml");
        assert_eq!(settings.page_interval(), Duration::from_millis(250));
        assert_eq!(settings.failure_policy, FailurePolicy::Abort);

        let config = settings.to_sync_config().unwrap();
        assert_eq!(config.owner_login(), "MatiWall");
        assert_eq!(config.page_size(), 50);
        assert_eq!(config.concurrency(), 4);
        assert_eq!(
            settings.api_base_url().unwrap().unwrap().host_str(),
            Some("github.example.com")
        );
    }

    #[test]
    fn test_defaults_apply() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(&temp, "owner = \"acme\"\n");

        let settings = Settings::load(&path).unwrap();

        assert_eq!(
            settings,
            Settings {
                owner: Some("acme".to_string()),
                ..Settings::default()
            }
        );
        assert_eq!(settings.page_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();

        let result = Settings::load(&temp.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn test_unknown_key_is_toml_error() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(&temp, "owner = \"acme\"\ntoken = \"secret\"\n");

        let result = Settings::load(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn test_validation_tracked_file_with_separator() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(&temp, "tracked-file = \"deploy/catcode.yaml\"\n");

        let result = Settings::load(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_validation_page_size() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(&temp, "page-size = 0\n");

        let result = Settings::load(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_validation_invalid_url() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(&temp, "api-base = \"not-a-url\"\n");

        let result = Settings::load(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_missing_owner() {
        let result = Settings::default().to_sync_config();
        assert!(matches!(result, Err(ConfigError::MissingOwner)));
    }
}
