//! Parsing, validation and provenance annotation of tracked files.

mod error;

pub use error::IngestError;

use crate::descriptor::ApplicationDescriptor;
use crate::discovery::FileMatch;
use tracing::debug;

/// Annotation holding the API URL of the source repository.
pub const ORIGIN_URL_ANNOTATION: &str = "source.provenance/origin-url";

/// Annotation holding the directory of the tracked file.
pub const PATH_ANNOTATION: &str = "source.provenance/path";

/// Parses `raw_text` into an annotated [`ApplicationDescriptor`].
///
/// The provenance annotations replace any values the document declared.
///
/// # Errors
///
/// Returns [`IngestError::ParseFailure`] for malformed YAML and
/// [`IngestError::SchemaValidationError`] when the document is not an
/// application.
pub fn ingest(file: &FileMatch, raw_text: &str) -> Result<ApplicationDescriptor, IngestError> {
    let schema_error = |message: String| IngestError::SchemaValidationError {
        repository: file.full_name(),
        path: file.path.clone(),
        message,
    };

    let document: serde_yaml::Value =
        serde_yaml::from_str(raw_text).map_err(|source| IngestError::ParseFailure {
            repository: file.full_name(),
            path: file.path.clone(),
            source,
        })?;

    if document.is_null() {
        return Err(schema_error("document is empty".to_string()));
    }

    let mut descriptor: ApplicationDescriptor =
        serde_yaml::from_value(document).map_err(|e| schema_error(e.to_string()))?;

    if descriptor.name.trim().is_empty() {
        return Err(schema_error("name must not be empty".to_string()));
    }

    let annotations = &mut descriptor.metadata.annotations;
    annotations.insert(
        ORIGIN_URL_ANNOTATION.to_string(),
        file.repository_api_url.clone(),
    );
    annotations.insert(PATH_ANNOTATION.to_string(), parent_directory(&file.path));

    debug!(repo = %file.full_name(), name = %descriptor.name, "Ingested application");
    Ok(descriptor)
}

/// Returns the directory part of a repository path.
///
/// Files at the repository root yield `"."`.
#[must_use]
pub fn parent_directory(path: &str) -> String {
    match path.trim_end_matches('/').rsplit_once('/') {
        Some((parent, _)) if !parent.is_empty() => parent.to_string(),
        _ => ".".to_string(),
    }
}
