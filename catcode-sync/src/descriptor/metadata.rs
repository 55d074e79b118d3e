//! Descriptor metadata block.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The `metadata` block of an application descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Free-form annotations. Provenance keys are injected during ingestion.
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,

    /// Labels used for catalog filtering.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Metadata fields the catalog does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}
