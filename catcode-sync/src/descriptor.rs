//! Application descriptors declared by tracked configuration files.

mod metadata;

pub use metadata::Metadata;

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// An application entry parsed from a `catcode.yaml` file.
///
/// Only the fields the catalog relies on are typed. Everything else in the
/// document is kept verbatim in [`extra`](Self::extra).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationDescriptor {
    /// Application name.
    pub name: String,

    /// Declared version, kept as text even when written as a number.
    #[serde(
        default,
        deserialize_with = "deserialize_version",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,

    /// Catalog metadata, including provenance annotations.
    #[serde(default)]
    pub metadata: Metadata,

    /// Fields the catalog does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl ApplicationDescriptor {
    /// Returns an annotation value.
    #[must_use]
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.metadata.annotations.get(key).map(String::as_str)
    }
}

fn deserialize_version<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Version {
        Text(String),
        Number(serde_yaml::Number),
    }

    Ok(Option::<Version>::deserialize(deserializer)?.map(|version| match version {
        Version::Text(text) => text,
        Version::Number(number) => number.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_document() {
        let descriptor: ApplicationDescriptor =
            serde_yaml::from_str("name: svc-a\nversion: \"1.0\"\n").unwrap();

        assert_eq!(descriptor.name, "svc-a");
        assert_eq!(descriptor.version.as_deref(), Some("1.0"));
        assert!(descriptor.metadata.annotations.is_empty());
        assert!(descriptor.extra.is_empty());
    }

    #[test]
    fn numeric_version_is_kept_as_text() {
        let descriptor: ApplicationDescriptor =
            serde_yaml::from_str("name: svc-a\nversion: 2\n").unwrap();

        assert_eq!(descriptor.version.as_deref(), Some("2"));
    }

    #[test]
    fn preserves_unknown_fields() {
        let descriptor: ApplicationDescriptor = serde_yaml::from_str(
            "name: svc-a\nowner: team-payments\nmetadata:\n  labels:\n    tier: backend\n  title: Service A\n",
        )
        .unwrap();

        assert_eq!(
            descriptor.extra.get("owner"),
            Some(&serde_yaml::Value::String("team-payments".to_string()))
        );
        assert_eq!(descriptor.metadata.labels.get("tier").map(String::as_str), Some("backend"));
        assert!(descriptor.metadata.extra.contains_key("title"));
    }

    #[test]
    fn serializes_to_json() {
        let descriptor: ApplicationDescriptor =
            serde_yaml::from_str("name: svc-a\nmetadata:\n  annotations:\n    a: b\n").unwrap();

        let json = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(json["name"], "svc-a");
        assert_eq!(json["metadata"]["annotations"]["a"], "b");
        assert!(json.get("version").is_none());
    }
}
