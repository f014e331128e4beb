//! Trait definition and raw entry type for hosted-file metadata lookups.

use async_trait::async_trait;
use postforge_common::{ResourceReference, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// A file or folder entry as reported by the metadata API.
///
/// Entries are ephemeral: they exist only until they are classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "mimeType", default)]
    pub mime_type: Option<String>,
    /// Size in bytes. The Drive API reports this as a decimal string.
    #[serde(default, deserialize_with = "deserialize_size")]
    pub size: Option<u64>,
}

impl RawEntry {
    /// Create an entry with only an id and a name.
    pub fn new<S: Into<String>, N: Into<String>>(id: S, name: N) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mime_type: None,
            size: None,
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}

fn deserialize_size<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Size {
        Text(String),
        Number(u64),
    }

    Ok(match Option::<Size>::deserialize(deserializer)? {
        Some(Size::Number(n)) => Some(n),
        Some(Size::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// Resolves a resource reference to the entries it names.
///
/// A file reference yields exactly one entry; a folder reference yields its
/// direct children in listing order (first page only, no recursion).
/// Implementations perform no retries: any failure is reported as
/// [`Error::Resolution`](postforge_common::Error::Resolution) carrying the
/// reference.
#[async_trait]
pub trait MetadataResolver: Send + Sync {
    async fn resolve(&self, reference: &ResourceReference) -> Result<Vec<RawEntry>>;
}
