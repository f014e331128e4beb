//! Drive v3 REST client implementing [`MetadataResolver`].
//!
//! One GET per resolution: `files/<id>` for a file, a `files` listing
//! filtered by parent for a folder. Non-success statuses and transport
//! failures both surface as a resolution error naming the reference.

use std::time::Duration;

use async_trait::async_trait;
use postforge_common::{Error, ResourceKind, ResourceReference, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::resolver::{MetadataResolver, RawEntry};
use crate::config::DriveConfig;

const ENTRY_FIELDS: &str = "id,name,size,mimeType";
const LISTING_FIELDS: &str = "files(id,name,mimeType,size)";

#[derive(Debug, Deserialize)]
struct FileListing {
    #[serde(default)]
    files: Vec<RawEntry>,
}

/// Metadata resolver backed by the Drive v3 API.
pub struct DriveClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl DriveClient {
    pub fn new(config: &DriveConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Whether an API key has been configured.
    pub fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Look up a single file's metadata.
    pub async fn lookup_file(&self, file_id: &str) -> Result<RawEntry> {
        let reference = ResourceReference::file(file_id);
        let url = format!("{}/files/{}", self.base_url, file_id);
        debug!(id = file_id, "Drive file lookup");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("fields", ENTRY_FIELDS)])
            .send()
            .await
            .map_err(|e| Error::resolution(reference.clone(), e.to_string()))?;

        let response = checked(response, &reference)?;
        response
            .json::<RawEntry>()
            .await
            .map_err(|e| Error::resolution(reference, format!("invalid file metadata: {e}")))
    }

    /// List the direct children of a folder (first page only).
    pub async fn list_folder(&self, folder_id: &str) -> Result<Vec<RawEntry>> {
        let reference = ResourceReference::folder(folder_id);
        let url = format!("{}/files", self.base_url);
        let query = format!("'{folder_id}' in parents");
        debug!(id = folder_id, "Drive folder listing");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query.as_str()),
                ("fields", LISTING_FIELDS),
            ])
            .send()
            .await
            .map_err(|e| Error::resolution(reference.clone(), e.to_string()))?;

        let response = checked(response, &reference)?;
        let listing = response
            .json::<FileListing>()
            .await
            .map_err(|e| Error::resolution(reference, format!("invalid folder listing: {e}")))?;

        Ok(listing.files)
    }
}

fn checked(response: reqwest::Response, reference: &ResourceReference) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::resolution(
            reference.clone(),
            format!("{} lookup returned HTTP {}", reference.kind, status.as_u16()),
        ))
    }
}

#[async_trait]
impl MetadataResolver for DriveClient {
    async fn resolve(&self, reference: &ResourceReference) -> Result<Vec<RawEntry>> {
        match reference.kind {
            ResourceKind::File => Ok(vec![self.lookup_file(&reference.id).await?]),
            ResourceKind::Folder => self.list_folder(&reference.id).await,
        }
    }
}
