//! Shared fixtures for integration tests.
//!
//! [`FakeResolver`] stands in for the Drive API in session tests; the config
//! helpers point real clients at a `wiremock` server.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use postforge::config::{Config, DriveConfig, TmdbConfig};
use postforge::drive::{MetadataResolver, RawEntry};
use postforge_common::{Error, ResourceReference, Result};

/// In-memory resolver keyed by reference; unknown references fail.
#[derive(Default)]
pub struct FakeResolver {
    entries: HashMap<ResourceReference, Vec<RawEntry>>,
    calls: AtomicUsize,
}

impl FakeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, reference: ResourceReference, entries: Vec<RawEntry>) -> Self {
        self.entries.insert(reference, entries);
        self
    }

    /// Number of resolve calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataResolver for FakeResolver {
    async fn resolve(&self, reference: &ResourceReference) -> Result<Vec<RawEntry>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entries
            .get(reference)
            .cloned()
            .ok_or_else(|| Error::resolution(reference.clone(), "lookup returned HTTP 404"))
    }
}

/// Three episodes of a series folder, in listing order.
pub fn season_folder() -> Vec<RawEntry> {
    vec![
        RawEntry::new("EP1", "Moving.S01E01.1080p.WEB-DL.DDP5.1.mkv").with_size(1_288_490_189),
        RawEntry::new("EP2", "Moving.S01E02.1080p.WEB-DL.DDP5.1.mkv").with_size(1_181_116_006),
        RawEntry::new("EP3", "Moving.S01E03.720p.WEB-DL.English.mkv"),
    ]
}

pub fn drive_config(base_url: &str) -> DriveConfig {
    DriveConfig {
        api_key: "test-drive-key".to_string(),
        base_url: base_url.to_string(),
        timeout_secs: 5,
    }
}

pub fn tmdb_config(base_url: &str) -> TmdbConfig {
    TmdbConfig {
        api_key: "test-tmdb-key".to_string(),
        base_url: base_url.to_string(),
        ..TmdbConfig::default()
    }
}

pub fn config() -> Config {
    Config::default()
}
