//! TMDB (The Movie Database) title source.
//!
//! Implements [`TitleSource`] by querying the TMDB v3 REST API.
//!
//! Features:
//! - Details, images and videos fetched concurrently for one title.
//! - Token-bucket rate limiting at 4 requests / second via [`governor`].
//! - Automatic retry on HTTP 429 with `Retry-After` header support (max 3 retries).
//! - 30-second request timeout.

use std::num::NonZeroU32;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use governor::{Quota, RateLimiter};
use postforge_common::MediaType;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::TmdbConfig;
use crate::metadata::provider::{TitleMetadata, TitleSource};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RETRIES: u32 = 3;
const REQUESTS_PER_SECOND: u32 = 4;

// ---------------------------------------------------------------------------
// TMDB API response types (private)
// ---------------------------------------------------------------------------

/// Movie and TV details share one shape; each type fills its own fields.
#[derive(Debug, Deserialize)]
struct TmdbDetail {
    id: u64,
    // movie
    title: Option<String>,
    original_title: Option<String>,
    release_date: Option<String>,
    runtime: Option<u32>,
    imdb_id: Option<String>,
    // tv
    name: Option<String>,
    original_name: Option<String>,
    first_air_date: Option<String>,
    episode_run_time: Option<Vec<u32>>,
    external_ids: Option<TmdbExternalIds>,
    // shared
    original_language: Option<String>,
    genres: Option<Vec<TmdbGenre>>,
}

#[derive(Debug, Deserialize)]
struct TmdbGenre {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TmdbExternalIds {
    imdb_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbImagesResponse {
    posters: Option<Vec<TmdbImage>>,
}

#[derive(Debug, Deserialize)]
struct TmdbImage {
    file_path: String,
}

#[derive(Debug, Deserialize)]
struct TmdbVideosResponse {
    results: Option<Vec<TmdbVideo>>,
}

#[derive(Debug, Deserialize)]
struct TmdbVideo {
    key: String,
    site: String,
    #[serde(rename = "type")]
    video_type: String,
}

// ---------------------------------------------------------------------------
// Provider implementation
// ---------------------------------------------------------------------------

/// TMDB title source.
///
/// # Examples
///
/// ```no_run
/// use postforge::config::TmdbConfig;
/// use postforge::metadata::providers::TmdbProvider;
///
/// let provider = TmdbProvider::new(&TmdbConfig {
///     api_key: "your-api-key".into(),
///     ..TmdbConfig::default()
/// });
/// ```
pub struct TmdbProvider {
    client: reqwest::Client,
    api_key: String,
    language: String,
    base_url: String,
    rate_limiter: governor::RateLimiter<
        governor::state::NotKeyed,
        governor::state::InMemoryState,
        governor::clock::DefaultClock,
    >,
}

impl TmdbProvider {
    /// Create a new TMDB provider from its configuration section.
    pub fn new(config: &TmdbConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout: {}", e);
                reqwest::Client::new()
            });

        let quota = Quota::per_second(
            NonZeroU32::new(REQUESTS_PER_SECOND).expect("rate limit is non-zero"),
        );
        let rate_limiter = RateLimiter::direct(quota);

        Self {
            client,
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            rate_limiter,
        }
    }

    /// Execute a GET request with rate limiting and 429-retry logic.
    async fn get(&self, url: &Url) -> anyhow::Result<reqwest::Response> {
        let path = url.path();
        let mut retries = 0u32;
        loop {
            self.rate_limiter.until_ready().await;

            let resp = self
                .client
                .get(url.clone())
                .send()
                .await
                .with_context(|| format!("TMDB request failed: {path}"))?;

            if resp.status() == StatusCode::TOO_MANY_REQUESTS && retries < MAX_RETRIES {
                retries += 1;
                let wait = resp
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(1);
                warn!(
                    retry = retries,
                    wait_secs = wait,
                    "TMDB returned 429, backing off"
                );
                tokio::time::sleep(Duration::from_secs(wait)).await;
                continue;
            }

            let resp = resp
                .error_for_status()
                .with_context(|| format!("TMDB request returned error: {path}"))?;

            return Ok(resp);
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, what: &str) -> anyhow::Result<T> {
        debug!(path = url.path(), "TMDB get {what}");
        self.get(&url)
            .await?
            .json()
            .await
            .with_context(|| format!("failed to parse TMDB {what} response"))
    }

    /// Build a full API URL with the API key and language query parameters.
    fn url(&self, path: &str, extra_params: &[(&str, &str)]) -> anyhow::Result<Url> {
        let mut params = vec![("language", self.language.as_str())];
        params.extend_from_slice(extra_params);
        self.keyed_url(path, &params)
    }

    /// Build an API URL carrying only the API key and `params`.
    ///
    /// Image listings go through here so posters in every language are
    /// returned.
    fn keyed_url(&self, path: &str, params: &[(&str, &str)]) -> anyhow::Result<Url> {
        let mut query = vec![("api_key", self.api_key.as_str())];
        query.extend_from_slice(params);
        Url::parse_with_params(&format!("{}{path}", self.base_url), &query)
            .with_context(|| format!("invalid TMDB URL for {path}"))
    }
}

/// Parse a `YYYY-MM-DD` date; empty or malformed dates are unknown.
fn parse_date(date: Option<&str>) -> Option<NaiveDate> {
    date.and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
}

/// First YouTube video typed as a trailer.
fn select_trailer(videos: Vec<TmdbVideo>) -> Option<String> {
    videos
        .into_iter()
        .find(|v| v.video_type == "Trailer" && v.site == "YouTube")
        .map(|v| v.key)
}

fn to_metadata(
    detail: TmdbDetail,
    media_type: MediaType,
    images: TmdbImagesResponse,
    videos: TmdbVideosResponse,
) -> TitleMetadata {
    let (title, original_title, date, runtime, imdb_id) = match media_type {
        MediaType::Movie => (
            detail.title,
            detail.original_title,
            detail.release_date,
            detail.runtime,
            detail.imdb_id,
        ),
        MediaType::Series => (
            detail.name,
            detail.original_name,
            detail.first_air_date,
            detail
                .episode_run_time
                .as_ref()
                .and_then(|v| v.first().copied()),
            detail.external_ids.and_then(|ext| ext.imdb_id),
        ),
    };

    TitleMetadata {
        tmdb_id: detail.id.to_string(),
        media_type,
        title: title.unwrap_or_default(),
        original_title,
        release_date: parse_date(date.as_deref()),
        genres: detail
            .genres
            .unwrap_or_default()
            .into_iter()
            .map(|g| g.name)
            .collect(),
        original_language: detail.original_language,
        runtime_minutes: runtime,
        imdb_id: imdb_id.filter(|id| !id.is_empty()),
        poster_paths: images
            .posters
            .unwrap_or_default()
            .into_iter()
            .map(|p| p.file_path)
            .collect(),
        trailer_key: select_trailer(videos.results.unwrap_or_default()),
    }
}

#[async_trait]
impl TitleSource for TmdbProvider {
    fn name(&self) -> &'static str {
        "tmdb"
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn fetch_title(
        &self,
        media_id: &str,
        media_type: MediaType,
    ) -> anyhow::Result<TitleMetadata> {
        let media_id = media_id.trim();
        if media_id.is_empty() {
            anyhow::bail!("No media id provided");
        }

        let kind = media_type.tmdb_path();
        let detail_params: &[(&str, &str)] = match media_type {
            MediaType::Movie => &[],
            MediaType::Series => &[("append_to_response", "external_ids")],
        };

        let detail_url = self.url(&format!("/{kind}/{media_id}"), detail_params)?;
        let images_url = self.keyed_url(&format!("/{kind}/{media_id}/images"), &[])?;
        let videos_url = self.url(&format!("/{kind}/{media_id}/videos"), &[])?;

        let (detail, images, videos) = futures::try_join!(
            self.get_json::<TmdbDetail>(detail_url, "details"),
            self.get_json::<TmdbImagesResponse>(images_url, "images"),
            self.get_json::<TmdbVideosResponse>(videos_url, "videos"),
        )
        .with_context(|| format!("Failed to fetch {kind} {media_id}"))?;

        Ok(to_metadata(detail, media_type, images, videos))
    }
}
