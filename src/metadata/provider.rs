//! Trait definition and types for title metadata sources.
//!
//! A [`TitleSource`] resolves a media id plus its type (movie or series) to
//! the title, release date, posters and trailer used to fill a post. Sources
//! are consulted once per fetch action.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use postforge_common::MediaType;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

/// Everything a post needs to know about a movie or series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleMetadata {
    /// Provider id the metadata was fetched with.
    pub tmdb_id: String,
    /// Type the metadata was fetched as.
    pub media_type: MediaType,
    /// Localised title (movie title or series name).
    pub title: String,
    /// Original-language title, if the provider reports one.
    pub original_title: Option<String>,
    /// Release date for movies, first air date for series.
    pub release_date: Option<NaiveDate>,
    /// Genre labels (e.g. "Drama", "Thriller").
    pub genres: Vec<String>,
    /// ISO-639-1 code of the original language.
    pub original_language: Option<String>,
    /// Movie runtime or typical episode runtime.
    pub runtime_minutes: Option<u32>,
    /// IMDb id (`tt...`), when known.
    pub imdb_id: Option<String>,
    /// Poster path fragments in provider order, best first.
    pub poster_paths: Vec<String>,
    /// Video key of the selected trailer.
    pub trailer_key: Option<String>,
}

impl TitleMetadata {
    /// Release year, when a release date is known.
    pub fn year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }

    /// Watch URL of the selected trailer.
    pub fn trailer_url(&self) -> Option<String> {
        self.trailer_key
            .as_deref()
            .map(|key| format!("https://www.youtube.com/watch?v={key}"))
    }
}

// ---------------------------------------------------------------------------
// Source trait
// ---------------------------------------------------------------------------

/// Async trait implemented by title metadata backends.
#[async_trait]
pub trait TitleSource: Send + Sync {
    /// Short, lowercase identifier for this source (e.g. `"tmdb"`).
    fn name(&self) -> &'static str;

    /// Returns `true` when the source has credentials and can serve requests.
    fn is_available(&self) -> bool;

    /// Fetch title, release date, posters and trailer for `media_id`.
    async fn fetch_title(
        &self,
        media_id: &str,
        media_type: MediaType,
    ) -> anyhow::Result<TitleMetadata>;
}
