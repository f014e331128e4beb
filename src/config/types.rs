use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,

    #[serde(default)]
    pub drive: DriveConfig,

    #[serde(default)]
    pub post: PostConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    /// TMDB v3 API key
    #[serde(default)]
    pub api_key: String,

    /// Response language (ISO-639-1 with region, e.g. "en-US")
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_tmdb_base_url")]
    pub base_url: String,

    /// Base for poster URLs; a size segment and the poster path are appended
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
}

fn default_language() -> String {
    "en-US".to_string()
}
fn default_tmdb_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}
fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            language: default_language(),
            base_url: default_tmdb_base_url(),
            image_base_url: default_image_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DriveConfig {
    /// Drive v3 API key
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_drive_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_drive_base_url() -> String {
    "https://www.googleapis.com/drive/v3".to_string()
}
fn default_timeout() -> u64 {
    30
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_drive_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Site-specific wording used by the markup renderer.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PostConfig {
    /// Site name used in the details paragraph
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Audio languages tag shown in headings, e.g. "Hindi-Korean"
    #[serde(default = "default_languages")]
    pub languages: String,

    #[serde(default = "default_subtitles")]
    pub subtitles: String,

    /// Container format fact
    #[serde(default = "default_format")]
    pub format: String,

    /// Season number used for series posts
    #[serde(default = "default_season")]
    pub season: u32,
}

fn default_site_name() -> String {
    "DramaDrip".to_string()
}
fn default_languages() -> String {
    "Hindi-Korean".to_string()
}
fn default_subtitles() -> String {
    "Yes".to_string()
}
fn default_format() -> String {
    "MKV".to_string()
}
fn default_season() -> u32 {
    1
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            languages: default_languages(),
            subtitles: default_subtitles(),
            format: default_format(),
            season: default_season(),
        }
    }
}
