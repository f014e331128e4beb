//! Core type definitions for posts, hosted links, and title tags.
//!
//! Link attribute enums serialize to the exact labels shown to operators
//! (`"1080p"`, `"WEB-DL"`, `"Dual"`), so the JSON form of a post reads the
//! same as its rendered markup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Kind of media a post is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MediaType {
    /// A feature film.
    #[default]
    #[serde(rename = "movie")]
    Movie,
    /// A TV series / drama.
    #[serde(rename = "tv", alias = "series")]
    Series,
}

impl MediaType {
    /// Path segment used by the title metadata API (`movie` / `tv`).
    pub fn tmdb_path(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "tv",
        }
    }

    /// Whether this is a series.
    pub fn is_series(&self) -> bool {
        matches!(self, Self::Series)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::Series => write!(f, "tv"),
        }
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "movie" | "movies" | "film" => Ok(Self::Movie),
            "tv" | "series" | "show" | "drama" => Ok(Self::Series),
            other => Err(Error::invalid_input(format!("unknown media type: {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Link attributes
// ---------------------------------------------------------------------------

/// Video quality inferred from a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "2160p")]
    P2160,
    #[serde(rename = "1080p")]
    P1080,
    #[serde(rename = "720p")]
    P720,
    #[default]
    Unknown,
}

impl Quality {
    /// Vertical resolution in lines, `None` for [`Quality::Unknown`].
    pub fn height(&self) -> Option<u32> {
        match self {
            Self::P2160 => Some(2160),
            Self::P1080 => Some(1080),
            Self::P720 => Some(720),
            Self::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P2160 => "2160p",
            Self::P1080 => "1080p",
            Self::P720 => "720p",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Print (source) type inferred from a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PrintType {
    #[serde(rename = "WEB-DL")]
    WebDl,
    #[serde(rename = "Blu-ray")]
    BluRay,
    #[default]
    Unknown,
}

impl PrintType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebDl => "WEB-DL",
            Self::BluRay => "Blu-ray",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PrintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audio layout inferred from a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Audio {
    Dual,
    English,
    #[default]
    Unknown,
}

impl Audio {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dual => "Dual",
            Self::English => "English",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Audio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Title generator tags
// ---------------------------------------------------------------------------

/// Resolution tag selected for the post title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "2160p")]
    P2160,
    #[serde(rename = "1080p")]
    P1080,
    #[serde(rename = "720p")]
    P720,
}

impl Resolution {
    pub const ALL: [Resolution; 3] = [Self::P2160, Self::P1080, Self::P720];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P2160 => "2160p",
            Self::P1080 => "1080p",
            Self::P720 => "720p",
        }
    }
}

/// Codec tag selected for the post title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Codec {
    #[serde(rename = "x264")]
    X264,
    #[serde(rename = "HEVC")]
    Hevc,
}

impl Codec {
    pub const ALL: [Codec; 2] = [Self::X264, Self::Hevc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X264 => "x264",
            Self::Hevc => "HEVC",
        }
    }
}

/// Extra tags; any number may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Extra {
    #[serde(rename = "REMUX")]
    Remux,
    #[serde(rename = "HDR")]
    Hdr,
    #[serde(rename = "DV")]
    Dv,
    #[serde(rename = "ATMOS")]
    Atmos,
}

impl Extra {
    pub const ALL: [Extra; 4] = [Self::Remux, Self::Hdr, Self::Dv, Self::Atmos];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remux => "REMUX",
            Self::Hdr => "HDR",
            Self::Dv => "DV",
            Self::Atmos => "ATMOS",
        }
    }
}

macro_rules! impl_tag_parse {
    ($($ty:ident => $what:literal),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = Error;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::ALL
                        .iter()
                        .copied()
                        .find(|tag| tag.as_str().eq_ignore_ascii_case(s))
                        .ok_or_else(|| Error::invalid_input(format!("unknown {}: {s}", $what)))
                }
            }
        )*
    };
}

impl_tag_parse!(Resolution => "resolution", Codec => "codec", Extra => "extra");

// ---------------------------------------------------------------------------
// Resource references
// ---------------------------------------------------------------------------

/// Whether a hosted link points at a single file or a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    File,
    Folder,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Folder => write!(f, "folder"),
        }
    }
}

/// Typed handle extracted from a hosting URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceReference {
    pub kind: ResourceKind,
    pub id: String,
}

impl ResourceReference {
    pub fn file<S: Into<String>>(id: S) -> Self {
        Self {
            kind: ResourceKind::File,
            id: id.into(),
        }
    }

    pub fn folder<S: Into<String>>(id: S) -> Self {
        Self {
            kind: ResourceKind::Folder,
            id: id.into(),
        }
    }
}

impl fmt::Display for ResourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}
