//! Attribute classification for hosted media files.
//!
//! Quality, print type and audio are inferred from the file name alone using
//! ordered rule tables. Each category is evaluated independently, the first
//! matching rule wins, and a category with no match falls back to `Unknown`.
//! Classification never fails.
//!
//! | Category   | Rules (in order)                         |
//! |------------|------------------------------------------|
//! | quality    | `2160p`, `1080p`, `720p`                 |
//! | print type | `WEB-DL`, `Blu-ray` / `Bluray`           |
//! | audio      | `DDP5.1` / `AC3` / `Dual`, `English`     |
//!
//! All patterns match case-insensitively.

mod rules;

pub use rules::{
    audio_rules, infer_audio, infer_print_type, infer_quality, print_rules, quality_rules, Rule,
};

use postforge_common::{Audio, PrintType, Quality};
use serde::{Deserialize, Serialize};

use crate::drive::{download_url, RawEntry};

/// A hosted link annotated with attributes inferred from its file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedLink {
    /// Canonical download link synthesized from the file id.
    pub url: String,
    pub quality: Quality,
    pub print_type: PrintType,
    pub audio: Audio,
    pub file_name: String,
    /// Size in bytes, when the metadata API reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Button label override; the quality is shown when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ClassifiedLink {
    /// Return a copy of this link carrying a button label override.
    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Text shown on this link's download button.
    pub fn button_label(&self) -> &str {
        self.label.as_deref().unwrap_or(self.quality.as_str())
    }

    /// One-line summary for listings: `quality • print • audio`.
    pub fn summary(&self) -> String {
        format!("{} • {} • {}", self.quality, self.print_type, self.audio)
    }
}

/// Classify a raw entry into a link.
///
/// ```
/// use postforge::classify::classify;
/// use postforge::drive::RawEntry;
/// use postforge_common::{Audio, PrintType, Quality};
///
/// let link = classify(&RawEntry::new("ABC123", "Show.S01E01.1080p.WEB-DL.DDP5.1.mkv"));
/// assert_eq!(link.quality, Quality::P1080);
/// assert_eq!(link.print_type, PrintType::WebDl);
/// assert_eq!(link.audio, Audio::Dual);
/// assert_eq!(link.url, "https://drive.google.com/file/d/ABC123/download");
/// ```
pub fn classify(entry: &RawEntry) -> ClassifiedLink {
    let name = entry.name.as_str();
    ClassifiedLink {
        url: download_url(&entry.id),
        quality: infer_quality(name),
        print_type: infer_print_type(name),
        audio: infer_audio(name),
        file_name: entry.name.clone(),
        size: entry.size,
        label: None,
    }
}

/// Classify a batch of entries, preserving their order.
pub fn classify_all(entries: &[RawEntry]) -> Vec<ClassifiedLink> {
    entries.iter().map(classify).collect()
}
