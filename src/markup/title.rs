//! Post title line and the operator-selected tags that feed it.

use postforge_common::{Codec, Extra, Resolution};
use serde::{Deserialize, Serialize};

use super::PostModel;
use crate::config::PostConfig;

/// Tags chosen by the operator for the post title.
///
/// Resolution and codec hold at most one value each. Extras toggle in and
/// out and keep the order in which they were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleAttributes {
    #[serde(default)]
    pub resolution: Option<Resolution>,
    #[serde(default)]
    pub codec: Option<Codec>,
    #[serde(default)]
    pub extras: Vec<Extra>,
}

impl TitleAttributes {
    pub fn select_resolution(&mut self, resolution: Resolution) {
        self.resolution = Some(resolution);
    }

    pub fn select_codec(&mut self, codec: Codec) {
        self.codec = Some(codec);
    }

    /// Add `extra` if absent, remove it if present. Returns whether it is
    /// selected afterwards.
    pub fn toggle_extra(&mut self, extra: Extra) -> bool {
        if let Some(pos) = self.extras.iter().position(|e| *e == extra) {
            self.extras.remove(pos);
            false
        } else {
            self.extras.push(extra);
            true
        }
    }
}

/// Build the one-line post title.
///
/// Segments with nothing to show are skipped, so a bare model still yields a
/// readable line.
pub fn post_title(model: &PostModel, style: &PostConfig) -> String {
    let attrs = &model.attributes;
    let mut parts = vec![format!("Download {}", model.display_title())];

    if model.media_type.is_series() {
        parts.push(format!("(Season {})", style.season));
    }
    parts.push(format!("[{}] Esubs", style.languages));

    let qualities: Vec<&str> = {
        let from_links: Vec<&str> = model.links.qualities().iter().map(|q| q.as_str()).collect();
        if from_links.is_empty() {
            attrs.resolution.iter().map(|r| r.as_str()).collect()
        } else {
            from_links
        }
    };
    if !qualities.is_empty() {
        parts.push(qualities.join(", "));
    }

    let prints: Vec<&str> = model.links.print_types().iter().map(|p| p.as_str()).collect();
    if !prints.is_empty() {
        parts.push(prints.join(" & "));
    }

    if let Some(codec) = attrs.codec {
        parts.push(codec.as_str().to_string());
    }
    parts.extend(attrs.extras.iter().map(|e| e.as_str().to_string()));

    parts.join(" ")
}
