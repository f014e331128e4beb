//! Block-markup rendering for release posts.
//!
//! A post is rendered by a fixed pipeline of fragments, each a pure function
//! of the [`PostModel`] and the site's [`PostConfig`]:
//!
//! 1. quick info (poster, title, year, type-specific facts)
//! 2. download heading
//! 3. download links (one button per link, in link order)
//! 4. details (boilerplate, type-specific wording)
//! 5. trailer embed, only for a recognized video host
//!
//! A fragment may opt out by returning `None`; it is then omitted entirely
//! rather than rendered empty. Rendering never mutates the model and the same
//! model always renders to the same bytes.

mod blocks;
pub mod embed;
mod fragments;
pub mod title;

pub use embed::{recognize_video_host, VideoHost};
pub use title::{post_title, TitleAttributes};

use postforge_common::MediaType;
use serde::{Deserialize, Serialize};

use crate::config::PostConfig;
use crate::links::LinkCollection;

/// Optional facts that enrich the quick-info and details fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetails {
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub runtime_minutes: Option<u32>,
    #[serde(default)]
    pub tmdb_id: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
}

/// Everything the renderer needs for one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostModel {
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    pub media_type: MediaType,
    #[serde(default)]
    pub poster_url: String,
    #[serde(default)]
    pub trailer_url: String,
    #[serde(default)]
    pub links: LinkCollection,
    #[serde(default)]
    pub details: PostDetails,
    #[serde(default)]
    pub attributes: TitleAttributes,
}

impl PostModel {
    pub fn new<S: Into<String>>(title: S, media_type: MediaType) -> Self {
        Self {
            title: title.into(),
            year: None,
            media_type,
            poster_url: String::new(),
            trailer_url: String::new(),
            links: LinkCollection::new(),
            details: PostDetails::default(),
            attributes: TitleAttributes::default(),
        }
    }

    /// `Title (Year)`, or just the title when the year is unknown.
    pub fn display_title(&self) -> String {
        match self.year {
            Some(year) => format!("{} ({year})", self.title),
            None => self.title.clone(),
        }
    }
}

/// Inputs shared by every fragment.
pub(crate) struct RenderContext<'a> {
    pub model: &'a PostModel,
    pub style: &'a PostConfig,
}

type Fragment = fn(&RenderContext<'_>) -> Option<String>;

/// Fragment order is part of the output contract.
const PIPELINE: [(&str, Fragment); 5] = [
    ("quick_info", fragments::quick_info),
    ("download_heading", fragments::download_heading),
    ("download_links", fragments::download_links),
    ("details", fragments::details),
    ("trailer", fragments::trailer),
];

/// Renders [`PostModel`]s into the publishing platform's block markup.
#[derive(Debug, Clone, Default)]
pub struct MarkupRenderer {
    style: PostConfig,
}

impl MarkupRenderer {
    pub fn new(style: PostConfig) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &PostConfig {
        &self.style
    }

    /// Render the full post document.
    pub fn render(&self, model: &PostModel) -> String {
        let ctx = RenderContext {
            model,
            style: &self.style,
        };

        let parts: Vec<String> = PIPELINE
            .iter()
            .filter_map(|(name, fragment)| {
                let rendered = fragment(&ctx);
                if rendered.is_none() {
                    tracing::trace!(fragment = name, "fragment omitted");
                }
                rendered
            })
            .collect();

        parts.join("\n\n")
    }
}

/// Render with the default site wording.
pub fn render(model: &PostModel) -> String {
    MarkupRenderer::default().render(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::drive::RawEntry;

    fn series_model() -> PostModel {
        let mut model = PostModel::new("Moving", MediaType::Series);
        model.year = Some(2023);
        model.poster_url = "https://image.tmdb.org/t/p/original/p.jpg".to_string();
        model.links.append(vec![
            classify(&RawEntry::new("E1", "Moving.S01E01.1080p.WEB-DL.mkv")),
            classify(&RawEntry::new("E2", "Moving.S01E02.720p.WEB-DL.mkv")),
        ]);
        model
    }

    #[test]
    fn fragments_appear_in_fixed_order() {
        let mut model = series_model();
        model.trailer_url = "https://www.youtube.com/watch?v=abc".to_string();
        let out = render(&model);

        let quick = out.find("quick_info").unwrap();
        let heading = out.find("dl_head").unwrap();
        let buttons = out.find("wp-block-buttons").unwrap();
        let details = out.find("details-spoiler").unwrap();
        let trailer = out.find("wp:embed").unwrap();
        assert!(quick < heading && heading < buttons && buttons < details && details < trailer);
    }

    #[test]
    fn trailer_omitted_when_empty() {
        let out = render(&series_model());
        assert!(!out.contains("wp:embed"));
        assert!(!out.contains("wp-block-embed"));
    }

    #[test]
    fn trailer_omitted_for_unrecognized_host() {
        let mut model = series_model();
        model.trailer_url = "https://example.com/trailer.mp4".to_string();
        assert!(!render(&model).contains("wp:embed"));
    }

    #[test]
    fn trailer_included_with_literal_url() {
        let mut model = series_model();
        model.trailer_url = "https://www.youtube.com/watch?v=abc".to_string();
        let out = render(&model);
        assert!(out.contains("wp:embed"));
        assert!(out.contains("https://www.youtube.com/watch?v=abc"));
        assert!(out.ends_with("<!-- /wp:embed -->"));
    }

    #[test]
    fn render_is_deterministic_and_pure() {
        let model = series_model();
        let before = model.clone();
        let first = render(&model);
        let second = render(&model);
        assert_eq!(first, second);
        assert_eq!(model, before);
    }

    #[test]
    fn empty_links_render_zero_buttons() {
        let model = PostModel::new("Solo", MediaType::Movie);
        let out = render(&model);
        assert!(out.contains("<div class=\"wp-block-buttons\"></div>"));
        assert!(!out.contains("wp-block-button__link"));
    }

    #[test]
    fn one_button_per_link_in_order() {
        let out = render(&series_model());
        assert_eq!(out.matches("wp-block-button__link").count(), 2);
        let first = out.find("/file/d/E1/download").unwrap();
        let second = out.find("/file/d/E2/download").unwrap();
        assert!(first < second);
    }

    #[test]
    fn display_title_with_and_without_year() {
        let mut model = PostModel::new("Moving", MediaType::Series);
        assert_eq!(model.display_title(), "Moving");
        model.year = Some(2023);
        assert_eq!(model.display_title(), "Moving (2023)");
    }

    #[test]
    fn model_round_trips_through_json() {
        let model = series_model();
        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains("\"mediaType\":\"tv\""));
        let back: PostModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }

    #[test]
    fn minimal_json_model_is_accepted() {
        let model: PostModel =
            serde_json::from_str(r#"{"title":"Solo","mediaType":"movie"}"#).unwrap();
        assert_eq!(model.year, None);
        assert!(model.links.is_empty());
        assert!(render(&model).contains("Solo"));
    }
}
