//! Per-post working state.
//!
//! A [`Session`] owns everything an operator edits while assembling one post:
//! the pending link input, the accumulated [`LinkCollection`], the fetched
//! title metadata, the chosen poster and trailer, and the title tags. All
//! mutation goes through `&mut self`, so add-link operations on one session
//! run one at a time and append in the order they were awaited.

use postforge_common::{Error, MediaType, Result};
use tracing::{debug, info, warn};

use crate::classify::classify_all;
use crate::config::{Config, PostConfig};
use crate::drive::{extract, MetadataResolver};
use crate::links::LinkCollection;
use crate::markup::{MarkupRenderer, PostDetails, PostModel, TitleAttributes};
use crate::metadata::{poster_url, PosterSize, TitleMetadata, TitleSource, MAX_POSTERS};

#[derive(Debug, Clone)]
pub struct Session {
    style: PostConfig,
    image_base_url: String,
    media_type: MediaType,
    title: Option<TitleMetadata>,
    selected_poster: usize,
    trailer_url: String,
    links: LinkCollection,
    link_input: String,
    attributes: TitleAttributes,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            style: config.post.clone(),
            image_base_url: config.tmdb.image_base_url.clone(),
            media_type: MediaType::Movie,
            title: None,
            selected_poster: 0,
            trailer_url: String::new(),
            links: LinkCollection::new(),
            link_input: String::new(),
            attributes: TitleAttributes::default(),
        }
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Switch between movie and series.
    ///
    /// A loaded title of the other type no longer describes the post, so it
    /// is dropped together with its posters and trailer.
    pub fn set_media_type(&mut self, media_type: MediaType) {
        if self.title.as_ref().is_some_and(|t| t.media_type != media_type) {
            info!(?media_type, "Media type changed, clearing loaded title");
            self.reset_title();
        }
        self.media_type = media_type;
    }

    fn reset_title(&mut self) {
        self.title = None;
        self.selected_poster = 0;
        self.trailer_url.clear();
    }

    pub fn title(&self) -> Option<&TitleMetadata> {
        self.title.as_ref()
    }

    pub fn links(&self) -> &LinkCollection {
        &self.links
    }

    /// Discard every accumulated link.
    pub fn clear_links(&mut self) {
        self.links.clear();
    }

    pub fn link_input(&self) -> &str {
        &self.link_input
    }

    pub fn set_link_input<S: Into<String>>(&mut self, input: S) {
        self.link_input = input.into();
    }

    pub fn attributes(&self) -> &TitleAttributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut TitleAttributes {
        &mut self.attributes
    }

    pub fn trailer_url(&self) -> &str {
        &self.trailer_url
    }

    pub fn set_trailer_url<S: Into<String>>(&mut self, url: S) {
        self.trailer_url = url.into();
    }

    /// Resolve the pending link input and append its classified entries.
    ///
    /// Blank input fails with [`Error::EmptyInput`] before any lookup. On
    /// success the whole batch is appended and the input is cleared; on any
    /// failure the collection and the input are left untouched. Returns the
    /// number of links added.
    pub async fn add_link(&mut self, resolver: &dyn MetadataResolver) -> Result<usize> {
        let input = self.link_input.trim();
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        let reference = extract(input).ok_or_else(|| Error::parse(input))?;
        debug!(%reference, "Resolving link");

        let entries = resolver.resolve(&reference).await?;
        if entries.is_empty() {
            return Err(Error::resolution(reference, "no files found"));
        }

        let batch = classify_all(&entries);
        let added = batch.len();
        let total = self.links.append(batch);
        self.link_input.clear();

        info!(%reference, added, total, "Added links");
        Ok(added)
    }

    /// Fetch title metadata for `media_id`.
    ///
    /// The first poster and the trailer (if any) are preselected. On failure
    /// the previous title, posters and trailer are cleared before the error
    /// is returned.
    pub async fn load_title(
        &mut self,
        source: &dyn TitleSource,
        media_id: &str,
        media_type: MediaType,
    ) -> anyhow::Result<&TitleMetadata> {
        self.media_type = media_type;

        match source.fetch_title(media_id, media_type).await {
            Ok(metadata) => {
                info!(
                    source = source.name(),
                    title = %metadata.title,
                    posters = metadata.poster_paths.len(),
                    "Loaded title"
                );
                self.selected_poster = 0;
                self.trailer_url = metadata.trailer_url().unwrap_or_default();
                Ok(self.title.insert(metadata))
            }
            Err(e) => {
                warn!(source = source.name(), media_id, "Title fetch failed: {e:#}");
                self.reset_title();
                Err(e)
            }
        }
    }

    /// Poster URLs offered for selection, at most [`MAX_POSTERS`].
    pub fn poster_choices(&self, size: PosterSize) -> Vec<String> {
        self.title
            .iter()
            .flat_map(|t| t.poster_paths.iter().take(MAX_POSTERS))
            .map(|path| poster_url(&self.image_base_url, path, size))
            .collect()
    }

    /// Choose the poster at `index` among [`Session::poster_choices`].
    pub fn select_poster(&mut self, index: usize) -> Result<()> {
        let available = self
            .title
            .as_ref()
            .map_or(0, |t| t.poster_paths.len().min(MAX_POSTERS));
        if index >= available {
            return Err(Error::invalid_input(format!(
                "poster {index} out of range ({available} available)"
            )));
        }
        self.selected_poster = index;
        Ok(())
    }

    /// Full-resolution URL of the chosen poster.
    pub fn selected_poster_url(&self) -> Option<String> {
        let title = self.title.as_ref()?;
        let path = title.poster_paths.get(self.selected_poster)?;
        Some(poster_url(&self.image_base_url, path, PosterSize::Original))
    }

    /// Snapshot of the session as renderer input.
    pub fn post_model(&self) -> PostModel {
        let mut model = PostModel::new(
            self.title.as_ref().map(|t| t.title.clone()).unwrap_or_default(),
            self.media_type,
        );
        model.poster_url = self.selected_poster_url().unwrap_or_default();
        model.trailer_url = self.trailer_url.clone();
        model.links = self.links.clone();
        model.attributes = self.attributes.clone();

        if let Some(title) = &self.title {
            model.year = title.year();
            model.details = PostDetails {
                original_title: title.original_title.clone(),
                genres: title.genres.clone(),
                runtime_minutes: title.runtime_minutes,
                tmdb_id: Some(title.tmdb_id.clone()),
                imdb_id: title.imdb_id.clone(),
            };
        }
        model
    }

    /// Render the current session with its configured site wording.
    pub fn render(&self) -> String {
        MarkupRenderer::new(self.style.clone()).render(&self.post_model())
    }
}
