//! Poster path to asset URL resolution.
//!
//! Fetching and saving the image itself is left to the caller.

/// Number of posters offered for selection.
pub const MAX_POSTERS: usize = 5;

/// Rendition of a poster image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSize {
    /// Full-resolution asset, used in markup and for downloads.
    Original,
    /// 500px-wide preview.
    W500,
}

impl PosterSize {
    fn segment(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::W500 => "w500",
        }
    }
}

/// Resolve a poster path fragment (e.g. `/abc.jpg`) to an asset URL.
///
/// ```
/// use postforge::metadata::poster::{poster_url, PosterSize};
///
/// assert_eq!(
///     poster_url("https://image.tmdb.org/t/p", "/abc.jpg", PosterSize::Original),
///     "https://image.tmdb.org/t/p/original/abc.jpg"
/// );
/// ```
pub fn poster_url(image_base_url: &str, path: &str, size: PosterSize) -> String {
    let base = image_base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{}/{path}", size.segment())
}
