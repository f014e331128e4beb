//! Recognition of embeddable video hosts for trailers.

use url::Url;

/// A video host the publishing platform can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoHost {
    YouTube,
    Vimeo,
}

impl VideoHost {
    /// Provider slug used in embed block attributes and class names.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::YouTube => "youtube",
            Self::Vimeo => "vimeo",
        }
    }
}

const HOSTS: [(&str, VideoHost); 3] = [
    ("youtube.com", VideoHost::YouTube),
    ("youtu.be", VideoHost::YouTube),
    ("vimeo.com", VideoHost::Vimeo),
];

/// Identify the video host of a trailer URL.
///
/// Only absolute http(s) URLs whose host is a recognized domain or one of its
/// subdomains qualify; anything else (including blank input) is `None`.
///
/// ```
/// use postforge::markup::{recognize_video_host, VideoHost};
///
/// assert_eq!(
///     recognize_video_host("https://www.youtube.com/watch?v=abc"),
///     Some(VideoHost::YouTube)
/// );
/// assert_eq!(recognize_video_host(""), None);
/// ```
pub fn recognize_video_host(trailer_url: &str) -> Option<VideoHost> {
    let trimmed = trailer_url.trim();
    if trimmed.is_empty() {
        return None;
    }

    let url = Url::parse(trimmed).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    let host = url.host_str()?.to_ascii_lowercase();
    HOSTS.iter().find_map(|(domain, kind)| {
        let subdomain = host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.is_empty() || prefix.ends_with('.'));
        subdomain.then_some(*kind)
    })
}
