//! Extraction of file/folder identifiers from hosting URLs.
//!
//! Shapes are tried in a fixed order and the first match wins. File shapes
//! always come before the folder shape, so a file URL that happens to carry a
//! `/folders/` segment still resolves as a file.

use std::sync::LazyLock;

use postforge_common::{ResourceKind, ResourceReference};
use regex::Regex;

/// Canonical download link for a hosted file id.
const DOWNLOAD_URL_TEMPLATE: &str = "https://drive.google.com/file/d/{id}/download";

struct LinkShape {
    name: &'static str,
    kind: ResourceKind,
    regex: Regex,
}

static LINK_SHAPES: LazyLock<Vec<LinkShape>> = LazyLock::new(|| {
    let shape = |name, kind, pattern: &str| LinkShape {
        name,
        kind,
        regex: Regex::new(pattern).expect("link shape pattern is valid"),
    };
    vec![
        // https://drive.google.com/file/d/<id>/view
        shape("file_path", ResourceKind::File, r"/file/d/([a-zA-Z0-9_-]+)"),
        // https://drive.google.com/open?id=<id>
        shape("id_param", ResourceKind::File, r"[?&]id=([a-zA-Z0-9_-]+)"),
        // https://drive.google.com/uc?id=<id>
        shape("uc_param", ResourceKind::File, r"/uc\?id=([a-zA-Z0-9_-]+)"),
        // https://drive.google.com/drive/folders/<id>
        shape("folder_path", ResourceKind::Folder, r"/folders/([a-zA-Z0-9_-]+)"),
    ]
});

/// Parse a hosting URL into a typed resource reference.
///
/// Returns `None` when the text matches none of the known shapes; malformed
/// input is never an error here.
///
/// ```
/// use postforge::drive::extract;
/// use postforge_common::ResourceReference;
///
/// assert_eq!(
///     extract("https://drive.google.com/file/d/ABC123/view"),
///     Some(ResourceReference::file("ABC123"))
/// );
/// assert_eq!(extract("https://example.com/"), None);
/// ```
pub fn extract(url: &str) -> Option<ResourceReference> {
    let url = url.trim();
    LINK_SHAPES.iter().find_map(|shape| {
        let id = shape.regex.captures(url)?.get(1)?.as_str();
        tracing::trace!(shape = shape.name, id, "matched link shape");
        Some(ResourceReference {
            kind: shape.kind,
            id: id.to_string(),
        })
    })
}

/// Build the canonical download link for a file id.
pub fn download_url(file_id: &str) -> String {
    DOWNLOAD_URL_TEMPLATE.replace("{id}", file_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_path_shape() {
        assert_eq!(
            extract("https://drive.google.com/file/d/1a-B_c9/view?usp=sharing"),
            Some(ResourceReference::file("1a-B_c9"))
        );
    }

    #[test]
    fn id_query_parameter_shape() {
        assert_eq!(
            extract("https://drive.google.com/open?id=XYZ_42"),
            Some(ResourceReference::file("XYZ_42"))
        );
        assert_eq!(
            extract("https://drive.google.com/open?usp=drive_link&id=Q9"),
            Some(ResourceReference::file("Q9"))
        );
    }

    #[test]
    fn uc_shape() {
        assert_eq!(
            extract("https://drive.google.com/uc?id=UC77&export=download"),
            Some(ResourceReference::file("UC77"))
        );
    }

    #[test]
    fn folder_shape() {
        assert_eq!(
            extract("https://drive.google.com/drive/folders/FOLDER-1?usp=sharing"),
            Some(ResourceReference::folder("FOLDER-1"))
        );
    }

    #[test]
    fn file_shapes_win_over_folder_shape() {
        assert_eq!(
            extract("https://drive.google.com/drive/folders/F1/file/d/F2/view"),
            Some(ResourceReference::file("F2"))
        );
        assert_eq!(
            extract("https://drive.google.com/drive/folders/F1?id=F3"),
            Some(ResourceReference::file("F3"))
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            extract("  https://drive.google.com/file/d/T1/view \n"),
            Some(ResourceReference::file("T1"))
        );
    }

    #[test]
    fn unrecognized_input_yields_none() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("not a url"), None);
        assert_eq!(extract("https://example.com/videos/123"), None);
        assert_eq!(extract("https://drive.google.com/file/d/"), None);
    }

    #[test]
    fn download_url_template() {
        assert_eq!(
            download_url("ABC123"),
            "https://drive.google.com/file/d/ABC123/download"
        );
    }
}
