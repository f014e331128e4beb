//! Low-level builders for block comments and escaped text.

/// Wrap `inner` in an opening and closing block comment.
///
/// `attrs` is emitted verbatim after the block name, so it must already be
/// valid JSON.
pub(crate) fn block(name: &str, attrs: Option<&str>, inner: &str) -> String {
    let open = match attrs {
        Some(attrs) => format!("<!-- wp:{name} {attrs} -->"),
        None => format!("<!-- wp:{name} -->"),
    };
    format!("{open}\n{inner}\n<!-- /wp:{name} -->")
}

/// A shortcode block holding raw shortcode lines.
pub(crate) fn shortcode(lines: &[&str]) -> String {
    block("shortcode", None, &lines.join("\n"))
}

/// Escape text for HTML element content and double-quoted attributes.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Encode a string as a JSON string literal for block attributes.
///
/// The result sits inside an HTML comment, so `--`, `<`, `>` and `&` are
/// written as unicode escapes and can never close the comment.
pub(crate) fn json_string(text: &str) -> String {
    serde_json::Value::String(text.to_string())
        .to_string()
        .replace("--", "\\u002d\\u002d")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_with_and_without_attrs() {
        assert_eq!(
            block("heading", None, "<h2>x</h2>"),
            "<!-- wp:heading -->\n<h2>x</h2>\n<!-- /wp:heading -->"
        );
        assert_eq!(
            block("list", Some(r#"{"ordered":false}"#), "<ul></ul>"),
            "<!-- wp:list {\"ordered\":false} -->\n<ul></ul>\n<!-- /wp:list -->"
        );
    }

    #[test]
    fn shortcode_lines() {
        assert_eq!(
            shortcode(&["[a]", "[b]"]),
            "<!-- wp:shortcode -->\n[a]\n[b]\n<!-- /wp:shortcode -->"
        );
    }

    #[test]
    fn escaping() {
        assert_eq!(escape("Tom & Jerry <\"2\">"), "Tom &amp; Jerry &lt;&quot;2&quot;&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn json_strings() {
        assert_eq!(json_string("a\"b"), r#""a\"b""#);
        assert_eq!(
            json_string("https://x.y/?a=1&b=2"),
            r#""https://x.y/?a=1\u0026b=2""#
        );
    }

    #[test]
    fn json_strings_cannot_close_a_comment() {
        let encoded = json_string("https://www.youtube.com/watch?v=a--><script>");
        assert!(!encoded.contains("--"));
        assert!(!encoded.contains('<'));
        assert!(!encoded.contains('>'));
        assert_eq!(
            encoded,
            r#""https://www.youtube.com/watch?v=a\u002d\u002d\u003e\u003cscript\u003e""#
        );
        let decoded: String = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, "https://www.youtube.com/watch?v=a--><script>");
    }
}
