//! Sentinel HTML comment markers used to lay out authored issue bodies
//!
//! Authors structure an issue body with literal comments:
//!
//! ```text
//! intro
//! <!-- summary -->
//! summary shown in listings
//! <!-- summary -->
//! <!-- banner -->
//! ![banner](https://cdn.example.com/banner.jpg?w/750)
//! <!-- banner -->
//! article body
//! ```
//!
//! Matching ignores case and whitespace inside the comment.

use regex::Regex;
use std::sync::LazyLock;

static SUMMARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!--\s*summary\s*-->").unwrap());

static BANNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!--\s*banner\s*-->").unwrap());

static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"https?://[^"'\\\s<>]+"#).unwrap());

static THUMBNAIL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(750|1024\*1024)$").unwrap());

/// A named sentinel comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Summary,
    Banner,
}

impl Marker {
    fn pattern(&self) -> &'static Regex {
        match self {
            Marker::Summary => &*SUMMARY,
            Marker::Banner => &*BANNER,
        }
    }

    /// Canonical spelling of the marker
    pub fn literal(&self) -> &'static str {
        match self {
            Marker::Summary => "<!-- summary -->",
            Marker::Banner => "<!-- banner -->",
        }
    }
}

/// Split `html` on every occurrence of `marker`
///
/// Segment 0 is the text before the first marker; segment `n` the text
/// following the `n`-th marker. A document without the marker yields a single
/// segment.
pub fn split(html: &str, marker: Marker) -> Vec<&str> {
    marker.pattern().split(html).collect()
}

/// Segment `index` of `html` split on `marker`, if the marker occurs often enough
pub fn segment(html: &str, marker: Marker, index: usize) -> Option<&str> {
    marker.pattern().split(html).nth(index)
}

/// First absolute `http(s)` URL in `html`, stopping at quotes, backslashes,
/// whitespace and angle brackets
pub fn first_url(html: &str) -> Option<&str> {
    URL.find(html).map(|m| m.as_str())
}

/// Thumbnail variant of a banner image URL
///
/// A trailing `750` or `1024*1024` size token becomes `256`; other URLs are
/// returned unchanged.
pub fn thumbnail_url(banner_url: &str) -> String {
    THUMBNAIL_SUFFIX.replace(banner_url, "256").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_summary() {
        let parts = split("a<!-- summary -->b<!-- summary -->c", Marker::Summary);
        assert_eq!(parts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_is_case_and_whitespace_insensitive() {
        let parts = split("a<!--Summary-->b<!--   SUMMARY\n -->c", Marker::Summary);
        assert_eq!(parts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_without_marker_is_single_segment() {
        assert_eq!(split("plain", Marker::Banner), vec!["plain"]);
    }

    #[test]
    fn test_segment_out_of_range() {
        assert_eq!(segment("a<!-- banner -->b", Marker::Banner, 1), Some("b"));
        assert_eq!(segment("a<!-- banner -->b", Marker::Banner, 2), None);
    }

    #[test]
    fn test_markers_do_not_cross_match() {
        assert_eq!(split("a<!-- banner -->b", Marker::Summary).len(), 1);
    }

    #[test]
    fn test_first_url_stops_at_quote() {
        let html = r#"<p><img src="https://cdn.example.com/a.jpg?w/750" alt="x" /></p>"#;
        assert_eq!(first_url(html), Some("https://cdn.example.com/a.jpg?w/750"));
    }

    #[test]
    fn test_first_url_stops_at_backslash() {
        assert_eq!(
            first_url(r"url(http://cdn.example.com/b.png\)"),
            Some("http://cdn.example.com/b.png")
        );
    }

    #[test]
    fn test_first_url_none() {
        assert_eq!(first_url("<p>no image here</p>"), None);
    }

    #[test]
    fn test_thumbnail_replaces_750() {
        assert_eq!(
            thumbnail_url("https://cdn.example.com/a.jpg?imageView2/2/w/750"),
            "https://cdn.example.com/a.jpg?imageView2/2/w/256"
        );
    }

    #[test]
    fn test_thumbnail_replaces_1024_square() {
        assert_eq!(
            thumbnail_url("https://cdn.example.com/a.jpg?size=1024*1024"),
            "https://cdn.example.com/a.jpg?size=256"
        );
    }

    #[test]
    fn test_thumbnail_only_replaces_trailing_token() {
        assert_eq!(
            thumbnail_url("https://cdn.example.com/750/a.jpg"),
            "https://cdn.example.com/750/a.jpg"
        );
    }
}
