//! Error types shared by the core modules

use serde::Serialize;

use crate::markers::Marker;

/// A required piece of authored content that a transform could not find
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentField {
    /// Segment after the first `<!-- summary -->` marker
    Summary,
    /// Segment after the second `<!-- summary -->` marker
    SummaryBody,
    /// Segment after the first `<!-- banner -->` marker
    Banner,
    /// Segment after the second `<!-- banner -->` marker
    BannerBody,
    /// Absolute URL inside the banner segment
    BannerUrl,
    /// First issue label (worklog year and color)
    Label,
    /// Leading base-10 month number in the title
    Month,
}

impl std::fmt::Display for ContentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentField::Summary => write!(f, "{} marker", Marker::Summary.literal()),
            ContentField::SummaryBody => write!(f, "closing {} marker", Marker::Summary.literal()),
            ContentField::Banner => write!(f, "{} marker", Marker::Banner.literal()),
            ContentField::BannerBody => write!(f, "closing {} marker", Marker::Banner.literal()),
            ContentField::BannerUrl => f.write_str("banner URL"),
            ContentField::Label => f.write_str("first label"),
            ContentField::Month => f.write_str("month number in title"),
        }
    }
}

/// Errors raised while deriving presentation fields from an issue
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Malformed content in issue {issue_id}: missing {field}")]
    MalformedContent { issue_id: u64, field: ContentField },
}

impl TransformError {
    pub fn malformed(issue_id: u64, field: ContentField) -> Self {
        TransformError::MalformedContent { issue_id, field }
    }
}

/// Programmer errors: unknown category keys and invalid page parameters
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Page must be at least 1, got {0}")]
    InvalidPage(u32),

    #[error("Page size must be at least 1, got {0}")]
    InvalidPageSize(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_content_message_names_issue_and_field() {
        let err = TransformError::malformed(42, ContentField::Banner);
        assert_eq!(
            err.to_string(),
            "Malformed content in issue 42: missing <!-- banner --> marker"
        );
    }

    #[test]
    fn test_unknown_category_message() {
        let err = ConfigurationError::UnknownCategory("news".to_string());
        assert_eq!(err.to_string(), "Unknown category: news");
    }
}
