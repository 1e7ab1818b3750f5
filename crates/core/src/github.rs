//! Wire types for the GitHub Issues API and page request validation

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigurationError;

/// Page size used when fetching issue comments
pub const COMMENTS_PAGE_SIZE: u32 = 30;

/// Issue label from API
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RawLabel {
    pub name: String,
    pub color: String,
}

/// GitHub issue from API
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RawIssue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub labels: Vec<RawLabel>,
    #[serde(default)]
    pub comments_url: Option<String>,
    #[serde(default)]
    pub comments: Option<u64>,
}

/// GitHub issue comment from API
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RawComment {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// The API sends `"body": null` for issues created without a description.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A validated `page` / `per_page` pair
///
/// Both values are 1-indexed and must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Result<Self, ConfigurationError> {
        if page == 0 {
            return Err(ConfigurationError::InvalidPage(page));
        }
        if per_page == 0 {
            return Err(ConfigurationError::InvalidPageSize(per_page));
        }

        Ok(Self { page, per_page })
    }

    /// Query pairs for the issues listing endpoint
    pub fn issue_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
            ("filter", "created".to_string()),
        ]
    }

    /// Query pairs for the comments endpoint
    pub fn comment_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}
