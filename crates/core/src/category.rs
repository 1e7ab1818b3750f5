//! Category registry
//!
//! Each content category is backed by its own repository of issues. The
//! registry ties a category key to that repository, its navigation entry and
//! the transform applied to its issues.

use serde::Serialize;

use crate::error::ConfigurationError;

/// Transform applied to a category's issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Summary, banner and thumbnail split out of the body
    Blog,
    /// Year/color from the first label, month from the title
    Worklog,
    /// Whole body rendered as-is
    Study,
}

/// A content category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Blog,
    Worklog,
    Study,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Blog, Category::Worklog, Category::Study];

    /// Resolve a category from its key
    pub fn from_key(key: &str) -> Result<Self, ConfigurationError> {
        Self::ALL
            .into_iter()
            .find(|category| category.key() == key)
            .ok_or_else(|| ConfigurationError::UnknownCategory(key.to_string()))
    }

    /// Store key
    pub fn key(&self) -> &'static str {
        match self {
            Category::Blog => "blog",
            Category::Worklog => "worklog",
            Category::Study => "study",
        }
    }

    /// Repository holding the category's issues
    pub fn repo(&self) -> &'static str {
        match self {
            Category::Blog => "monine.github.io",
            Category::Worklog => "worklog",
            Category::Study => "study",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Blog => "article",
            Category::Worklog => "worklog",
            Category::Study => "study",
        }
    }

    /// Route prefix of the listing view
    pub fn route(&self) -> &'static str {
        match self {
            Category::Blog => "/article",
            Category::Worklog => "/worklog",
            Category::Study => "/study",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Blog => "fa-chrome",
            Category::Worklog => "fa-internet-explorer",
            Category::Study => "fa-firefox",
        }
    }

    /// Issues per page when listing the category
    pub fn page_size(&self) -> u32 {
        match self {
            Category::Blog => 5,
            Category::Worklog => 36,
            Category::Study => 5,
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Category::Blog => Variant::Blog,
            Category::Worklog => Variant::Worklog,
            Category::Study => Variant::Study,
        }
    }

    /// Store keys of every category
    pub fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|category| category.key()).collect()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub name: &'static str,
    pub route: &'static str,
    pub icon: &'static str,
    /// Only active on an exact route match
    pub exact: bool,
    /// `None` for the home entry
    pub category: Option<Category>,
}

/// Navigation entries in display order: every category, then home
pub fn nav_entries() -> Vec<NavEntry> {
    let mut entries: Vec<NavEntry> = Category::ALL
        .iter()
        .map(|category| NavEntry {
            name: category.label(),
            route: category.route(),
            icon: category.icon(),
            exact: false,
            category: Some(*category),
        })
        .collect();

    entries.push(NavEntry {
        name: "about me",
        route: "/",
        icon: "fa-github",
        exact: true,
        category: None,
    });

    entries
}
