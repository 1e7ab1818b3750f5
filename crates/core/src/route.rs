//! Route table for the presentation layer

use serde::Serialize;

use crate::category::Category;

/// A resolved route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum Route {
    /// `/`
    Home,
    /// `/article`, `/worklog`, `/study`
    Listing { category: Category },
    /// `/article/:number`, ...
    Detail { category: Category, number: u64 },
}

impl Route {
    /// Resolve a path. Query strings and fragments are ignored, a trailing
    /// slash is tolerated.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            [prefix] => category_for(prefix).map(|category| Route::Listing { category }),
            [prefix, number] => {
                let category = category_for(prefix)?;
                let number = number.parse::<u64>().ok()?;
                Some(Route::Detail { category, number })
            }
            _ => None,
        }
    }

    /// Canonical path of the route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Listing { category } => category.route().to_string(),
            Route::Detail { category, number } => format!("{}/{number}", category.route()),
        }
    }
}

fn category_for(segment: &str) -> Option<Category> {
    Category::ALL
        .into_iter()
        .find(|category| category.route().trim_start_matches('/') == segment)
}
