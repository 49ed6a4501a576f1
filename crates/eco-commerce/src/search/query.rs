//! Browse query: category filter plus sort key.

use serde::{Deserialize, Serialize};

use crate::catalog::CategoryFilter;

/// Sort key for the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Highest rated first; unrated products count as 0.
    #[default]
    Rating,
    /// Highest eco score first.
    Sustainability,
    /// Fixture order.
    Unsorted,
}

impl SortKey {
    /// Sort keys offered in the sort menu.
    pub const MENU: [SortKey; 2] = [SortKey::Rating, SortKey::Sustainability];

    /// Any value other than "rating" or "sustainability" leaves the order
    /// untouched.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "rating" => SortKey::Rating,
            "sustainability" => SortKey::Sustainability,
            _ => SortKey::Unsorted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Sustainability => "sustainability",
            SortKey::Unsorted => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Rating => "Sort by Rating",
            SortKey::Sustainability => "Sort by Eco Score",
            SortKey::Unsorted => "Unsorted",
        }
    }
}

/// Category filter and sort key selected by the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BrowseQuery {
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl BrowseQuery {
    pub fn new(category: CategoryFilter, sort: SortKey) -> Self {
        Self { category, sort }
    }

    /// Build a query from raw query-string values.
    ///
    /// A missing category means all categories and a missing sort means
    /// rating. Unknown categories fall back to all.
    pub fn from_params(category: Option<&str>, sort: Option<&str>) -> Self {
        let category = match category {
            None => CategoryFilter::All,
            Some(raw) => CategoryFilter::from_str(raw).unwrap_or_else(|| {
                tracing::debug!(category = raw, "unknown category filter, showing all");
                CategoryFilter::All
            }),
        };

        let sort = match sort {
            None => SortKey::Rating,
            Some(raw) => {
                let key = SortKey::parse(raw);
                if key == SortKey::Unsorted {
                    tracing::debug!(sort = raw, "unrecognized sort key, keeping fixture order");
                }
                key
            }
        };

        Self { category, sort }
    }

    /// Cache key for the rendered view of this query.
    pub fn cache_key(&self) -> String {
        format!("products:{}:{}", self.category.as_str(), self.sort.as_str())
    }
}
