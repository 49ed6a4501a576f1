//! Catalog categories and the category filter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a catalog product is classified under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogCategory {
    Electronics,
    Home,
    Clothing,
    Beauty,
    Sports,
}

impl CatalogCategory {
    /// All categories, in filter-menu order.
    pub const ALL: [CatalogCategory; 5] = [
        CatalogCategory::Electronics,
        CatalogCategory::Home,
        CatalogCategory::Clothing,
        CatalogCategory::Beauty,
        CatalogCategory::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogCategory::Electronics => "electronics",
            CatalogCategory::Home => "home",
            CatalogCategory::Clothing => "clothing",
            CatalogCategory::Beauty => "beauty",
            CatalogCategory::Sports => "sports",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CatalogCategory::Electronics => "Electronics",
            CatalogCategory::Home => "Home & Garden",
            CatalogCategory::Clothing => "Clothing",
            CatalogCategory::Beauty => "Beauty & Care",
            CatalogCategory::Sports => "Sports & Outdoor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for CatalogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category filter selected in the browse page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CatalogCategory),
}

impl CategoryFilter {
    /// Parse "all" or a category slug.
    pub fn from_str(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        CatalogCategory::from_str(s).map(CategoryFilter::Only)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(category) => category.display_name(),
        }
    }

    /// Whether a product in `category` passes this filter.
    pub fn matches(&self, category: CatalogCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}
