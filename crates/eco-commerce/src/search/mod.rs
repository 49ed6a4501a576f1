//! Search module.
//!
//! Contains the browse query, the derivation pipeline and facet counts.

mod facets;
mod pipeline;
mod query;

pub use facets::category_counts;
pub use pipeline::{derive, filter_by_category, sort_products};
pub use query::{BrowseQuery, SortKey};
