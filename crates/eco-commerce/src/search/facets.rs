//! Facet counts for the category filter bar.

use std::collections::BTreeMap;

use crate::catalog::{CatalogCategory, DecoratedProduct};

/// Number of products in each category. Every category is present, with a
/// zero count when empty.
pub fn category_counts(products: &[DecoratedProduct]) -> BTreeMap<CatalogCategory, usize> {
    let mut counts: BTreeMap<CatalogCategory, usize> =
        CatalogCategory::ALL.into_iter().map(|c| (c, 0)).collect();
    for product in products {
        *counts.entry(product.category()).or_insert(0) += 1;
    }
    counts
}
