//! Catalog derivation: filter by category, then sort.

use std::cmp::Ordering;

use crate::catalog::{CategoryFilter, DecoratedProduct};
use crate::search::{BrowseQuery, SortKey};

/// Keep products whose category passes `filter`, preserving order.
pub fn filter_by_category(products: &[DecoratedProduct], filter: CategoryFilter) -> Vec<DecoratedProduct> {
    products
        .iter()
        .filter(|p| filter.matches(p.category()))
        .cloned()
        .collect()
}

/// Stable descending sort. Ties keep their relative order.
pub fn sort_products(products: &mut [DecoratedProduct], sort: SortKey) {
    match sort {
        SortKey::Rating => products.sort_by(|a, b| descending(a.record.rating_sort_key(), b.record.rating_sort_key())),
        SortKey::Sustainability => products.sort_by(|a, b| b.score().cmp(&a.score())),
        SortKey::Unsorted => {}
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// The ordered view shown for `query`. Never truncates.
pub fn derive(products: &[DecoratedProduct], query: &BrowseQuery) -> Vec<DecoratedProduct> {
    let mut view = filter_by_category(products, query.category);
    sort_products(&mut view, query.sort);
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogCategory, Decoration, ProductRecord};

    fn product(title: &str, rating: &str, score: u8, category: CatalogCategory) -> DecoratedProduct {
        DecoratedProduct::new(
            ProductRecord::new(title, "$1.00", rating),
            Decoration::new(score, 1, category),
        )
    }

    fn titles(products: &[DecoratedProduct]) -> Vec<&str> {
        products.iter().map(|p| p.record.title.as_str()).collect()
    }

    #[test]
    fn test_negative_zero_ties_with_unrated() {
        let mut products = vec![
            product("unrated", "N/A", 1, CatalogCategory::Home),
            product("zero", "-0", 1, CatalogCategory::Home),
            product("rated", "2.0", 1, CatalogCategory::Home),
        ];
        sort_products(&mut products, SortKey::Rating);
        assert_eq!(titles(&products), vec!["rated", "unrated", "zero"]);

        products.swap(1, 2);
        sort_products(&mut products, SortKey::Rating);
        assert_eq!(titles(&products), vec!["rated", "zero", "unrated"]);
    }

    #[test]
    fn test_rating_sort_puts_unrated_last() {
        let mut products = vec![
            product("a", "4.5", 1, CatalogCategory::Home),
            product("b", "N/A", 1, CatalogCategory::Home),
            product("c", "3.0", 1, CatalogCategory::Home),
        ];
        sort_products(&mut products, SortKey::Rating);
        assert_eq!(titles(&products), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_sustainability_sort_is_stable() {
        let mut products = vec![
            product("a", "1", 3, CatalogCategory::Home),
            product("b", "1", 5, CatalogCategory::Home),
            product("c", "1", 3, CatalogCategory::Home),
            product("d", "1", 5, CatalogCategory::Home),
        ];
        sort_products(&mut products, SortKey::Sustainability);
        assert_eq!(titles(&products), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_unsorted_keeps_order() {
        let mut products = vec![
            product("a", "1.0", 1, CatalogCategory::Home),
            product("b", "5.0", 5, CatalogCategory::Home),
        ];
        sort_products(&mut products, SortKey::Unsorted);
        assert_eq!(titles(&products), vec!["a", "b"]);
    }

    #[test]
    fn test_negative_rating_sorts_below_unrated() {
        let mut products = vec![
            product("neg", "-1", 1, CatalogCategory::Home),
            product("none", "N/A", 1, CatalogCategory::Home),
        ];
        sort_products(&mut products, SortKey::Rating);
        assert_eq!(titles(&products), vec!["none", "neg"]);
    }

    #[test]
    fn test_derive_filters_before_sorting() {
        let products = vec![
            product("lamp", "3.0", 2, CatalogCategory::Electronics),
            product("mat", "4.9", 4, CatalogCategory::Sports),
            product("charger", "4.1", 5, CatalogCategory::Electronics),
        ];
        let query = BrowseQuery::new(CategoryFilter::Only(CatalogCategory::Electronics), SortKey::Rating);
        assert_eq!(titles(&derive(&products, &query)), vec!["charger", "lamp"]);
    }

    #[test]
    fn test_empty_filter_result() {
        let products = vec![product("lamp", "3.0", 2, CatalogCategory::Electronics)];
        let query = BrowseQuery::new(CategoryFilter::Only(CatalogCategory::Beauty), SortKey::Rating);
        assert!(derive(&products, &query).is_empty());
    }
}
