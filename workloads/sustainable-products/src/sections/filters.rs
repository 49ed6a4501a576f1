//! Filter bar - category select with facet counts and sort select.

use std::collections::BTreeMap;

use eco_sdk::eco_commerce::catalog::{CatalogCategory, CategoryFilter};
use eco_sdk::eco_commerce::search::{BrowseQuery, SortKey};

use super::html_escape;

/// Render the filter bar. `counts` are per-category totals over the whole
/// catalog, not the filtered view.
pub fn render_filter_bar(query: &BrowseQuery, counts: &BTreeMap<CatalogCategory, usize>) -> String {
    let total: usize = counts.values().sum();

    let mut category_options = vec![option(
        CategoryFilter::All.as_str(),
        &format!("{} ({})", CategoryFilter::All.display_name(), total),
        query.category == CategoryFilter::All,
    )];
    category_options.extend(CatalogCategory::ALL.into_iter().map(|category| {
        let count = counts.get(&category).copied().unwrap_or(0);
        option(
            category.as_str(),
            &format!("{} ({})", category.display_name(), count),
            query.category == CategoryFilter::Only(category),
        )
    }));

    let sort_options: String = SortKey::MENU
        .into_iter()
        .map(|key| option(key.as_str(), key.display_name(), query.sort == key))
        .collect();

    format!(
        r#"<section class="filter-bar" data-section="filters">
    <form action="/products" method="GET" class="filter-form">
        <span class="filter-label">Filter by:</span>
        <select name="category" aria-label="Category" onchange="this.form.submit()">
            {}
        </select>
        <select name="sort" aria-label="Sort" onchange="this.form.submit()">
            {}
        </select>
        <noscript><button type="submit">Apply</button></noscript>
    </form>
</section>"#,
        category_options.concat(),
        sort_options,
    )
}

fn option(value: &str, label: &str, selected: bool) -> String {
    let selected = if selected { " selected" } else { "" };
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        html_escape(value),
        selected,
        html_escape(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> BTreeMap<CatalogCategory, usize> {
        CatalogCategory::ALL.into_iter().map(|c| (c, 2)).collect()
    }

    #[test]
    fn test_filter_bar_marks_selection() {
        let query = BrowseQuery::new(CategoryFilter::Only(CatalogCategory::Beauty), SortKey::Sustainability);
        let html = render_filter_bar(&query, &counts());

        assert!(html.contains(r#"<option value="beauty" selected>Beauty &amp; Care (2)</option>"#));
        assert!(html.contains(r#"<option value="sustainability" selected>Sort by Eco Score</option>"#));
        assert!(html.contains(r#"<option value="all">All Categories (10)</option>"#));
    }

    #[test]
    fn test_unsorted_selects_no_sort_option() {
        let query = BrowseQuery::new(CategoryFilter::All, SortKey::Unsorted);
        let html = render_filter_bar(&query, &counts());
        assert!(!html.contains("rating\" selected"));
        assert!(!html.contains("sustainability\" selected"));
    }
}
