//! Page header - title, tagline and result count.

use eco_sdk::eco_commerce::search::BrowseQuery;

use super::html_escape;

/// Render the catalog header section.
pub fn render_catalog_header(query: &BrowseQuery, result_count: usize) -> String {
    let result_text = match result_count {
        0 => "No products found".to_string(),
        1 => "Showing 1 product".to_string(),
        n => format!("Showing {} products", n),
    };

    format!(
        r#"<section class="catalog-header" data-section="header">
    <h1><span class="icon" aria-hidden="true">&#9851;</span> Sustainable Products Marketplace</h1>
    <p class="tagline">Discover eco-friendly products that help reduce your carbon footprint and support sustainable living. Every purchase contributes to a greener future.</p>
    <p class="result-count" data-category="{}">{} in {}</p>
</section>"#,
        query.category.as_str(),
        result_text,
        html_escape(query.category.display_name()),
    )
}
