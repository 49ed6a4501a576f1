//! Seller dashboard.

use eco_sdk::eco_commerce::listing::SellerStats;

/// Render the seller dashboard section.
pub fn render_seller_stats(stats: &SellerStats) -> String {
    let figures = [
        ("stat-listed", stats.products_listed.to_string(), "Products Listed"),
        ("stat-sold", stats.items_sold.to_string(), "Items Sold"),
        ("stat-views", stats.total_views.to_string(), "Total Views"),
        ("stat-likes", stats.total_likes.to_string(), "Total Likes"),
    ];

    let items: String = figures
        .iter()
        .map(|(class, value, label)| {
            format!(
                r#"<div class="stat {}"><div class="stat-value">{}</div><div class="stat-label">{}</div></div>"#,
                class, value, label
            )
        })
        .collect();

    format!(
        r#"<section class="seller-stats" data-section="stats">
    <h2>Your Seller Dashboard</h2>
    <div class="stats-grid">{}</div>
</section>"#,
        items
    )
}
