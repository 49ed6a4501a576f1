//! Product grid - one card per decorated product.

use eco_sdk::eco_commerce::catalog::{DecoratedProduct, StarRating};

use super::html_escape;

/// Render the product grid section.
pub fn render_product_grid(products: &[DecoratedProduct]) -> String {
    if products.is_empty() {
        return r#"<section class="product-grid empty" data-section="grid">
    <p class="empty-state">No products in this category yet. Try another filter.</p>
</section>"#
            .to_string();
    }

    let cards: String = products.iter().map(render_product_card).collect();

    format!(
        r#"<section class="product-grid" data-section="grid">
{}
</section>"#,
        cards
    )
}

/// Render a single product card.
pub fn render_product_card(product: &DecoratedProduct) -> String {
    let score = product.score();
    let features: String = product
        .eco_features()
        .iter()
        .map(|f| format!(r#"<span class="eco-feature">{}</span>"#, html_escape(f)))
        .collect();

    format!(
        r#"<article class="product-card" data-category="{category}">
    <div class="product-image">
        <img src="{image}" alt="Sustainable product" loading="lazy">
        <span class="eco-badge {tier}">&#127807; Eco Score: {score}/5</span>
    </div>
    <div class="product-info">
        <div class="price-row">
            <span class="product-price">{price}</span>
            {rating}
        </div>
        <h3 class="product-title">{title}</h3>
        <div class="eco-features">
            <h4>Sustainability Features:</h4>
            {features}
        </div>
        <a class="shop-link" href="{url}" target="_blank" rel="noopener noreferrer">&#127793; Shop Sustainably</a>
    </div>
</article>
"#,
        category = product.category().as_str(),
        image = html_escape(product.record.display_image()),
        tier = score.tier().css_class(),
        score = score.get(),
        price = html_escape(&product.record.price),
        rating = render_rating(product),
        title = html_escape(product.record.display_title()),
        features = features,
        url = html_escape(&product.record.product_url),
    )
}

fn render_rating(product: &DecoratedProduct) -> String {
    match product.record.stars() {
        None => r#"<span class="no-rating">No Rating</span>"#.to_string(),
        Some(stars) => format!(
            r#"<span class="product-rating">{}<span class="rating-value">{}</span></span>"#,
            render_stars(stars),
            html_escape(&product.record.rating)
        ),
    }
}

fn render_stars(stars: StarRating) -> String {
    let mut html = "<span class=\"star\">&#9733;</span>".repeat(stars.full as usize);
    if stars.half {
        html.push_str("<span class=\"star half\">&#9733;</span>");
    }
    html
}
