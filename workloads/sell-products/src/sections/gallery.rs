//! Listing gallery - the seller's product cards.

use eco_sdk::eco_commerce::listing::{ListingRecord, ListingStatus};

use super::html_escape;
use crate::actions::SellAction;
use crate::sections::LISTING_FORM_ID;

/// Render the gallery section.
pub fn render_gallery(listings: &[ListingRecord]) -> String {
    let cards: String = listings.iter().map(render_listing_card).collect();

    format!(
        r#"<section class="listing-gallery" data-section="gallery">
    <h2><span class="icon" aria-hidden="true">&#127991;</span> Your Listed Products ({count})</h2>
    <div class="listing-grid">
{cards}
    </div>
</section>"#,
        count = listings.len(),
        cards = cards,
    )
}

/// Render one listing card with its Edit and Remove controls. Both submit
/// the listing form so an open draft is posted along with them.
pub fn render_listing_card(listing: &ListingRecord) -> String {
    let status_class = match listing.status {
        ListingStatus::Active => "status-active",
        ListingStatus::Sold => "status-sold",
    };
    let features: String = listing
        .card_features()
        .iter()
        .map(|f| format!(r#"<span class="eco-feature">{}</span>"#, html_escape(f)))
        .collect();

    format!(
        r#"<article class="listing-card" data-listing-id="{id}">
    <div class="listing-image">
        <img src="{image}" alt="{title}" loading="lazy">
        <span class="status-badge {status_class}">{status}</span>
    </div>
    <div class="listing-info">
        <h3>{title}</h3>
        <p class="listing-price">{price}</p>
        <div class="eco-features">{features}</div>
        <div class="listing-meta">
            <span>&#128065; {views} views</span>
            <span>&#9733; {likes} likes</span>
        </div>
        <div class="listing-actions">
            <button type="submit" form="{form_id}" name="action" value="{edit}" formnovalidate>Edit</button>
            <button type="submit" form="{form_id}" name="action" value="{remove}" formnovalidate class="danger">Remove</button>
        </div>
    </div>
</article>
"#,
        id = listing.id,
        form_id = LISTING_FORM_ID,
        edit = SellAction::Edit(listing.id).form_value(),
        remove = SellAction::Remove(listing.id).form_value(),
        image = html_escape(&listing.image),
        title = html_escape(&listing.title),
        status_class = status_class,
        status = listing.status.as_str(),
        price = html_escape(&listing.price),
        features = features,
        views = listing.views,
        likes = listing.likes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_sdk::eco_commerce::listing::demo_listings;

    #[test]
    fn test_gallery_lists_all() {
        let html = render_gallery(&demo_listings());
        assert!(html.contains("Your Listed Products (4)"));
        assert_eq!(html.matches("<article class=\"listing-card\"").count(), 4);
    }

    #[test]
    fn test_card_shows_first_two_features() {
        let html = render_listing_card(&demo_listings()[0]);
        assert!(html.contains("Biodegradable"));
        assert!(html.contains("Plastic-free"));
        assert!(!html.contains("Sustainable materials"));
        assert!(html.contains("124 views"));
        assert!(html.contains("18 likes"));
    }

    #[test]
    fn test_sold_badge() {
        let html = render_listing_card(&demo_listings()[2]);
        assert!(html.contains(r#"<span class="status-badge status-sold">Sold</span>"#));
        assert!(html.contains(r#"value="remove:3""#));
    }

    #[test]
    fn test_card_buttons_submit_listing_form() {
        let html = render_listing_card(&demo_listings()[1]);
        assert!(!html.contains("<form"));
        assert_eq!(html.matches(r#"form="listing-form""#).count(), 2);
        assert!(html.contains(r#"name="action" value="edit:2" formnovalidate"#));
        assert!(html.contains(r#"name="action" value="remove:2" formnovalidate"#));
    }
}
