//! Page header and the "List New Product" control.

use eco_sdk::eco_commerce::listing::ListingForm;

use super::html_escape;
use crate::actions::Feedback;
use crate::sections::LISTING_FORM_ID;

/// Render the seller header section.
pub fn render_sell_header() -> String {
    r#"<section class="sell-header" data-section="header">
    <h1><span class="icon" aria-hidden="true">&#128230;</span> Sell Your Sustainable Products</h1>
    <p class="tagline">Turn your eco-friendly items into income while helping others live sustainably. List your products and join our green marketplace community.</p>
</section>"#
        .to_string()
}

/// Render the toggle button and any notice from the last action.
///
/// The button submits the listing form so the draft survives the round trip.
pub fn render_toggle(form: &ListingForm, feedback: &Feedback) -> String {
    let notice = feedback
        .notice
        .as_deref()
        .map(|n| format!(r#"<p class="notice" role="status">{}</p>"#, html_escape(n)))
        .unwrap_or_default();

    format!(
        r#"<section class="list-toggle" data-section="toggle">
    {notice}
    <button type="submit" form="{form_id}" name="action" value="toggle" formnovalidate aria-expanded="{expanded}">+ List New Product</button>
</section>"#,
        notice = notice,
        form_id = LISTING_FORM_ID,
        expanded = form.is_visible(),
    )
}
