//! Create/edit listing form.

use eco_sdk::eco_commerce::listing::{
    Condition, DraftListing, ListingCategory, ListingForm, LISTING_ECO_FEATURES,
};

use super::html_escape;
use crate::actions::Feedback;

/// Element id of the listing form; other controls submit it via `form=`.
pub const LISTING_FORM_ID: &str = "listing-form";

/// Render the listing form section. The form stays in the document while
/// hidden so its draft is posted with every action.
pub fn render_listing_form(form: &ListingForm, feedback: &Feedback) -> String {
    let draft = form.draft();
    let hidden = if form.is_visible() { "" } else { " hidden" };
    let editing = form.editing().map(|id| id.to_string()).unwrap_or_default();
    let (heading, submit_label) = match form.editing() {
        Some(_) => ("Edit Your Listing", "Save Changes"),
        None => ("Add Your Sustainable Product", "List Product"),
    };

    format!(
        r#"<section class="listing-form-section" data-section="form"{hidden}>
    <h2><span class="icon" aria-hidden="true">&#127807;</span> {heading}</h2>
    {errors}
    <form id="{form_id}" action="/sell" method="POST" enctype="application/x-www-form-urlencoded">
        <input type="hidden" name="visible" value="{visible}">
        <input type="hidden" name="editing" value="{editing}">
        <div class="form-grid">
            <label>Product Title
                <input type="text" name="title" value="{title}" placeholder="e.g., Eco-friendly bamboo smartphone case" required>
            </label>
            <label>Price
                <span class="price-input"><span class="currency">$</span><input type="text" name="price" value="{price}" placeholder="25.99" required></span>
            </label>
            <label>Category
                <select name="category" required>
                    <option value="">Select Category</option>
                    {categories}
                </select>
            </label>
            <label>Condition
                <select name="condition" required>
                    <option value="">Select Condition</option>
                    {conditions}
                </select>
            </label>
        </div>
        <label>Description
            <textarea name="description" rows="4" placeholder="Describe your product's features, benefits, and sustainability aspects..." required>{description}</textarea>
        </label>
        <fieldset class="eco-options">
            <legend>Sustainability Features</legend>
            {features}
        </fieldset>
        <div class="image-upload">
            <p class="upload-label">Product Images</p>
            <p>Click to upload or drag and drop</p>
            <p class="upload-hint">PNG, JPG up to 10MB each</p>
            <input type="file" id="image-upload" multiple accept="image/*">
            <label for="image-upload" class="choose-files">Choose Files</label>
        </div>
        <div class="form-actions">
            <button type="submit" name="action" value="submit" class="primary">{submit_label}</button>
            <button type="submit" name="action" value="cancel" formnovalidate>Cancel</button>
        </div>
    </form>
</section>"#,
        hidden = hidden,
        heading = heading,
        errors = render_errors(feedback),
        form_id = LISTING_FORM_ID,
        visible = form.is_visible(),
        editing = editing,
        title = html_escape(&draft.title),
        price = html_escape(&draft.price),
        categories = category_options(draft),
        conditions = condition_options(draft),
        description = html_escape(&draft.description),
        features = feature_checkboxes(draft),
        submit_label = submit_label,
    )
}

fn render_errors(feedback: &Feedback) -> String {
    if !feedback.has_errors() {
        return String::new();
    }
    let items: String = feedback
        .errors
        .iter()
        .map(|e| format!("<li>{}</li>", html_escape(e)))
        .collect();
    format!(r#"<ul class="form-errors" role="alert">{}</ul>"#, items)
}

fn category_options(draft: &DraftListing) -> String {
    ListingCategory::ALL
        .into_iter()
        .map(|c| select_option(c.slug(), c.label(), draft.category == c.slug()))
        .collect()
}

fn condition_options(draft: &DraftListing) -> String {
    Condition::ALL
        .into_iter()
        .map(|c| select_option(c.slug(), c.label(), draft.condition == c.slug()))
        .collect()
}

fn select_option(value: &str, label: &str, selected: bool) -> String {
    let selected = if selected { " selected" } else { "" };
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        value,
        selected,
        html_escape(label)
    )
}

fn feature_checkboxes(draft: &DraftListing) -> String {
    LISTING_ECO_FEATURES
        .iter()
        .map(|feature| {
            let checked = if draft.has_eco_feature(feature) { " checked" } else { "" };
            format!(
                r#"<label class="eco-option"><input type="checkbox" name="ecoFeatures" value="{0}"{1}> {0}</label>"#,
                html_escape(feature),
                checked
            )
        })
        .collect()
}
