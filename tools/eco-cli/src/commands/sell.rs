//! Interactive listing entry.

use anyhow::{bail, Context as _, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use eco_commerce::listing::{
    Condition, DraftField, DraftListing, ListingCategory, ListingForm, LISTING_ECO_FEATURES,
};
use eco_commerce::ListingId;

use super::SellArgs;
use crate::commands::listings::print_stats;
use crate::context::Context;

/// Run the sell command.
pub async fn run(args: SellArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.config.build_store();
    let mut form = ctx.config.listing_form();

    if let Some(id) = args.edit {
        let id = ListingId::new(id);
        let record = store
            .get(id)
            .cloned()
            .with_context(|| format!("No listing with id {}", id))?;
        form.edit(&record);
    } else {
        form.open();
    }

    apply_args(form.draft_mut(), &args);

    if !args.yes {
        prompt_missing(&mut form)?;
    }

    let missing = form.draft().missing_fields();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
        bail!("Missing required fields: {}", names.join(", "));
    }

    if !args.yes && !ctx.output.is_json() {
        ctx.output.header("Listing draft");
        ctx.output.kv("Title", &form.draft().title);
        ctx.output.kv("Price", &form.draft().price);
        ctx.output.kv("Category", &form.draft().category);
        ctx.output.kv("Condition", &form.draft().condition);
        ctx.output
            .kv("Eco features", &form.draft().eco_features.join(", "));

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Submit this listing?")
            .default(true)
            .interact()?;
        if !confirmed {
            form.cancel();
            ctx.output.info("Cancelled");
            return Ok(());
        }
    }

    let outcome = form.submit(store.as_mut()).context("Failed to submit listing")?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "outcome": outcome.message(),
            "stats": store.stats(),
        }));
        return Ok(());
    }

    ctx.output.success(&outcome.message());
    print_stats(ctx, &store.stats());
    Ok(())
}

/// Copy the fields given on the command line into the draft.
fn apply_args(draft: &mut DraftListing, args: &SellArgs) {
    let fields = [
        (DraftField::Title, &args.title),
        (DraftField::Price, &args.price),
        (DraftField::Category, &args.category),
        (DraftField::Condition, &args.condition),
        (DraftField::Description, &args.description),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            draft.set_field(field, value.as_str());
        }
    }
    for feature in &args.features {
        if !draft.has_eco_feature(feature) {
            draft.toggle_eco_feature(feature);
        }
    }
    draft.add_images(args.images.iter().map(String::as_str));
}

fn prompt_missing(form: &mut ListingForm) -> Result<()> {
    let theme = ColorfulTheme::default();
    let draft = form.draft_mut();

    for field in [DraftField::Title, DraftField::Price] {
        if draft.field(field).trim().is_empty() {
            let value: String = Input::with_theme(&theme)
                .with_prompt(field.label())
                .interact_text()?;
            draft.set_field(field, value);
        }
    }

    if ListingCategory::from_slug(&draft.category).is_err() {
        let labels: Vec<&str> = ListingCategory::ALL.iter().map(|c| c.label()).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("Category")
            .items(&labels)
            .default(0)
            .interact()?;
        draft.set_field(DraftField::Category, ListingCategory::ALL[choice].slug());
    }

    if Condition::from_slug(&draft.condition).is_err() {
        let labels: Vec<&str> = Condition::ALL.iter().map(|c| c.label()).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("Condition")
            .items(&labels)
            .default(0)
            .interact()?;
        draft.set_field(DraftField::Condition, Condition::ALL[choice].slug());
    }

    if draft.description.trim().is_empty() {
        let value: String = Input::with_theme(&theme)
            .with_prompt(DraftField::Description.label())
            .interact_text()?;
        draft.set_field(DraftField::Description, value);
    }

    if draft.eco_features.is_empty() {
        let chosen = MultiSelect::with_theme(&theme)
            .with_prompt("Sustainability Features")
            .items(&LISTING_ECO_FEATURES)
            .interact()?;
        for index in chosen {
            draft.toggle_eco_feature(LISTING_ECO_FEATURES[index]);
        }
    }

    Ok(())
}
