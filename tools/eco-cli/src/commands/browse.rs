//! Catalog browsing.

use anyhow::{Context as _, Result};
use eco_commerce::catalog::DecoratedProduct;
use eco_commerce::search::BrowseQuery;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::eco_badge;

const WIDTHS: [usize; 5] = [40, 10, 8, 12, 5];

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut config = ctx.config.clone();
    if let Some(seed) = args.seed {
        config.catalog.seed = seed;
    }
    if let Some(ref fixture) = args.fixture {
        config.catalog.fixture = Some(ctx.resolve_path(fixture));
    }

    let catalog = config.load_catalog().context("Failed to load catalog")?;
    let query = BrowseQuery::from_params(args.category.as_deref(), args.sort.as_deref());
    let view = catalog.browse(&query);

    tracing::debug!(
        category = query.category.as_str(),
        sort = query.sort.as_str(),
        results = view.len(),
        "catalog derived"
    );

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} · {} ({} of {})",
        query.category.display_name(),
        query.sort.display_name(),
        view.len(),
        catalog.len()
    ));
    ctx.output
        .table_row(&["Title", "Price", "Rating", "Category", "Eco"], &WIDTHS);
    for product in &view {
        let cols = row(product);
        let cols: Vec<&str> = cols.iter().map(String::as_str).collect();
        ctx.output.table_row(&cols, &WIDTHS);
    }

    Ok(())
}

fn row(product: &DecoratedProduct) -> [String; 5] {
    let score = product.score();
    [
        product.record.display_title().to_string(),
        product.record.price.clone(),
        product.record.rating.clone(),
        product.category().display_name().to_string(),
        eco_badge(score.get(), score.tier()),
    ]
}
