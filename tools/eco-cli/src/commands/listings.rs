//! Seller listings and dashboard.

use anyhow::Result;
use eco_commerce::listing::{ListingRecord, SellerStats};

use super::ListingsArgs;
use crate::context::Context;
use crate::output::status_badge;

const WIDTHS: [usize; 6] = [4, 44, 10, 6, 6, 8];

/// Run the listings command.
pub async fn run(args: ListingsArgs, ctx: &Context) -> Result<()> {
    let store = ctx.config.build_store();
    let stats = store.stats();
    let shown: Vec<&ListingRecord> = store
        .listings()
        .iter()
        .filter(|l| !args.active || !l.is_sold())
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "listings": shown,
            "stats": stats,
        }));
        return Ok(());
    }

    ctx.output
        .header(&format!("Your Listed Products ({})", shown.len()));
    ctx.output.table_row(
        &["ID", "Title", "Price", "Views", "Likes", "Status"],
        &WIDTHS,
    );
    for listing in shown {
        let id = listing.id.to_string();
        let views = listing.views.to_string();
        let likes = listing.likes.to_string();
        let status = status_badge(listing.status);
        ctx.output.table_row(
            &[&id, &listing.title, &listing.price, &views, &likes, &status],
            &WIDTHS,
        );
    }

    print_stats(ctx, &stats);
    Ok(())
}

pub fn print_stats(ctx: &Context, stats: &SellerStats) {
    ctx.output.header("Your Seller Dashboard");
    ctx.output
        .kv("Products Listed", &stats.products_listed.to_string());
    ctx.output.kv("Items Sold", &stats.items_sold.to_string());
    ctx.output.kv("Total Views", &stats.total_views.to_string());
    ctx.output.kv("Total Likes", &stats.total_likes.to_string());
}
