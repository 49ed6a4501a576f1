//! Render a page to HTML without a Spin host.

use std::convert::Infallible;

use anyhow::{anyhow, Context as _, Result};
use eco_commerce::MarketplaceConfig;
use eco_core::{Method, RequestContext};
use eco_observability::StructuredLogger;
use eco_streaming::{collect_html, StreamingSink};

use super::{RenderArgs, RenderPage};
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let html = render_page(&args.page, &ctx.config).await?;

    match args.out {
        Some(ref out) => {
            let path = ctx.resolve_path(out);
            std::fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ctx.output.success(&format!(
                "Wrote {} ({} bytes)",
                path.display(),
                html.len()
            ));
        }
        None => ctx.output.raw(&html),
    }

    Ok(())
}

/// Render `page` against `config` into a string.
pub async fn render_page(page: &RenderPage, config: &MarketplaceConfig) -> Result<String> {
    let request = RequestContext::new(Method::Get, page_path(page));
    let logger = StructuredLogger::new(request.request_id.clone())
        .with_min_level(config.logging.level)
        .with_format(config.logging.format);
    let mut sink: StreamingSink<Vec<Vec<u8>>, Infallible> =
        StreamingSink::new(Vec::new(), request.timing.clone());

    match page {
        RenderPage::Catalog { .. } => {
            let logger = logger.with_workload(sustainable_products::WORKLOAD_NAME);
            let catalog = config.load_catalog().context("Failed to load catalog")?;
            let query = sustainable_products::query_from_request(&request);
            sustainable_products::render_catalog_page(&mut sink, &query, &catalog, &logger)
                .await
                .map_err(|e| anyhow!("catalog page failed: {}", e))?;
        }
        RenderPage::Sell { .. } => {
            let logger = logger.with_workload(sell_products::WORKLOAD_NAME);
            let store = config.build_store();
            let form = sell_products::form_for_get(&request, config);
            let feedback = sell_products::Feedback::default();
            sell_products::render_sell_page(&mut sink, &form, store.as_ref(), &feedback, &logger)
                .await
                .map_err(|e| anyhow!("seller page failed: {}", e))?;
        }
    }

    Ok(collect_html(sink.into_inner()))
}

/// Request path the workload would have served `page` on.
fn page_path(page: &RenderPage) -> String {
    match page {
        RenderPage::Catalog { category, sort } => {
            let mut params = Vec::new();
            if let Some(category) = category {
                params.push(format!("category={}", eco_core::encode_component(category)));
            }
            if let Some(sort) = sort {
                params.push(format!("sort={}", eco_core::encode_component(sort)));
            }
            if params.is_empty() {
                sustainable_products::ROUTE.to_string()
            } else {
                format!("{}?{}", sustainable_products::ROUTE, params.join("&"))
            }
        }
        RenderPage::Sell { open: true } => format!("{}?form=open", sell_products::ROUTE),
        RenderPage::Sell { open: false } => sell_products::ROUTE.to_string(),
    }
}
