//! Seller listing page.
//!
//! Streams the seller's view of the marketplace:
//! - Header with the "List New Product" toggle
//! - Create/edit listing form, kept in the document while hidden
//! - Gallery of the seller's listings with Edit and Remove controls
//! - Seller dashboard derived from the listings
//!
//! Every action is a form post back to `/sell`; the form state travels with it.

mod actions;
mod sections;
mod styles;

#[cfg(target_arch = "wasm32")]
mod handler;

use eco_sdk::eco_commerce::listing::{ListingForm, ListingStore, SellerStats};
use eco_sdk::eco_commerce::{CommerceError, MarketplaceConfig};
use eco_sdk::eco_core::{FormData, RequestContext, RouteConfig, WorkloadError, WorkloadManifest};
use eco_sdk::eco_observability::StructuredLogger;
use eco_sdk::eco_streaming::{HeadContent, Shell, StreamingSink};
use futures::Sink;

pub use actions::{apply_action, draft_from_form, form_from_post, Feedback, SellAction};
pub use sections::{
    render_gallery, render_listing_card, render_listing_form, render_sell_header,
    render_seller_stats, render_seller_tips, render_toggle, LISTING_FORM_ID,
};

pub const WORKLOAD_NAME: &str = "sell-products";
pub const ROUTE: &str = "/sell";

const EMBEDDED_CONFIG: &str = include_str!("../eco.toml");

/// Routes served by this workload.
pub fn manifest() -> WorkloadManifest {
    WorkloadManifest::new(WORKLOAD_NAME, env!("CARGO_PKG_VERSION"))
        .with_route(RouteConfig::new(ROUTE, "handle_sell").with_methods(vec!["GET", "POST"]))
}

/// Configuration compiled into the workload.
pub fn embedded_config() -> Result<MarketplaceConfig, CommerceError> {
    MarketplaceConfig::from_toml_str(EMBEDDED_CONFIG)
}

/// Embedded configuration, or the defaults plus the reason it was rejected.
pub fn embedded_config_or_default() -> (MarketplaceConfig, Option<CommerceError>) {
    MarketplaceConfig::from_toml_str_or_default(EMBEDDED_CONFIG)
}

/// Listing form for a GET. `?form=open` opens it.
pub fn form_for_get(ctx: &RequestContext, config: &MarketplaceConfig) -> ListingForm {
    let mut form = config.listing_form();
    if ctx.query_param("form") == Some("open") {
        form.open();
    }
    form
}

/// Apply a posted action to the listing form it carries.
pub fn handle_post(
    body: &FormData,
    config: &MarketplaceConfig,
    store: &mut dyn ListingStore,
    logger: &StructuredLogger,
) -> Result<(ListingForm, Feedback), WorkloadError> {
    let action = SellAction::from_form(body)?;
    let mut form = form_from_post(body, config.listings.cancel_policy);
    let feedback = apply_action(action, &mut form, store);

    logger
        .info_builder("seller action")
        .field("action", action.as_str())
        .field_bool("form_visible", form.is_visible())
        .field_i64("errors", feedback.errors.len() as i64)
        .emit();

    Ok((form, feedback))
}

/// Document shell for the seller page.
pub fn create_shell() -> Shell {
    let head = HeadContent::new("Sell Your Sustainable Products")
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta(
            "description",
            "List eco-friendly products on the sustainable marketplace",
        )
        .with_style(styles::SELL_STYLES);

    Shell::new(head).with_body_start(
        r#"<body>
<header class="site-header">
    <a href="/products" class="logo">EcoMarket</a>
    <nav class="header-nav">
        <a href="/products">Shop</a>
        <a href="/sell" aria-current="page">Sell</a>
    </nav>
</header>
<main>
"#,
    )
}

/// Stream the seller page into `sink`.
pub async fn render_sell_page<S, E>(
    sink: &mut StreamingSink<S, E>,
    form: &ListingForm,
    store: &dyn ListingStore,
    feedback: &Feedback,
    logger: &StructuredLogger,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: std::fmt::Display,
{
    let shell = create_shell();
    sink.send_shell(&shell.render_opening()).await?;

    let listings = store.listings();
    let stats = SellerStats::from_listings(listings);

    logger
        .debug_builder("seller view")
        .field_i64("listings", stats.products_listed as i64)
        .field_i64("sold", stats.items_sold as i64)
        .field_bool("editing", form.editing().is_some())
        .emit();

    sink.send_section("header", &render_sell_header()).await?;
    sink.send_section("toggle", &render_toggle(form, feedback))
        .await?;
    sink.send_section("form", &render_listing_form(form, feedback))
        .await?;
    sink.send_section("gallery", &render_gallery(listings)).await?;
    sink.send_section("stats", &render_seller_stats(&stats))
        .await?;
    sink.send_section("tips", &render_seller_tips()).await?;

    sink.finish(&shell.render_closing()).await?;

    let mut complete = logger
        .info_builder("page complete")
        .field_i64("bytes", sink.bytes_sent() as i64)
        .field_json("sections", &sink.sections_sent());
    if let Some(ttfb) = sink.timing().time_to_shell() {
        complete = complete.duration_ms("time_to_shell_ms", ttfb);
    }
    complete.emit();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_sdk::eco_commerce::listing::{CancelPolicy, InMemoryListingStore, StaticListingStore};
    use eco_sdk::eco_core::{LifecyclePhase, Method};
    use eco_sdk::eco_observability::LogLevel;
    use eco_sdk::eco_streaming::collect_html;
    use futures::executor::block_on;

    fn quiet_logger(ctx: &RequestContext) -> StructuredLogger {
        StructuredLogger::new(ctx.request_id.clone())
            .with_workload(WORKLOAD_NAME)
            .with_min_level(LogLevel::Error)
    }

    fn render(
        form: &ListingForm,
        store: &dyn ListingStore,
        feedback: &Feedback,
    ) -> (String, LifecyclePhase, Vec<String>) {
        let ctx = RequestContext::new(Method::Get, ROUTE);
        let logger = quiet_logger(&ctx);
        let mut sink = StreamingSink::new(Vec::<Vec<u8>>::new(), ctx.timing.clone());
        block_on(render_sell_page(&mut sink, form, store, feedback, &logger)).unwrap();

        let phase = sink.phase();
        let sections = sink.sections_sent().to_vec();
        (collect_html(sink.into_inner()), phase, sections)
    }

    #[test]
    fn test_page_streams_all_sections() {
        let store = StaticListingStore::demo();
        let (html, phase, sections) = render(&ListingForm::default(), &store, &Feedback::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert_eq!(sections, vec!["header", "toggle", "form", "gallery", "stats", "tips"]);
        assert_eq!(phase, LifecyclePhase::Completion);
        assert!(html.contains("Your Listed Products (4)"));
        assert!(html.contains(r#"data-section="form" hidden"#));
    }

    #[test]
    fn test_get_opens_form_on_request() {
        let config = embedded_config().unwrap();
        let ctx = RequestContext::new(Method::Get, "/sell?form=open");
        assert!(form_for_get(&ctx, &config).is_visible());

        let ctx = RequestContext::new(Method::Get, "/sell");
        assert!(!form_for_get(&ctx, &config).is_visible());
    }

    #[test]
    fn test_post_submit_creates_listing_in_memory() {
        let ctx = RequestContext::new(Method::Post, ROUTE);
        let logger = quiet_logger(&ctx);
        let config = embedded_config().unwrap();
        let mut store = InMemoryListingStore::demo();
        let body = FormData::parse(
            "action=submit&visible=true&editing=&title=Hemp+Backpack&price=64&category=fashion\
             &condition=new&description=Durable+hemp+canvas&ecoFeatures=Organic",
        );

        let (form, feedback) = handle_post(&body, &config, &mut store, &logger).unwrap();
        assert!(!form.is_visible());
        assert_eq!(feedback.notice.as_deref(), Some("Listing 5 created"));

        let (html, _, _) = render(&form, &store, &feedback);
        assert!(html.contains("Your Listed Products (5)"));
        assert!(html.contains("Hemp Backpack"));
        assert!(html.contains("$64"));
        assert!(html.contains("Listing 5 created"));
    }

    #[test]
    fn test_post_with_missing_fields_rerenders_draft() {
        let ctx = RequestContext::new(Method::Post, ROUTE);
        let logger = quiet_logger(&ctx);
        let config = embedded_config().unwrap();
        let mut store = StaticListingStore::demo();
        let body = FormData::parse("action=submit&visible=true&title=Half+Finished");

        let (form, feedback) = handle_post(&body, &config, &mut store, &logger).unwrap();
        let (html, _, _) = render(&form, &store, &feedback);
        assert!(!html.contains(r#"data-section="form" hidden"#));
        assert!(html.contains(r#"value="Half Finished""#));
        assert!(html.contains("<li>Price is required</li>"));
    }

    #[test]
    fn test_post_remove_keeps_open_draft() {
        let ctx = RequestContext::new(Method::Post, ROUTE);
        let logger = quiet_logger(&ctx);
        let config = embedded_config().unwrap();
        let mut store = InMemoryListingStore::demo();
        let body = FormData::parse("visible=true&editing=&title=Half+typed&action=remove%3A2");

        let (form, feedback) = handle_post(&body, &config, &mut store, &logger).unwrap();
        assert!(form.is_visible());
        assert_eq!(form.draft().title, "Half typed");
        assert_eq!(feedback.notice.as_deref(), Some("Listing 2 removed"));

        let (html, _, _) = render(&form, &store, &feedback);
        assert!(!html.contains(r#"data-section="form" hidden"#));
        assert!(html.contains(r#"value="Half typed""#));
        assert!(html.contains("Your Listed Products (3)"));
    }

    #[test]
    fn test_post_unknown_action_is_bad_request() {
        let ctx = RequestContext::new(Method::Post, ROUTE);
        let logger = quiet_logger(&ctx);
        let config = embedded_config().unwrap();
        let mut store = StaticListingStore::demo();

        let err = handle_post(&FormData::parse("action=publish"), &config, &mut store, &logger)
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_embedded_config_parses() {
        let (_, err) = embedded_config_or_default();
        assert!(err.is_none());
        let config = embedded_config().unwrap();
        assert_eq!(config.listings.cancel_policy, CancelPolicy::PreserveDraft);
        assert_eq!(config.build_store().listings().len(), 4);
    }

    #[test]
    fn test_manifest_routes_get_and_post() {
        let manifest = manifest();
        let route = manifest.route_for("/sell?form=open").unwrap();
        assert!(route.accepts("GET"));
        assert!(route.accepts("POST"));
        assert!(!route.accepts("DELETE"));
    }
}
