//! Sustainable products catalog page.
//!
//! Streams the catalog derived from the product fixture:
//! - Query-driven view (`?category=` filter, `?sort=` key) with a cache key per query
//! - Facet counts in the filter bar
//! - Decorations assigned once at catalog load, so a query always yields the same view

mod sections;
mod styles;

#[cfg(target_arch = "wasm32")]
mod handler;

use eco_sdk::eco_commerce::catalog::Catalog;
use eco_sdk::eco_commerce::search::BrowseQuery;
use eco_sdk::eco_commerce::{CommerceError, MarketplaceConfig};
use eco_sdk::eco_core::{RequestContext, RouteConfig, WorkloadError, WorkloadManifest};
use eco_sdk::eco_observability::StructuredLogger;
use eco_sdk::eco_streaming::{HeadContent, Shell, StreamingSink};
use futures::Sink;

pub use sections::{
    render_catalog_header, render_filter_bar, render_impact_footer, render_product_card,
    render_product_grid,
};

pub const WORKLOAD_NAME: &str = "sustainable-products";
pub const ROUTE: &str = "/products";

const EMBEDDED_CONFIG: &str = include_str!("../eco.toml");

/// Routes served by this workload.
pub fn manifest() -> WorkloadManifest {
    WorkloadManifest::new(WORKLOAD_NAME, env!("CARGO_PKG_VERSION"))
        .with_route(RouteConfig::new(ROUTE, "handle_products").with_methods(vec!["GET"]))
}

/// Configuration compiled into the workload.
pub fn embedded_config() -> Result<MarketplaceConfig, CommerceError> {
    MarketplaceConfig::from_toml_str(EMBEDDED_CONFIG)
}

/// Embedded configuration, or the defaults plus the reason it was rejected.
pub fn embedded_config_or_default() -> (MarketplaceConfig, Option<CommerceError>) {
    MarketplaceConfig::from_toml_str_or_default(EMBEDDED_CONFIG)
}

/// Browse query from the request's query string.
pub fn query_from_request(ctx: &RequestContext) -> BrowseQuery {
    BrowseQuery::from_params(ctx.query_param("category"), ctx.query_param("sort"))
}

/// Response headers for a catalog page.
pub fn response_headers(ctx: &RequestContext, query: &BrowseQuery) -> Vec<(String, String)> {
    vec![
        ("content-type".to_string(), "text/html; charset=utf-8".to_string()),
        ("x-request-id".to_string(), ctx.request_id.to_string()),
        ("x-cache-key".to_string(), query.cache_key()),
    ]
}

/// Document shell for the catalog page.
pub fn create_shell(query: &BrowseQuery) -> Shell {
    let title = match query.category.as_str() {
        "all" => "Sustainable Products Marketplace".to_string(),
        _ => format!("{} - Sustainable Products", query.category.display_name()),
    };

    let head = HeadContent::new(title)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta(
            "description",
            "Eco-friendly products that help reduce your carbon footprint",
        )
        .with_style(styles::CATALOG_STYLES);

    Shell::new(head).with_body_start(
        r#"<body>
<header class="site-header">
    <a href="/products" class="logo">EcoMarket</a>
    <nav class="header-nav">
        <a href="/products">Shop</a>
        <a href="/sell">Sell</a>
    </nav>
</header>
<main>
"#,
    )
}

/// Stream the catalog page for `query` into `sink`.
pub async fn render_catalog_page<S, E>(
    sink: &mut StreamingSink<S, E>,
    query: &BrowseQuery,
    catalog: &Catalog,
    logger: &StructuredLogger,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: std::fmt::Display,
{
    let shell = create_shell(query);
    sink.send_shell(&shell.render_opening()).await?;

    let view = catalog.view(query);

    logger
        .info_builder("catalog derived")
        .field("category", query.category.as_str())
        .field("sort", query.sort.as_str())
        .field_i64("catalog_size", catalog.len() as i64)
        .field_i64("results", view.products.len() as i64)
        .emit();

    sink.send_section("header", &render_catalog_header(query, view.products.len()))
        .await?;
    sink.send_section("filters", &render_filter_bar(query, &view.counts))
        .await?;
    sink.send_section("grid", &render_product_grid(&view.products)).await?;
    sink.send_section("impact", &render_impact_footer()).await?;

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
    use eco_sdk::eco_commerce::catalog::{
        CatalogCategory, Decoration, DecorationMode, ProductRecord, ScriptedDecorator,
    };
    use eco_sdk::eco_core::{LifecyclePhase, Method};
    use eco_sdk::eco_observability::LogLevel;
    use eco_sdk::eco_streaming::collect_html;
    use futures::executor::block_on;

    fn quiet_logger(ctx: &RequestContext) -> StructuredLogger {
        StructuredLogger::new(ctx.request_id.clone())
            .with_workload(WORKLOAD_NAME)
            .with_min_level(LogLevel::Error)
    }

    fn render(path: &str, catalog: &Catalog) -> (String, LifecyclePhase, Vec<String>) {
        let ctx = RequestContext::new(Method::Get, path);
        let query = query_from_request(&ctx);
        let logger = quiet_logger(&ctx);

        let mut sink = StreamingSink::new(Vec::<Vec<u8>>::new(), ctx.timing.clone());
        block_on(render_catalog_page(&mut sink, &query, catalog, &logger)).unwrap();

        let phase = sink.phase();
        let sections = sink.sections_sent().to_vec();
        (collect_html(sink.into_inner()), phase, sections)
    }

    fn scripted_catalog() -> Catalog {
        let mut decorator = ScriptedDecorator::new(vec![
            Decoration::new(2, 1, CatalogCategory::Electronics),
            Decoration::new(5, 2, CatalogCategory::Home),
            Decoration::new(4, 3, CatalogCategory::Electronics),
        ]);
        Catalog::with_decorator(
            vec![
                ProductRecord::new("Solar Charger", "$39.99", "4.2"),
                ProductRecord::new("Beeswax Wraps", "$16.95", "4.4"),
                ProductRecord::new("LED Bulbs", "$29.99", "N/A"),
            ],
            &mut decorator,
        )
    }

    #[test]
    fn test_page_streams_all_sections() {
        let catalog = Catalog::from_default_fixture(DecorationMode::Stable, 42).unwrap();
        let (html, phase, sections) = render("/products", &catalog);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert_eq!(sections, vec!["header", "filters", "grid", "impact"]);
        assert_eq!(phase, LifecyclePhase::Completion);
        assert_eq!(html.matches("<article class=\"product-card\"").count(), catalog.len());
    }

    #[test]
    fn test_category_query_filters_grid() {
        let (html, _, _) = render("/products?category=electronics&sort=rating", &scripted_catalog());

        assert_eq!(html.matches("<article class=\"product-card\"").count(), 2);
        assert!(!html.contains("Beeswax Wraps"));
        let charger = html.find("Solar Charger").unwrap();
        let bulbs = html.find("LED Bulbs").unwrap();
        assert!(charger < bulbs);
    }

    #[test]
    fn test_sustainability_sort_orders_grid() {
        let (html, _, _) = render("/products?sort=sustainability", &scripted_catalog());
        let wraps = html.find("Beeswax Wraps").unwrap();
        let bulbs = html.find("LED Bulbs").unwrap();
        let charger = html.find("Solar Charger").unwrap();
        assert!(wraps < bulbs && bulbs < charger);
    }

    #[test]
    fn test_same_query_same_page() {
        let catalog = Catalog::from_default_fixture(DecorationMode::Stable, 7).unwrap();
        let (first, _, _) = render("/products?sort=sustainability", &catalog);
        let (second, _, _) = render("/products?sort=sustainability", &catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn test_response_headers_carry_cache_key() {
        let ctx = RequestContext::new(Method::Get, "/products?category=home&sort=sustainability");
        let headers = response_headers(&ctx, &query_from_request(&ctx));
        assert!(headers.contains(&(
            "x-cache-key".to_string(),
            "products:home:sustainability".to_string()
        )));
        assert!(headers.iter().any(|(name, value)| name == "x-request-id" && !value.is_empty()));
    }

    #[test]
    fn test_embedded_config_parses() {
        let (_, err) = embedded_config_or_default();
        assert!(err.is_none());
        let config = embedded_config().unwrap();
        assert_eq!(config.catalog.decoration, DecorationMode::Stable);
        assert!(config.load_catalog().is_ok());
    }

    #[test]
    fn test_manifest_routes_get_only() {
        let manifest = manifest();
        let route = manifest.route_for("/products?category=home").unwrap();
        assert!(route.accepts("GET"));
        assert!(!route.accepts("POST"));
    }
}
