//! Spin HTTP entry point.

use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use eco_sdk::eco_core::{self, RequestContext};
use eco_sdk::eco_observability::StructuredLogger;
use eco_sdk::eco_streaming::StreamingSink;

use crate::{
    embedded_config_or_default, query_from_request, render_catalog_page, response_headers, ROUTE,
    WORKLOAD_NAME,
};

/// Catalog page handler.
#[http_component]
async fn handle_products(req: IncomingRequest, response_out: ResponseOutparam) {
    if req.method() != Method::Get {
        respond_status(response_out, 405, &[("allow", "GET")]);
        return;
    }

    let path_with_query = req.path_with_query().unwrap_or_default();
    let ctx = RequestContext::new(eco_core::Method::Get, path_with_query);

    let (config, config_error) = embedded_config_or_default();
    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_workload(WORKLOAD_NAME)
        .with_route(ROUTE)
        .with_min_level(config.logging.level)
        .with_format(config.logging.format);

    if let Some(e) = config_error {
        logger
            .warn_builder("embedded config rejected, using defaults")
            .field("error", e.to_string())
            .emit();
    }

    let catalog = match config.load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            logger.error(&format!("Failed to load catalog: {}", e));
            respond_status(response_out, 500, &[]);
            return;
        }
    };

    let query = query_from_request(&ctx);
    let header_list: Vec<(String, Vec<u8>)> = response_headers(&ctx, &query)
        .into_iter()
        .map(|(name, value)| (name, value.into_bytes()))
        .collect();

    let Ok(headers) = Fields::from_list(&header_list) else {
        logger.error("Invalid response headers");
        respond_status(response_out, 500, &[]);
        return;
    };
    let response = OutgoingResponse::new(headers);
    if response.set_status_code(200).is_err() {
        logger.error("Failed to set status code");
        return;
    }

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    if let Err(e) = render_catalog_page(&mut sink, &query, &catalog, &logger).await {
        logger
            .warn_builder("catalog page aborted")
            .field("error", e.to_string())
            .emit();
    }
}

fn respond_status(response_out: ResponseOutparam, status: u16, extra: &[(&str, &str)]) {
    let header_list: Vec<(String, Vec<u8>)> = extra
        .iter()
        .map(|(name, value)| (name.to_string(), value.as_bytes().to_vec()))
        .collect();
    let Ok(headers) = Fields::from_list(&header_list) else {
        return;
    };
    let response = OutgoingResponse::new(headers);
    let _ = response.set_status_code(status);
    response_out.set(response);
}
