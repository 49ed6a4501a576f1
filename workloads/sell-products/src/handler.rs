//! Spin HTTP entry point.

use anyhow::anyhow;
use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use eco_sdk::eco_commerce::listing::{ListingForm, ListingStore};
use eco_sdk::eco_core::{self, FormData, RequestContext, WorkloadError};
use eco_sdk::eco_observability::StructuredLogger;
use eco_sdk::eco_streaming::StreamingSink;

use crate::{embedded_config_or_default, form_for_get, handle_post, render_sell_page, Feedback, ROUTE, WORKLOAD_NAME};

/// Seller page handler.
#[http_component]
async fn handle_sell(req: IncomingRequest, response_out: ResponseOutparam) {
    let method = match req.method() {
        Method::Get => eco_core::Method::Get,
        Method::Post => eco_core::Method::Post,
        _ => {
            respond_status(response_out, 405, &[("allow", "GET, POST")]);
            return;
        }
    };

    let path_with_query = req.path_with_query().unwrap_or_default();
    let ctx = RequestContext::new(method, path_with_query);

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

    // Rebuilt per request; an in-memory store only lives for this response.
    let mut store = config.build_store();

    let (form, feedback) = match method {
        eco_core::Method::Post => match read_form(req).await {
            Ok(body) => match handle_post(&body, &config, store.as_mut(), &logger) {
                Ok(result) => result,
                Err(e) => {
                    reject(response_out, &logger, &e);
                    return;
                }
            },
            Err(e) => {
                reject(response_out, &logger, &WorkloadError::Other(e));
                return;
            }
        },
        _ => (form_for_get(&ctx, &config), Feedback::default()),
    };

    stream_page(response_out, &ctx, &form, store.as_ref(), &feedback, &logger).await;
}

async fn read_form(req: IncomingRequest) -> anyhow::Result<FormData> {
    let body = req
        .into_body()
        .await
        .map_err(|e| anyhow!("failed to read request body: {:?}", e))?;
    Ok(FormData::from_body(&body))
}

async fn stream_page(
    response_out: ResponseOutparam,
    ctx: &RequestContext,
    form: &ListingForm,
    store: &dyn ListingStore,
    feedback: &Feedback,
    logger: &StructuredLogger,
) {
    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_string(), b"text/html; charset=utf-8".to_vec()),
        ("x-request-id".to_string(), ctx.request_id.to_string().into_bytes()),
        ("cache-control".to_string(), b"no-store".to_vec()),
    ];

    let Ok(headers) = Fields::from_list(&header_list) else {
        logger.error("Invalid response headers");
        respond_status(response_out, 500, &[]);
        return;
    };
    let response = OutgoingResponse::new(headers);
    let status = if feedback.has_errors() { 422 } else { 200 };
    if response.set_status_code(status).is_err() {
        logger.error("Failed to set status code");
        return;
    }

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    if let Err(e) = render_sell_page(&mut sink, form, store, feedback, logger).await {
        logger
            .warn_builder("seller page aborted")
            .field("error", e.to_string())
            .emit();
    }
}

fn reject(response_out: ResponseOutparam, logger: &StructuredLogger, error: &WorkloadError) {
    logger
        .warn_builder("seller request rejected")
        .field("error", error.to_string())
        .field_i64("status", error.status_code() as i64)
        .emit();
    respond_status(response_out, error.status_code(), &[]);
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
