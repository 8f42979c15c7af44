use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::{header, StatusCode},
    middleware::ErrorHandlerResponse,
    HttpResponse,
};
use tracing::Span;
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder};

/// Emits per-request root spans at DEBUG instead of INFO, so health
/// probes and static requests do not flood the logs.
pub struct QuieterRootSpanBuilder;

impl RootSpanBuilder for QuieterRootSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> Span {
        tracing_actix_web::root_span!(level = tracing::Level::DEBUG, request)
    }

    fn on_request_end<B: MessageBody>(
        span: Span,
        outcome: &Result<ServiceResponse<B>, actix_web::Error>,
    ) {
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}

/// Replaces actix-web's plain-text error pages (unmatched routes,
/// failed extractors) with the JSON shape the rest of the API speaks.
/// Error responses that already carry a JSON body pass through
/// untouched.
pub fn handle_actix_web_error<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let is_json = res
        .response()
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false);

    if is_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let (request, response) = res.into_parts();
    let status = response.status();
    let message = if status == StatusCode::NOT_FOUND {
        "Route not found"
    } else {
        status.canonical_reason().unwrap_or("Internal server error")
    };

    let response = HttpResponse::build(status).json(serde_json::json!({ "error": message }));
    let response = ServiceResponse::new(request, response).map_into_right_body();

    Ok(ErrorHandlerResponse::Response(response))
}
