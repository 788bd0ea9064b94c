//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span, info_span};

use crate::domain::lang::Lang;

/// Creates a tracing middleware for HTTP requests.
///
/// Opens an `INFO` span per request carrying method, path and the content
/// language resolved from `x-lang`, and logs the status code and latency in
/// milliseconds on response.
pub fn layer()
-> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, fn(&Request<Body>) -> Span> {
    TraceLayer::new_for_http()
        .make_span_with(make_span as fn(&Request<Body>) -> Span)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn make_span(request: &Request<Body>) -> Span {
    // Same fallback as the extractor: anything unrecognized reads as English.
    let lang = request
        .headers()
        .get("x-lang")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<Lang>().ok())
        .unwrap_or_default();

    info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        lang = ?lang,
    )
}
