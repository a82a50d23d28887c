//! HTTP 访问日志

use std::time::Instant;

use axum::{body::Body, middleware::Next};
use http::{Request, Response};

/// Log `method uri status latency` for every request
pub async fn log_request(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = started.elapsed().as_millis();

    if status.is_server_error() {
        tracing::warn!(target: "http_access", "{} {} {} {}ms", method, uri, status, latency_ms);
    } else {
        tracing::info!(target: "http_access", "{} {} {} {}ms", method, uri, status, latency_ms);
    }

    response
}
