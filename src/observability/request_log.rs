//! Access log middleware

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

use super::logger::{Logger, Severity};

/// Log one `HTTP_REQUEST` event per request, after the response is built.
///
/// Server errors are logged at ERROR, client errors at WARN.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let severity = if status.is_server_error() {
        Severity::Error
    } else if status.is_client_error() {
        Severity::Warn
    } else {
        Severity::Info
    };

    let status_str = status.as_u16().to_string();
    let duration_ms = started.elapsed().as_millis().to_string();
    Logger::log(
        severity,
        "HTTP_REQUEST",
        &[
            ("duration_ms", duration_ms.as_str()),
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("request_id", request_id.as_str()),
            ("status", status_str.as_str()),
        ],
    );

    response
}
