//! Request logging middleware
//!
//! Logs method and path for every request; for mutating requests (POST and
//! PUT) the body is buffered, logged, and handed back to the router
//! untouched. Timestamps come from the tracing subscriber.

use axum::{
    body::Body,
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};

/// Cap on how much of a request body is buffered for logging.
const BODY_LOG_LIMIT: usize = 64 * 1024;

pub async fn log_request(req: Request, next: Next) -> Result<Response, StatusCode> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let req = if method == Method::POST || method == Method::PUT {
        let (parts, body) = req.into_parts();
        let bytes = axum::body::to_bytes(body, BODY_LOG_LIMIT)
            .await
            .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)?;

        match std::str::from_utf8(&bytes) {
            Ok(text) => tracing::info!(%method, %path, body = %text, "request"),
            Err(_) => tracing::info!(%method, %path, body_bytes = bytes.len(), "request"),
        }

        Request::from_parts(parts, Body::from(bytes))
    } else {
        tracing::info!(%method, %path, "request");
        req
    };

    Ok(next.run(req).await)
}
