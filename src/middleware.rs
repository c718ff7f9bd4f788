//! Request correlation middleware.
//!
//! Every request gets a UUID v4 request ID, reused from an incoming
//! `x-request-id` header when a proxy already assigned one. The ID is stored in
//! request extensions, recorded on a `request` span that wraps the whole
//! request, and echoed back in the `x-request-id` response header.
//!
//! Orchestrators poll `/health` every few seconds, so completions on that path
//! are logged at debug level to keep them out of the default info output.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use http::header::{HeaderName, HeaderValue};
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the request ID in both directions.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Path whose completions are logged at debug level.
const PROBE_PATH: &str = "/health";

/// Request ID stored in request extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Reuse a well-formed ID from the incoming request, otherwise mint one.
    fn from_request(request: &Request) -> Self {
        let inherited = request
            .headers()
            .get(&REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok());
        Self(inherited.unwrap_or_else(Uuid::new_v4))
    }
}

/// Middleware that assigns the request ID and wraps the request in a span.
///
/// Must be the outermost layer so the span covers the other layers too.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_request(&request);
    let probe = request.uri().path() == PROBE_PATH;

    let span = tracing::info_span!(
        "request",
        request_id = %request_id.0,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();
    request.extensions_mut().insert(request_id);

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;
        let status = response.status().as_u16();

        tracing::Span::current().record("duration_ms", duration_ms);
        if probe {
            tracing::debug!(status, duration_ms, "Request completed");
        } else {
            tracing::info!(status, duration_ms, "Request completed");
        }

        // A hyphenated UUID is always a valid header value
        if let Ok(value) = HeaderValue::from_str(&request_id.0.to_string()) {
            response
                .headers_mut()
                .insert(REQUEST_ID_HEADER, value);
        }

        response
    }
    .instrument(span)
    .await
}
