//! HTTP-level middleware (cross-cutting concerns).
//!
//! Responsibility:
//! - Request-Id generation (X-Request-Id) for log correlation
//! - Access logging / request tracing (TraceLayer)
//!
//! Notes:
//! - The request id is recorded on the request span only. It is not
//!   propagated to the response, so clients see the framework's default
//!   headers and nothing else.
//! - No body limit and no timeout: requests carry no body, and transport
//!   defaults apply.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header::HeaderName};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Apply HTTP-level middleware to the given Router.
pub fn apply(router: Router) -> Router {
    let layers = ServiceBuilder::new()
        // Generate a request id if missing so the span below can carry it.
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id,
                )
            }),
        );

    router.layer(layers)
}
