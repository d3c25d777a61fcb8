use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::debug;

use crate::common::auth::ApiKeyGate;
use crate::server::error::ApiError;

/// Message carried by the GraphQL rejection envelope
pub const GRAPHQL_UNAUTHORIZED: &str = "401 Unauthorized";

/// REST API key middleware
///
/// Rejects with the structured 401 body before any handler or extractor runs.
pub async fn rest_api_key_middleware(
    State(gate): State<ApiKeyGate>,
    request: Request,
    next: Next,
) -> Response {
    if gate.authorize(authorization_header(&request)) {
        return next.run(request).await;
    }

    debug!(path = %request.uri().path(), "Rejected REST request without valid API key");
    ApiError::Unauthorized.into_response()
}

/// GraphQL API key middleware
///
/// Runs before the request body is parsed. Rejections use the GraphQL
/// envelope with HTTP 500, which existing clients rely on.
pub async fn graphql_api_key_middleware(
    State(gate): State<ApiKeyGate>,
    request: Request,
    next: Next,
) -> Response {
    if gate.authorize(authorization_header(&request)) {
        return next.run(request).await;
    }

    debug!("Rejected GraphQL request without valid API key");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "data": null,
            "errors": [{ "message": GRAPHQL_UNAUTHORIZED }],
        })),
    )
        .into_response()
}

/// Raw `authorization` header value; non-UTF-8 values count as absent
fn authorization_header(request: &Request) -> Option<&str> {
    request
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
}
