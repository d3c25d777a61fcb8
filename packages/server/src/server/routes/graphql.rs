use crate::server::graphql::{GraphQLContext, Schema};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use juniper::http::GraphQLRequest;
use std::sync::Arc;

/// Schema and context shared by every GraphQL request
#[derive(Clone)]
pub struct GraphQLState {
    pub schema: Arc<Schema>,
    pub context: Arc<GraphQLContext>,
}

/// GraphQL POST endpoint
///
/// Resolver errors still answer 200; only requests that fail to parse or
/// validate answer 400.
pub async fn graphql_handler(
    State(state): State<GraphQLState>,
    Json(request): Json<GraphQLRequest>,
) -> Response {
    let response = request
        .execute(state.schema.as_ref(), state.context.as_ref())
        .await;
    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response)).into_response()
}

/// GraphQL playground
pub async fn graphql_playground() -> Html<String> {
    Html(juniper::http::playground::playground_source("/graphql", None))
}
