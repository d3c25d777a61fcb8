//! `/snipes` REST routes.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::domains::snipes::Snipe;
use crate::kernel::{BaseSnipeStore, ServerDeps};
use crate::server::error::ApiResult;

pub fn snipe_routes(deps: &ServerDeps) -> Router {
    Router::new()
        .route("/", get(first_snipe))
        .with_state(deps.snipes.clone())
}

/// GET /snipes - first snipe, or `null` when there are none
async fn first_snipe(
    State(store): State<Arc<dyn BaseSnipeStore>>,
) -> ApiResult<Json<Option<Snipe>>> {
    Ok(Json(store.find_first().await?))
}
