//! `/verses` REST routes.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::get,
    Json, Router,
};

use crate::domains::verses::{Verse, VerseIdInput};
use crate::kernel::{BaseVerseStore, ServerDeps};
use crate::server::error::{ApiError, ApiResult, ID_MUST_BE_NUMBER};

type VerseStore = Arc<dyn BaseVerseStore>;

pub fn verse_routes(deps: &ServerDeps) -> Router {
    Router::new()
        .route(
            "/",
            get(list_verses)
                .post(create_verse)
                .put(update_verse)
                .delete(delete_verse),
        )
        .route("/:id", get(get_verse))
        .with_state(deps.verses.clone())
}

/// Read the leading integer of a path id.
///
/// Leading whitespace, a sign and a `0x` prefix are accepted and trailing
/// characters are ignored, so `"12abc"` is 12 and `"1.5"` is 1. Ids with no
/// leading digits, or outside the `i32` range, are rejected.
fn parse_id(raw: &str) -> ApiResult<i32> {
    let invalid = || ApiError::BadRequest(ID_MUST_BE_NUMBER.to_string());

    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, body) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let len = body
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(body.len());
    if len == 0 {
        return Err(invalid());
    }

    let magnitude = i64::from_str_radix(&body[..len], radix).map_err(|_| invalid())?;
    let id = if negative { -magnitude } else { magnitude };
    i32::try_from(id).map_err(|_| invalid())
}

/// GET /verses
async fn list_verses(State(store): State<VerseStore>) -> ApiResult<Json<Vec<Verse>>> {
    Ok(Json(store.find_many().await?))
}

/// GET /verses/:id
///
/// An unknown id answers 200 with `null`.
async fn get_verse(
    State(store): State<VerseStore>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Option<Verse>>> {
    let Path(raw) = path?;
    let id = parse_id(&raw)?;

    Ok(Json(store.find_unique(id).await?))
}

/// POST /verses
async fn create_verse(
    State(store): State<VerseStore>,
    payload: Result<Json<Verse>, JsonRejection>,
) -> ApiResult<Json<Verse>> {
    let Json(verse) = payload?;

    Ok(Json(store.create(verse).await?))
}

/// PUT /verses
async fn update_verse(
    State(store): State<VerseStore>,
    payload: Result<Json<Verse>, JsonRejection>,
) -> ApiResult<Json<Verse>> {
    let Json(verse) = payload?;

    Ok(Json(store.update(verse).await?))
}

/// DELETE /verses
async fn delete_verse(
    State(store): State<VerseStore>,
    payload: Result<Json<VerseIdInput>, JsonRejection>,
) -> ApiResult<Json<Verse>> {
    let Json(VerseIdInput { id }) = payload?;

    Ok(Json(store.delete(id).await?))
}
