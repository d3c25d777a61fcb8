//! Integration tests for the GraphQL endpoint.
//!
//! Requests are shaped like the ones existing clients send: a named
//! operation with `$id`-style variables.

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::{json, Value};
use verses_core::kernel::VerseStoreCall;

const ALL_VERSES: &str = "query { verse { id, title, content } }";
const VERSE_BY_ID: &str = "query ($id: Int) { verse (id: $id) { id, title, content } }";
const UPSERT_VERSE: &str = "mutation ($id: Int!, $title: String!, $content: String!) { \
                            verse (id: $id, title: $title, content: $content) { id, title, content } }";

/// Checks the envelope produced when the `verse` resolver fails
fn assert_resolver_error(body: &Value) {
    assert_eq!(body["data"], json!({ "verse": null }));

    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["message"], STORE_ERROR);
    assert_eq!(errors[0]["path"], json!(["verse"]));

    let locations = errors[0]["locations"].as_array().expect("locations array");
    assert!(!locations.is_empty());
    for location in locations {
        assert!(location["line"].is_u64());
        assert!(location["column"].is_u64());
    }
}

// ============================================================================
// API key gate
// ============================================================================

#[tokio::test]
async fn wrong_api_key_gets_graphql_unauthorized_envelope() {
    let harness = TestHarness::with_verses(test_verses());

    let res = harness
        .graphql_with_key("query { verse { id } }", json!({}), Some("wrong"))
        .await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        res.body,
        json!({ "data": null, "errors": [{ "message": "401 Unauthorized" }] })
    );
    assert!(!harness.deps.verses.was_called());
}

#[tokio::test]
async fn missing_api_key_is_rejected_even_for_mutations() {
    let harness = TestHarness::new();

    let res = harness
        .graphql_with_key(
            UPSERT_VERSE,
            json!({ "id": 9, "title": "t", "content": "c" }),
            None,
        )
        .await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body["errors"][0]["message"], "401 Unauthorized");
    assert!(harness.deps.verses.snapshot().is_empty());
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn query_all_verses() {
    let harness = TestHarness::with_verses(test_verses());

    let res = harness.graphql(ALL_VERSES, json!({})).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({ "data": { "verse": test_verses().iter().map(to_json).collect::<Vec<_>>() } })
    );
}

#[tokio::test]
async fn query_all_verses_store_failure() {
    let harness = TestHarness::with_verses(test_verses());
    harness.fail_verses(STORE_ERROR);

    let res = harness.graphql(ALL_VERSES, json!({})).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_resolver_error(&res.body);
}

#[tokio::test]
async fn query_specific_verse() {
    let harness = TestHarness::with_verses(test_verses());

    let res = harness.graphql(VERSE_BY_ID, json!({ "id": 1 })).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({
            "data": {
                "verse": [{ "id": 1, "title": "Test Title", "content": "Test Content" }]
            }
        })
    );
    assert_eq!(
        harness.deps.verses.calls(),
        vec![VerseStoreCall::FindUnique(1)]
    );
}

#[tokio::test]
async fn query_unknown_verse_yields_null_entry() {
    let harness = TestHarness::with_verses(test_verses());

    let res = harness.graphql(VERSE_BY_ID, json!({ "id": 99 })).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({ "data": { "verse": [null] } }));
}

#[tokio::test]
async fn query_specific_verse_store_failure() {
    let harness = TestHarness::with_verses(test_verses());
    harness.fail_verses(STORE_ERROR);

    let res = harness.graphql(VERSE_BY_ID, json!({ "id": 1 })).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_resolver_error(&res.body);
}

#[tokio::test]
async fn invalid_document_is_400() {
    let harness = TestHarness::with_verses(test_verses());

    let res = harness.graphql("query { verse { nope } }", json!({})).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body["errors"].is_array());
    assert!(!harness.deps.verses.was_called());
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn mutation_upserts_verse() {
    let harness = TestHarness::with_verses(test_verses());
    let expected = to_json(&test_verses()[0]);

    let res = harness.graphql(UPSERT_VERSE, expected.clone()).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({ "data": { "verse": expected } }));
    assert_eq!(harness.deps.verses.calls(), vec![VerseStoreCall::Upsert(1)]);
}

#[tokio::test]
async fn mutation_creates_missing_verse() {
    let harness = TestHarness::new();
    let created = verse(3, "Green Day", "Is awesome");

    let res = harness.graphql(UPSERT_VERSE, to_json(&created)).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(harness.deps.verses.snapshot(), vec![created]);
}

#[tokio::test]
async fn mutation_store_failure() {
    let harness = TestHarness::with_verses(test_verses());
    harness.fail_verses(STORE_ERROR);

    let res = harness
        .graphql(UPSERT_VERSE, to_json(&test_verses()[0]))
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_resolver_error(&res.body);
}
