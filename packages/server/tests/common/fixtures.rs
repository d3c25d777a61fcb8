//! Test fixtures shared by the API tests.

use serde_json::{json, Value};
use verses_core::domains::snipes::Snipe;
use verses_core::domains::verses::Verse;

pub const STORE_ERROR: &str = "Some Error";

pub fn verse(id: i32, title: &str, content: &str) -> Verse {
    Verse {
        id,
        title: title.to_string(),
        content: content.to_string(),
    }
}

/// The two verses most tests start from
pub fn test_verses() -> Vec<Verse> {
    vec![
        verse(1, "Test Title", "Test Content"),
        verse(2, "Test Title 2", "Test Content 2"),
    ]
}

pub fn test_snipe() -> Snipe {
    Snipe {
        id: 1,
        author: "Test Author".to_string(),
        content: "Test Content".to_string(),
    }
}

pub fn to_json(verse: &Verse) -> Value {
    json!({
        "id": verse.id,
        "title": verse.title,
        "content": verse.content,
    })
}

/// Body every REST store failure must produce
pub fn store_error_body() -> Value {
    json!({
        "statusCode": 500,
        "error": "Internal Server Error",
        "message": STORE_ERROR,
    })
}

/// Body every REST auth failure must produce
pub fn unauthorized_body() -> Value {
    json!({
        "statusCode": 401,
        "error": "Unauthorized",
        "message": "API Key Required",
    })
}
