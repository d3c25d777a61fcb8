use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A quoted snippet attributed to an author (read-only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Snipe {
    pub id: i32,
    pub author: String,
    pub content: String,
}

impl Snipe {
    /// First snipe by id, if any exist
    pub async fn find_first(pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Snipe>("SELECT id, author, content FROM snipes ORDER BY id LIMIT 1")
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }
}
