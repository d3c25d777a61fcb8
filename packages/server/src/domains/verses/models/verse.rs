use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A verse record, keyed by its integer id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Verse {
    pub id: i32,
    pub title: String,
    pub content: String,
}

/// Request body for deleting a verse
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VerseIdInput {
    pub id: i32,
}

// =============================================================================
// Verse Queries
// =============================================================================

impl Verse {
    /// Find all verses ordered by id
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Verse>("SELECT id, title, content FROM verses ORDER BY id")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Find a verse by id. A missing row is `Ok(None)`, not an error.
    pub async fn find_by_id(id: i32, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Verse>("SELECT id, title, content FROM verses WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a new verse. Fails if the id is already taken.
    pub async fn create(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Verse>(
            r#"
            INSERT INTO verses (id, title, content)
            VALUES ($1, $2, $3)
            RETURNING id, title, content
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Overwrite an existing verse. Fails if no verse has this id.
    pub async fn update(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Verse>(
            r#"
            UPDATE verses
            SET title = $2, content = $3
            WHERE id = $1
            RETURNING id, title, content
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Record to update not found (id {})", self.id))
    }

    /// Insert or overwrite a verse
    pub async fn upsert(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Verse>(
            r#"
            INSERT INTO verses (id, title, content)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET title = EXCLUDED.title, content = EXCLUDED.content
            RETURNING id, title, content
            "#,
        )
        .bind(self.id)
        .bind(&self.title)
        .bind(&self.content)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete a verse and return the removed row. Fails if no verse has this id.
    pub async fn delete(id: i32, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Verse>(
            "DELETE FROM verses WHERE id = $1 RETURNING id, title, content",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Record to delete does not exist (id {})", id))
    }
}
