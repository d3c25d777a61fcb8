//! Postgres-backed implementation of the store traits.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::domains::snipes::Snipe;
use crate::domains::verses::Verse;
use crate::kernel::{BaseSnipeStore, BaseVerseStore};

/// Wrapper around PgPool that implements the store traits
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BaseVerseStore for PostgresStore {
    async fn find_many(&self) -> Result<Vec<Verse>> {
        Verse::find_all(&self.pool).await
    }

    async fn find_unique(&self, id: i32) -> Result<Option<Verse>> {
        Verse::find_by_id(id, &self.pool).await
    }

    async fn create(&self, verse: Verse) -> Result<Verse> {
        verse.create(&self.pool).await
    }

    async fn update(&self, verse: Verse) -> Result<Verse> {
        verse.update(&self.pool).await
    }

    async fn upsert(&self, verse: Verse) -> Result<Verse> {
        verse.upsert(&self.pool).await
    }

    async fn delete(&self, id: i32) -> Result<Verse> {
        Verse::delete(id, &self.pool).await
    }
}

#[async_trait]
impl BaseSnipeStore for PostgresStore {
    async fn find_first(&self) -> Result<Option<Snipe>> {
        Snipe::find_first(&self.pool).await
    }
}
