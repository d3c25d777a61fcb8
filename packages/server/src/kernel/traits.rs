// Trait definitions for dependency injection
//
// These are STORE capabilities only. Handlers and resolvers receive them as
// trait objects so tests can swap in the in-memory doubles.
//
// Naming convention: Base* for trait names (e.g., BaseVerseStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::snipes::Snipe;
use crate::domains::verses::Verse;

// =============================================================================
// Verse Store
// =============================================================================

#[async_trait]
pub trait BaseVerseStore: Send + Sync {
    /// Every verse in the store
    async fn find_many(&self) -> Result<Vec<Verse>>;

    /// Verse with the given id; `None` when absent
    async fn find_unique(&self, id: i32) -> Result<Option<Verse>>;

    /// Insert a verse whose id must not exist yet
    async fn create(&self, verse: Verse) -> Result<Verse>;

    /// Replace the verse with the same id; errors if it does not exist
    async fn update(&self, verse: Verse) -> Result<Verse>;

    /// Insert or replace
    async fn upsert(&self, verse: Verse) -> Result<Verse>;

    /// Remove the verse and return it; errors if it does not exist
    async fn delete(&self, id: i32) -> Result<Verse>;
}

// =============================================================================
// Snipe Store
// =============================================================================

#[async_trait]
pub trait BaseSnipeStore: Send + Sync {
    async fn find_first(&self) -> Result<Option<Snipe>>;
}
