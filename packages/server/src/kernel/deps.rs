//! Server dependencies for handlers and resolvers (using traits for testability)
//!
//! This module provides the central dependency container passed to every
//! route and resolver factory.

use sqlx::PgPool;
use std::sync::Arc;

use crate::kernel::{BaseSnipeStore, BaseVerseStore, PostgresStore};

// =============================================================================
// ServerDeps
// =============================================================================

/// Store capabilities shared by the REST and GraphQL surfaces
#[derive(Clone)]
pub struct ServerDeps {
    pub verses: Arc<dyn BaseVerseStore>,
    pub snipes: Arc<dyn BaseSnipeStore>,
}

impl ServerDeps {
    pub fn new(verses: Arc<dyn BaseVerseStore>, snipes: Arc<dyn BaseSnipeStore>) -> Self {
        Self { verses, snipes }
    }

    /// Both stores backed by the same Postgres pool
    pub fn postgres(pool: PgPool) -> Self {
        let store = Arc::new(PostgresStore::new(pool));
        Self {
            verses: store.clone(),
            snipes: store,
        }
    }
}
