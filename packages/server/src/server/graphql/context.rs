use std::sync::Arc;

use crate::kernel::{BaseVerseStore, ServerDeps};

/// GraphQL request context
///
/// Contains the store capabilities available to all resolvers
pub struct GraphQLContext {
    pub verses: Arc<dyn BaseVerseStore>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(deps: &ServerDeps) -> Self {
        Self {
            verses: deps.verses.clone(),
        }
    }
}
