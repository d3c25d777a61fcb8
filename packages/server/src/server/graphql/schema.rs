//! GraphQL schema definition.

use super::context::GraphQLContext;
use juniper::{EmptySubscription, FieldError, FieldResult, RootNode};
use tracing::error;

use crate::domains::verses::{Verse, VerseData};

// =============================================================================
// Helper functions
// =============================================================================

/// Log a store failure and hand it back to juniper as a field error.
/// Juniper nulls the field and records `path` and `locations`.
fn to_field_error(e: anyhow::Error) -> FieldError {
    error!(error = %e, "Store operation failed in resolver");
    FieldError::new(e.to_string(), juniper::Value::null())
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// Verses matching `id`, or every verse when `id` is omitted.
    ///
    /// A lookup by id always yields a single-element list, holding `null`
    /// when no verse has that id.
    async fn verse(
        ctx: &GraphQLContext,
        id: Option<i32>,
    ) -> FieldResult<Option<Vec<Option<VerseData>>>> {
        let verses = match id {
            Some(id) => {
                let verse = ctx.verses.find_unique(id).await.map_err(to_field_error)?;
                vec![verse.map(VerseData::from)]
            }
            None => ctx
                .verses
                .find_many()
                .await
                .map_err(to_field_error)?
                .into_iter()
                .map(|verse| Some(verse.into()))
                .collect(),
        };

        Ok(Some(verses))
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Create the verse, or overwrite it if the id already exists
    async fn verse(
        ctx: &GraphQLContext,
        id: i32,
        title: String,
        content: String,
    ) -> FieldResult<Option<VerseData>> {
        let verse = ctx
            .verses
            .upsert(Verse { id, title, content })
            .await
            .map_err(to_field_error)?;

        Ok(Some(verse.into()))
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
