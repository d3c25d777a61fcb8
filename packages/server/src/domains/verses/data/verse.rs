use serde::{Deserialize, Serialize};

use crate::domains::verses::models::Verse;

/// GraphQL representation of a verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, juniper::GraphQLObject)]
#[graphql(name = "Verse", description = "A verse object")]
pub struct VerseData {
    pub id: i32,
    pub title: String,
    pub content: String,
}

impl From<Verse> for VerseData {
    fn from(verse: Verse) -> Self {
        Self {
            id: verse.id,
            title: verse.title,
            content: verse.content,
        }
    }
}
