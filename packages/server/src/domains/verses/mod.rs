pub mod data;
pub mod models;

// Re-export commonly used types
pub use data::VerseData;
pub use models::{Verse, VerseIdInput};
