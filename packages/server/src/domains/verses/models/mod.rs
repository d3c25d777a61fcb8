pub mod verse;

pub use verse::{Verse, VerseIdInput};
