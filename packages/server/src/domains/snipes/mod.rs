pub mod models;

pub use models::Snipe;
