pub mod snipe;

pub use snipe::Snipe;
