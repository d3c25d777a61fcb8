// HTTP routes
pub mod graphql;
pub mod health;
pub mod snipes;
pub mod verses;

pub use graphql::*;
pub use health::*;
pub use snipes::*;
pub use verses::*;
