// Verses API - Core
//
// REST and GraphQL surfaces over a relational store of verses and snipes.
// Both surfaces share one API key gate and one set of store capabilities.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
