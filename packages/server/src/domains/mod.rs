// Business domains
pub mod snipes;
pub mod verses;
