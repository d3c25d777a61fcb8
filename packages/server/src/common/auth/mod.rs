//! Authorization for the Verses API
//!
//! A single shared secret gates every protected route, on both the REST and
//! GraphQL surfaces:
//!
//! ```rust
//! use verses_core::common::auth::ApiKeyGate;
//!
//! let gate = ApiKeyGate::new(Some("secret".to_string()));
//! assert!(gate.authorize(Some("secret")));
//! assert!(!gate.authorize(None));
//! ```

mod api_key;

pub use api_key::ApiKeyGate;
