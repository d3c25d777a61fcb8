//! Shared-secret check applied to every protected REST and GraphQL request.

/// Compares the caller's `authorization` header to the configured secret.
///
/// Built once from [`Config`](crate::Config) and cloned into each transport's
/// middleware. With no secret configured every request is rejected.
#[derive(Clone, Default)]
pub struct ApiKeyGate {
    expected: Option<String>,
}

impl ApiKeyGate {
    pub fn new(expected: Option<String>) -> Self {
        Self {
            expected: expected.filter(|secret| !secret.is_empty()),
        }
    }

    /// Whether `provided` matches the configured secret.
    ///
    /// Plain string equality, not constant-time.
    pub fn authorize(&self, provided: Option<&str>) -> bool {
        match (self.expected.as_deref(), provided) {
            (Some(expected), Some(provided)) => expected == provided,
            _ => false,
        }
    }
}

impl std::fmt::Debug for ApiKeyGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyGate")
            .field("configured", &self.expected.is_some())
            .finish()
    }
}
