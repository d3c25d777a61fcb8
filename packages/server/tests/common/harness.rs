//! Test harness that drives the full router over in-memory stores.
//!
//! Requests go through `tower::ServiceExt::oneshot`, so every middleware
//! layer runs exactly as it does behind a real listener.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use verses_core::domains::verses::Verse;
use verses_core::kernel::{MockSnipeStore, MockVerseStore, TestDependencies};
use verses_core::server::build_app;
use verses_core::{AppEnv, Config};

pub const TEST_API_KEY: &str = "test-api-key";

/// Status and parsed JSON body of a response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    /// `Value::Null` when the body is empty or not JSON
    pub body: Value,
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        port: 0,
        server_auth: Some(TEST_API_KEY.to_string()),
        app_env: AppEnv::Test,
    }
}

pub struct TestHarness {
    pub deps: TestDependencies,
    app: Router,
}

impl TestHarness {
    /// Harness with empty stores
    pub fn new() -> Self {
        Self::with_config(test_config(), TestDependencies::new())
    }

    /// Harness whose verse store starts with `verses`
    pub fn with_verses(verses: Vec<Verse>) -> Self {
        let deps = TestDependencies::new().mock_verses(MockVerseStore::new().with_verses(verses));
        Self::with_config(test_config(), deps)
    }

    pub fn with_snipes(snipes: MockSnipeStore) -> Self {
        Self::with_config(test_config(), TestDependencies::new().mock_snipes(snipes))
    }

    pub fn with_config(config: Config, deps: TestDependencies) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let app = build_app(&config, deps.server_deps());
        Self { deps, app }
    }

    /// Make the verse store reject every call
    pub fn fail_verses(&self, message: &str) {
        self.deps.verses.fail_with(message);
    }

    /// Send a request carrying the valid API key
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        self.send_with_key(method, uri, Some(TEST_API_KEY), body).await
    }

    pub async fn send_with_key(
        &self,
        method: Method,
        uri: &str,
        api_key: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(key) = api_key {
            builder = builder.header("authorization", key);
        }

        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
        }
    }

    /// POST a GraphQL document with the valid API key
    pub async fn graphql(&self, query: &str, variables: Value) -> TestResponse {
        self.graphql_with_key(query, variables, Some(TEST_API_KEY))
            .await
    }

    pub async fn graphql_with_key(
        &self,
        query: &str,
        variables: Value,
        api_key: Option<&str>,
    ) -> TestResponse {
        self.send_with_key(
            Method::POST,
            "/graphql",
            api_key,
            Some(json!({ "query": query, "variables": variables })),
        )
        .await
    }
}
