//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::common::auth::ApiKeyGate;
use crate::config::Config;
use crate::kernel::ServerDeps;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::{graphql_api_key_middleware, rest_api_key_middleware};
use crate::server::routes::{
    graphql_handler, graphql_playground, health_handler, snipe_routes, verse_routes,
    GraphQLState,
};

/// A REST resource mounted under a path prefix
pub struct RouteEntry {
    pub prefix: &'static str,
    pub build: fn(&ServerDeps) -> Router,
    /// Requires the API key when set
    pub protected: bool,
}

/// Every REST resource the server exposes
pub const REST_ROUTES: &[RouteEntry] = &[
    RouteEntry {
        prefix: "/verses",
        build: verse_routes,
        protected: true,
    },
    // Existing clients read snipes without a key
    RouteEntry {
        prefix: "/snipes",
        build: snipe_routes,
        protected: false,
    },
];

/// Build the Axum application router
///
/// The store capabilities in `deps` are handed to each route factory and to
/// the GraphQL context; nothing reads the environment past this point.
pub fn build_app(config: &Config, deps: ServerDeps) -> Router {
    let gate = ApiKeyGate::new(config.server_auth.clone());
    if config.server_auth.is_none() {
        tracing::warn!("SERVER_AUTH is not set; every protected request will be rejected");
    }

    // Health check (no API key)
    let mut router = Router::new().route("/", get(health_handler));

    for entry in REST_ROUTES {
        let mut routes = (entry.build)(&deps);
        if entry.protected {
            routes = routes.route_layer(middleware::from_fn_with_state(
                gate.clone(),
                rest_api_key_middleware,
            ));
        }
        router = router.nest(entry.prefix, routes);
        info!(
            prefix = entry.prefix,
            protected = entry.protected,
            "Registered REST routes"
        );
    }

    // GraphQL endpoint, gated before the body is parsed
    let graphql_state = GraphQLState {
        schema: Arc::new(create_schema()),
        context: Arc::new(GraphQLContext::new(&deps)),
    };
    let graphql = Router::new()
        .route(
            "/graphql",
            post(graphql_handler).route_layer(middleware::from_fn_with_state(
                gate,
                graphql_api_key_middleware,
            )),
        )
        .with_state(graphql_state);
    router = router.merge(graphql);

    // GraphQL playground only in development
    if config.is_development() {
        router = router.route("/playground", get(graphql_playground));
        info!("GraphQL playground enabled at /playground");
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    router
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
