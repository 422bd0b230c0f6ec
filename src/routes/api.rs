use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// API Router Module
///
/// Read-only endpoints, no authentication. Everything here is derived from the
/// immutable router configuration.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Monitoring and load balancer checks.
        .route("/health", get(handlers::health))
        // GET /api/routes
        // The route table as published to the front-end.
        .route("/api/routes", get(handlers::list_routes))
        // GET /api/resolve?location=...
        // Location to route resolution under the active history mode.
        .route("/api/resolve", get(handlers::resolve_route))
}
