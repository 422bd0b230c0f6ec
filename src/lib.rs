use axum::{Router, extract::FromRef, http::HeaderName};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core components: the route table, history strategy and their assembly.
// `shell` holds the document served for client-side routes; `config`, `models`
// and `handlers` follow the usual service split.
pub mod config;
pub mod handlers;
pub mod history;
pub mod models;
pub mod route_table;
pub mod router_config;
pub mod shell;

// Module for routing segregation (Pages, API).
pub mod routes;
use routes::{api, pages};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use history::{History, HistoryMode, create_web_hash_history, create_web_history};
pub use models::View;
pub use route_table::{Route, RouteTable, RouteTableError, default_routes};
pub use router_config::{RouterConfig, application_router};
pub use shell::AppShell;

/// ApiDoc
///
/// OpenAPI document for the JSON surface, served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::health, handlers::list_routes, handlers::resolve_route),
    components(
        schemas(
            models::View, models::RouteDescriptor, models::RouteManifest,
            models::ResolvedRoute, models::ErrorResponse, history::HistoryMode,
        )
    ),
    tags(
        (name = "portal-router", description = "Application route table")
    )
)]
struct ApiDoc;

/// Shared, read-only router configuration.
pub type RouterState = Arc<RouterConfig>;
/// Shared application shell document.
pub type ShellState = Arc<AppShell>;

/// AppState
///
/// The single immutable container shared across all incoming requests.
#[derive(Clone)]
pub struct AppState {
    /// Route table plus history strategy, assembled once at bootstrap.
    pub router: RouterState,
    /// The HTML document served for client-side routes.
    pub shell: ShellState,
    /// The loaded environment configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Assembles state around the application's own route table.
    pub fn new(config: AppConfig, shell: AppShell) -> Self {
        let router = Arc::new(application_router(config.history()));
        Self {
            router,
            shell: Arc::new(shell),
            config,
        }
    }
}

// --- Axum FromRef Extractor Implementations ---

// These implementations let handlers pull only the component they need from the
// shared AppState, e.g. `State<RouterState>` for the route table.

impl FromRef<AppState> for RouterState {
    fn from_ref(app_state: &AppState) -> RouterState {
        app_state.router.clone()
    }
}

impl FromRef<AppState> for ShellState {
    fn from_ref(app_state: &AppState) -> ShellState {
        app_state.shell.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the HTTP surface: the page routes derived from the route table, the
/// JSON API, the not-found fallback, and the observability layers.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for Request Correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Documentation: Serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // API Routes: health probe and the published route table.
        .merge(api::api_routes())
        // Page routes are generated, so they are built from the state's table.
        .merge(pages::page_routes(&state.router))
        // Anything outside the URL space gets the not-found page.
        .fallback(handlers::fallback)
        // Apply the Unified State to all routes.
        .with_state(state);

    // 3. Observability and Correlation Layers (Applied outermost/first)
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID Generation: a UUID for every incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request Tracing: one span per request, carrying the request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID Propagation: echo x-request-id back to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS Layer (Applied last)
        .layer(cors)
}

/// trace_span_logger
///
/// Span factory for `TraceLayer`: every log line of a request carries its
/// `x-request-id`.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
