use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::{
    RouterState, ShellState,
    models::{ErrorResponse, ResolveQuery, ResolvedRoute, RouteManifest},
};

// --- Page Handlers ---

/// serve_view
///
/// [Page Route] Answers a navigable path with the application shell, stamped
/// with the route the request URI resolves to. Any path that reaches this handler
/// was registered from the route table, so a miss means the table and the
/// registered paths disagree and is reported as not found.
pub async fn serve_view(
    State(router): State<RouterState>,
    State(shell): State<ShellState>,
    uri: Uri,
) -> Response {
    let location = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    match router.resolve(location) {
        Some(route) => {
            tracing::debug!(location, route = route.name(), view = %route.view(), "view served");
            Html(shell.render(route, router.history().base())).into_response()
        }
        None => not_found_page(&shell, location),
    }
}

/// fallback
///
/// Catch-all for paths that are not part of the URL space. Unknown addresses
/// get the not-found page rather than the shell.
pub async fn fallback(State(shell): State<ShellState>, uri: Uri) -> Response {
    not_found_page(&shell, uri.path())
}

fn not_found_page(shell: &ShellState, location: &str) -> Response {
    tracing::warn!(location, "no route matches location");
    (StatusCode::NOT_FOUND, Html(shell.not_found())).into_response()
}

// --- API Handlers ---

/// health
///
/// [API Route] Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = String))
)]
pub async fn health() -> &'static str {
    "ok"
}

/// list_routes
///
/// [API Route] Publishes the route table with the history mode and the link
/// for each route, in declaration order.
#[utoipa::path(
    get,
    path = "/api/routes",
    responses((status = 200, description = "Route manifest", body = RouteManifest))
)]
pub async fn list_routes(State(router): State<RouterState>) -> Json<RouteManifest> {
    Json(router.manifest())
}

/// resolve_route
///
/// [API Route] Resolves a full browser location under the active history mode.
#[utoipa::path(
    get,
    path = "/api/resolve",
    params(ResolveQuery),
    responses(
        (status = 200, description = "Resolved route", body = ResolvedRoute),
        (status = 404, description = "No route matches", body = ErrorResponse)
    )
)]
pub async fn resolve_route(
    State(router): State<RouterState>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<ResolvedRoute>, (StatusCode, Json<ErrorResponse>)> {
    router
        .resolve_descriptor(&query.location)
        .map(Json)
        .ok_or_else(|| {
            tracing::debug!(location = %query.location, "resolve miss");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("no route matches `{}`", query.location),
                }),
            )
        })
}
