use crate::{AppState, handlers, router_config::RouterConfig};
use axum::{Router, routing::get};

/// Page Router Module
///
/// Registers one `GET` route per path the history strategy exposes to the
/// server. In web mode that is every route path under the base; in hash mode it
/// is the base alone, since the route travels in the fragment.
///
/// Paths are literal and unique (the route table rejects anything else), so
/// registering them verbatim cannot collide.
pub fn page_routes(router: &RouterConfig) -> Router<AppState> {
    router
        .server_paths()
        .into_iter()
        .fold(Router::new(), |app, path| {
            app.route(&path, get(handlers::serve_view))
        })
}
