use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use crate::history::HistoryMode;

// --- Core Navigation Schemas ---

/// View
///
/// The closed set of page views the application can display. The front-end mounts
/// the component named by `component()` when the active route points at the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub enum View {
    Login,
    Home,
    Crud,
}

impl View {
    /// Every view, in declaration order.
    pub const ALL: [View; 3] = [View::Login, View::Home, View::Crud];

    /// The page component identifier the front-end bundle registers for this view.
    pub fn component(&self) -> &'static str {
        match self {
            View::Login => "LoginPage",
            View::Home => "HomePage",
            View::Crud => "CrudPage",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            View::Login => "Login",
            View::Home => "Home",
            View::Crud => "Crud",
        };
        f.write_str(name)
    }
}

// --- Query Payloads (Input Schemas) ---

/// ResolveQuery
///
/// Query parameters for the resolution endpoint (GET /api/resolve?location=...).
/// `location` is a full browser location: path, optional query, optional fragment.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolveQuery {
    pub location: String,
}

// --- Manifest Schemas (Output) ---

/// RouteDescriptor
///
/// One entry of the published route table, with the link the browser should use
/// under the active history mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RouteDescriptor {
    pub path: String,
    pub name: String,
    pub view: View,
    pub component: String,
    pub href: String,
}

/// RouteManifest
///
/// Output schema for GET /api/routes. Routes keep their declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RouteManifest {
    pub history: HistoryMode,
    pub base: String,
    pub routes: Vec<RouteDescriptor>,
}

/// ResolvedRoute
///
/// Output schema for GET /api/resolve. `path` is the in-app route path the
/// location resolved to after the history strategy was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ResolvedRoute {
    pub location: String,
    pub path: String,
    pub name: String,
    pub view: View,
    pub component: String,
}

/// ErrorResponse
///
/// JSON body returned alongside non-2xx statuses on the API surface.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
