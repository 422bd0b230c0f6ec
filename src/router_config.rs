use crate::{
    history::{History, HistoryMode},
    models::{ResolvedRoute, RouteDescriptor, RouteManifest},
    route_table::{Route, RouteTable, default_routes},
};

/// RouterConfig
///
/// The assembled navigation configuration: a history strategy plus the route
/// table. Built once at bootstrap and shared read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    history: History,
    routes: RouteTable,
}

/// create_router
///
/// Router factory: registers the table under the chosen history strategy.
pub fn create_router(history: History, routes: RouteTable) -> RouterConfig {
    for route in &routes {
        tracing::debug!(
            path = route.path(),
            name = route.name(),
            view = %route.view(),
            href = %history.href(route.path()),
            "route registered"
        );
    }
    RouterConfig { history, routes }
}

/// The application's own router: the fixed table under the given history.
pub fn application_router(history: History) -> RouterConfig {
    create_router(history, default_routes())
}

impl RouterConfig {
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// resolve
    ///
    /// Resolves a full browser location (path, query, fragment) to a route by
    /// applying the history strategy first.
    pub fn resolve(&self, location: &str) -> Option<&Route> {
        let path = self.history.route_path(location)?;
        self.routes.resolve(path)
    }

    /// href
    ///
    /// Reverse lookup: the browser link for a named route.
    pub fn href(&self, name: &str) -> Option<String> {
        self.routes
            .by_name(name)
            .map(|route| self.history.href(route.path()))
    }

    /// server_paths
    ///
    /// Request paths the HTTP host must answer with the application shell.
    /// In hash mode the routes never reach the server, so only the base is served.
    pub fn server_paths(&self) -> Vec<String> {
        match self.history.mode() {
            HistoryMode::Web => self
                .routes
                .iter()
                .map(|route| self.history.href(route.path()))
                .collect(),
            HistoryMode::Hash => vec![self.history.base().to_string()],
        }
    }

    pub fn manifest(&self) -> RouteManifest {
        RouteManifest {
            history: self.history.mode(),
            base: self.history.base().to_string(),
            routes: self
                .routes
                .iter()
                .map(|route| RouteDescriptor {
                    path: route.path().to_string(),
                    name: route.name().to_string(),
                    view: route.view(),
                    component: route.view().component().to_string(),
                    href: self.history.href(route.path()),
                })
                .collect(),
        }
    }

    /// Resolves `location` into the API output shape.
    pub fn resolve_descriptor(&self, location: &str) -> Option<ResolvedRoute> {
        self.resolve(location).map(|route| ResolvedRoute {
            location: location.to_string(),
            path: route.path().to_string(),
            name: route.name().to_string(),
            view: route.view(),
            component: route.view().component().to_string(),
        })
    }
}
