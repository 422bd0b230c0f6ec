use std::collections::HashSet;

use thiserror::Error;

use crate::models::View;

/// Route
///
/// Binds one in-app URL path to a named view. Routes are declared once at startup
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    name: String,
    view: View,
}

impl Route {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view(&self) -> View {
        self.view
    }
}

/// RouteTableError
///
/// Construction failures. A table that builds successfully has unique paths,
/// unique names, and only absolute literal paths.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route table has no routes")]
    Empty,
    #[error("route path `{0}` must be absolute and literal")]
    InvalidPath(String),
    #[error("route path `{0}` is declared more than once")]
    DuplicatePath(String),
    #[error("route name `{0}` is declared more than once")]
    DuplicateName(String),
}

/// RouteTable
///
/// The ordered, validated set of navigable paths. Lookup is a linear scan; the
/// table is tiny and order is significant for the published manifest.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// new
    ///
    /// Validates and freezes the table.
    ///
    /// # Errors
    /// Returns the first violated invariant in declaration order.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        if routes.is_empty() {
            return Err(RouteTableError::Empty);
        }

        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        for route in &routes {
            if !is_literal_absolute(&route.path) {
                return Err(RouteTableError::InvalidPath(route.path.clone()));
            }
            if !paths.insert(route.path.as_str()) {
                return Err(RouteTableError::DuplicatePath(route.path.clone()));
            }
            if !names.insert(route.name.as_str()) {
                return Err(RouteTableError::DuplicateName(route.name.clone()));
            }
        }

        Ok(Self { routes })
    }

    /// resolve
    ///
    /// Exact match of an in-app path. Query and fragment are ignored, an empty
    /// path is the root, and one trailing slash is tolerated on non-root paths.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let path = normalize_path(path);
        self.routes.iter().find(|route| route.path == path)
    }

    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// default_routes
///
/// The application's fixed navigation table: the login screen at the root,
/// the landing page once signed in, and the record management page.
pub fn default_routes() -> RouteTable {
    RouteTable {
        routes: vec![
            Route::new("/", "Login", View::Login),
            Route::new("/home", "Home", View::Home),
            Route::new("/crud", "Crud", View::Crud),
        ],
    }
}

// Path segments may not carry router syntax: these paths are registered
// verbatim with the HTTP host. A trailing slash is only valid on the root,
// since `resolve` strips it before matching.
fn is_literal_absolute(path: &str) -> bool {
    path.starts_with('/')
        && (path == "/" || !path.ends_with('/'))
        && !path.contains("//")
        && !path
            .chars()
            .any(|c| matches!(c, '?' | '#' | '{' | '}' | '*' | ':') || c.is_whitespace())
}

// Only one trailing slash is dropped; `//` stays as is and matches nothing.
fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() && !trimmed.ends_with('/') => trimmed,
        _ => path,
    }
}
