use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use utoipa::ToSchema;

/// HistoryMode
///
/// Browser navigation strategy.
/// - `Web`: the route lives in the URL path (`/home`). Every route path must be
///   answered by the server with the application shell.
/// - `Hash`: the route lives in the fragment (`/#/home`). The server only ever
///   sees the base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum HistoryMode {
    #[default]
    Web,
    Hash,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown history mode `{0}` (expected `web` or `hash`)")]
pub struct ParseHistoryModeError(pub String);

impl FromStr for HistoryMode {
    type Err = ParseHistoryModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" | "history" => Ok(HistoryMode::Web),
            "hash" => Ok(HistoryMode::Hash),
            other => Err(ParseHistoryModeError(other.to_string())),
        }
    }
}

/// History
///
/// A history strategy bound to the base path the application is mounted under.
/// The base always starts and ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    mode: HistoryMode,
    base: String,
}

/// Path-based history mounted at `base`.
pub fn create_web_history(base: &str) -> History {
    History::new(HistoryMode::Web, base)
}

/// Fragment-based history mounted at `base`.
pub fn create_web_hash_history(base: &str) -> History {
    History::new(HistoryMode::Hash, base)
}

impl History {
    pub fn new(mode: HistoryMode, base: &str) -> Self {
        Self {
            mode,
            base: normalize_base(base),
        }
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// route_path
    ///
    /// Extracts the in-app route path from a full browser location. Returns `None`
    /// when the location is outside the base or the fragment is not a route.
    pub fn route_path<'a>(&self, location: &'a str) -> Option<&'a str> {
        match self.mode {
            HistoryMode::Web => {
                let path = location.split(['?', '#']).next().unwrap_or_default();
                self.strip_base(path)
            }
            HistoryMode::Hash => {
                let (path, fragment) = match location.split_once('#') {
                    Some((path, fragment)) => (path, Some(fragment)),
                    None => (location, None),
                };
                let path = path.split('?').next().unwrap_or_default();
                if self.strip_base(path)? != "/" {
                    return None;
                }
                let route = fragment
                    .map(|f| f.split('?').next().unwrap_or_default())
                    .unwrap_or_default();
                if route.is_empty() {
                    Some("/")
                } else if route.starts_with('/') {
                    Some(route)
                } else {
                    None
                }
            }
        }
    }

    /// href
    ///
    /// The link the browser navigates to for an in-app route path.
    pub fn href(&self, path: &str) -> String {
        match self.mode {
            HistoryMode::Web => {
                if path == "/" {
                    self.base.clone()
                } else {
                    format!("{}{}", self.base.trim_end_matches('/'), path)
                }
            }
            HistoryMode::Hash => format!("{}#{}", self.base, path),
        }
    }

    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        let prefix = self.base.trim_end_matches('/');
        let rest = path.strip_prefix(prefix)?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

impl Default for History {
    fn default() -> Self {
        create_web_history("/")
    }
}

fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
