use std::{env, path::PathBuf};

use thiserror::Error;

use crate::history::{History, HistoryMode, ParseHistoryModeError};

/// AppConfig
///
/// Holds the application's entire configuration state. Immutable once loaded and
/// pulled into handlers through the shared `AppState`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Controls log formatting and shell requirements.
    pub env: Env,
    // Socket address the HTTP host listens on.
    pub bind_addr: String,
    // Navigation strategy the front-end is built with.
    pub history_mode: HistoryMode,
    // Base path the application is mounted under.
    pub router_base: String,
    // Front-end index.html. The built-in shell is used when unset.
    pub shell_path: Option<PathBuf>,
}

/// Env
///
/// Defines the runtime context: human-readable logs and the built-in shell in local
/// development, JSON logs and a mandatory shell file in production.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

/// First path segments owned by the API, health probe and documentation routes.
pub const RESERVED_PREFIXES: [&str; 4] = ["swagger-ui", "api-docs", "api", "health"];

/// ConfigError
///
/// Reasons a configuration is refused. `load()` turns any of these into a startup panic.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    HistoryMode(#[from] ParseHistoryModeError),
    #[error("ROUTER_BASE `{0}` must be a plain path outside the reserved prefixes")]
    InvalidBase(String),
    #[error("APP_SHELL_PATH must be set in production")]
    MissingShell,
}

impl Default for AppConfig {
    /// Safe values for test state setup, no environment needed.
    fn default() -> Self {
        Self {
            env: Env::Local,
            bind_addr: "127.0.0.1:3000".to_string(),
            history_mode: HistoryMode::Web,
            router_base: "/".to_string(),
            shell_path: None,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads the configuration from the process environment.
    ///
    /// # Panics
    /// Panics on any invalid or missing value so the process never starts half-configured.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
            .unwrap_or_else(|e| panic!("FATAL: invalid configuration: {e}"))
    }

    /// from_lookup
    ///
    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Environment Resolution
        // Anything other than an explicit "production" runs with local defaults.
        let env = match lookup("APP_ENV").as_deref() {
            Some("production") => Env::Production,
            _ => Env::Local,
        };

        // History Mode Resolution
        // Must match how the front-end bundle was built; unknown values are rejected.
        let history_mode = match lookup("HISTORY_MODE") {
            Some(raw) => raw.parse::<HistoryMode>()?,
            None => HistoryMode::Web,
        };

        // Router Base Resolution
        // The base must be a plain path and must not land inside a prefix the host
        // already serves, or the generated page routes overlap at startup.
        let router_base = lookup("ROUTER_BASE").unwrap_or_else(|| "/".to_string());
        if router_base
            .chars()
            .any(|c| matches!(c, '?' | '#' | '{' | '}' | '*' | ':') || c.is_whitespace())
            || is_reserved_base(&router_base)
        {
            return Err(ConfigError::InvalidBase(router_base));
        }

        // App Shell Resolution
        // Production serves the real front-end build and must name its index.html.
        // Local development may fall back to the built-in shell.
        let shell_path = lookup("APP_SHELL_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        if env == Env::Production && shell_path.is_none() {
            return Err(ConfigError::MissingShell);
        }

        Ok(Self {
            env,
            // Listener address, all interfaces on port 3000 by default.
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string()),
            history_mode,
            router_base,
            shell_path,
        })
    }

    /// The history strategy this configuration selects.
    pub fn history(&self) -> History {
        History::new(self.history_mode, &self.router_base)
    }
}

fn is_reserved_base(base: &str) -> bool {
    let first_segment = base.trim().trim_start_matches('/').split('/').next();
    first_segment.is_some_and(|segment| RESERVED_PREFIXES.iter().any(|reserved| *reserved == segment))
}
