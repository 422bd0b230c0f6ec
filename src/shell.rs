use std::{fs, io, path::Path};

use crate::route_table::Route;

/// Built-in document served when no shell file is configured.
const DEFAULT_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <base href="%BASE%" />
    <title>%ROUTE_NAME%</title>
  </head>
  <body>
    <div id="app" data-route="%ROUTE_NAME%" data-view="%VIEW%" data-component="%COMPONENT%"></div>
  </body>
</html>
"#;

const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head><meta charset="utf-8" /><title>Not Found</title></head>
  <body><h1>404</h1><p>No page at this address.</p></body>
</html>
"#;

/// AppShell
///
/// The HTML document returned for every client-side route. Placeholders
/// (`%BASE%`, `%ROUTE_NAME%`, `%VIEW%`, `%COMPONENT%`) are substituted with the
/// resolved route so the client bootstraps on the right view.
#[derive(Debug, Clone)]
pub struct AppShell {
    template: String,
}

impl Default for AppShell {
    fn default() -> Self {
        Self::from_template(DEFAULT_SHELL)
    }
}

impl AppShell {
    pub fn from_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Reads the shell template from disk (typically the front-end build's index.html).
    pub fn load(path: &Path) -> io::Result<Self> {
        let template = fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), bytes = template.len(), "app shell loaded");
        Ok(Self::from_template(template))
    }

    pub fn render(&self, route: &Route, base: &str) -> String {
        self.template
            .replace("%BASE%", &escape(base))
            .replace("%ROUTE_NAME%", &escape(route.name()))
            .replace("%VIEW%", &route.view().to_string())
            .replace("%COMPONENT%", route.view().component())
    }

    pub fn not_found(&self) -> &'static str {
        NOT_FOUND_PAGE
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
