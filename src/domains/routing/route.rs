//! Navigation path scheme.
//!
//! `/` is the tool list, `/tool/<identifier>` is a tool view, anything else
//! is not found.

use std::fmt;

/// Path prefix of tool views.
pub const TOOL_PREFIX: &str = "/tool/";

/// A parsed navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The list of all tools.
    Home,
    /// A tool view, by identifier.
    Tool(String),
    /// Anything the scheme does not cover. Holds the normalized path.
    NotFound(String),
}

impl Route {
    /// Parse a navigation path.
    ///
    /// Query strings, fragments and trailing slashes are ignored. The
    /// identifier is taken verbatim, case included.
    pub fn parse(path: &str) -> Self {
        let path = normalize(path);

        if path == "/" {
            return Route::Home;
        }

        match path.strip_prefix(TOOL_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => Route::Tool(id.to_string()),
            _ => Route::NotFound(path),
        }
    }

    /// Path for a tool identifier.
    pub fn tool_path(id: &str) -> String {
        format!("{TOOL_PREFIX}{id}")
    }

    /// Canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Tool(id) => Self::tool_path(id),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn tool_id(&self) -> Option<&str> {
        match self {
            Route::Tool(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
