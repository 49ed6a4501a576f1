//! Route configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a single route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Route pattern (e.g., "/products").
    pub pattern: String,
    /// Handler function name.
    pub handler: String,
    /// HTTP methods this route accepts.
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,
}

fn default_methods() -> Vec<String> {
    vec!["GET".to_string()]
}

impl RouteConfig {
    /// Create a new route configuration.
    pub fn new(pattern: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            handler: handler.into(),
            methods: default_methods(),
        }
    }

    /// Set allowed HTTP methods.
    pub fn with_methods(mut self, methods: Vec<&str>) -> Self {
        self.methods = methods.into_iter().map(String::from).collect();
        self
    }

    /// Check whether this route accepts the given method name.
    pub fn accepts(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m.eq_ignore_ascii_case(method))
    }

    /// Check whether a request path is served by this route.
    ///
    /// Trailing slashes and query strings are ignored.
    pub fn matches_path(&self, path: &str) -> bool {
        let path = path.split('?').next().unwrap_or("");
        let path = path.trim_end_matches('/');
        let pattern = self.pattern.trim_end_matches('/');
        path == pattern || (path.is_empty() && pattern.is_empty())
    }
}
