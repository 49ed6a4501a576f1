//! Workload definition and errors.

use serde::{Deserialize, Serialize};

use crate::config::RouteConfig;

/// Workload manifest - explicit configuration for a deployable unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadManifest {
    /// Unique name for this workload.
    pub name: String,
    /// Semantic version.
    pub version: String,
    /// Routes this workload handles.
    pub routes: Vec<RouteConfig>,
}

impl WorkloadManifest {
    /// Create a new workload manifest.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            routes: Vec::new(),
        }
    }

    /// Add a route to this workload.
    pub fn with_route(mut self, route: RouteConfig) -> Self {
        self.routes.push(route);
        self
    }

    /// Find the route serving `path`.
    pub fn route_for(&self, path: &str) -> Option<&RouteConfig> {
        self.routes.iter().find(|r| r.matches_path(path))
    }
}

/// Error type for workload operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),

    #[error("Method {0} not allowed")]
    MethodNotAllowed(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Section '{0}' failed: {1}")]
    SectionFailed(String, String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WorkloadError {
    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MethodNotAllowed(_) => 405,
            Self::BadRequest(_) => 400,
            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_routes() {
        let manifest = WorkloadManifest::new("sell-products", "0.1.0")
            .with_route(RouteConfig::new("/sell", "handle_sell").with_methods(vec!["GET", "POST"]));

        let route = manifest.route_for("/sell?form=open").unwrap();
        assert_eq!(route.handler, "handle_sell");
        assert!(manifest.route_for("/products").is_none());
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(WorkloadError::MethodNotAllowed("PUT".into()).status_code(), 405);
        assert_eq!(WorkloadError::BadRequest("bad".into()).status_code(), 400);
        assert_eq!(WorkloadError::ShellNotSent.status_code(), 500);
    }
}
