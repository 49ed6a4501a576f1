//! Request context with typed parameters.

use std::collections::HashMap;

use crate::form::FormData;
use crate::lifecycle::TimingContext;

/// Unique request identifier for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        let id = format!(
            "{:x}-{:x}-{:x}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos(),
            rand::random::<u32>(),
            rand::random::<u32>()
        );
        Self(id)
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// HTTP headers.
pub type Headers = HashMap<String, String>;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl Method {
    /// Parse a method name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            "PATCH" => Some(Self::Patch),
            "HEAD" => Some(Self::Head),
            "OPTIONS" => Some(Self::Options),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

/// Typed request context passed to workload handlers.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request path without the query string.
    pub path: String,
    /// Decoded query string parameters.
    pub query: FormData,
    /// HTTP headers.
    pub headers: Headers,
    /// Timing context for observability.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Create a new request context.
    ///
    /// `path_with_query` may carry a query string, which is decoded into
    /// [`RequestContext::query`].
    pub fn new(method: Method, path_with_query: impl Into<String>) -> Self {
        let path_with_query = path_with_query.into();
        let (path, query) = match path_with_query.split_once('?') {
            Some((path, qs)) => (path.to_string(), FormData::parse(qs)),
            None => (path_with_query, FormData::default()),
        };

        Self {
            request_id: RequestId::generate(),
            method,
            path,
            query,
            headers: HashMap::new(),
            timing: TimingContext::new(),
        }
    }

    /// Attach a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Get a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name)
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == name_lower)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_unique() {
        let a = RequestId::generate();
        let b = RequestId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_method_parse() {
        assert_eq!(Method::parse("post"), Some(Method::Post));
        assert_eq!(Method::parse("GET"), Some(Method::Get));
        assert_eq!(Method::parse("BREW"), None);
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_context_splits_query() {
        let ctx = RequestContext::new(Method::Get, "/products?category=home&sort=sustainability");
        assert_eq!(ctx.path, "/products");
        assert_eq!(ctx.query_param("category"), Some("home"));
        assert_eq!(ctx.query_param("sort"), Some("sustainability"));
        assert_eq!(ctx.query_param("page"), None);
    }

    #[test]
    fn test_context_without_query() {
        let ctx = RequestContext::new(Method::Get, "/sell");
        assert_eq!(ctx.path, "/sell");
        assert_eq!(ctx.query, FormData::default());
    }

    #[test]
    fn test_header_case_insensitive() {
        let ctx = RequestContext::new(Method::Post, "/sell")
            .with_header("Content-Type", "application/x-www-form-urlencoded");
        assert_eq!(
            ctx.header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
    }
}
