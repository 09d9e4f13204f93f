//! HTTP request types.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing read requests against the WordPress REST API.

use std::collections::HashMap;

/// A GET request to be sent to the WordPress REST API.
///
/// The query is an ordered list of pairs so parameters reach the wire in the
/// order they were added.
///
/// # Example
///
/// ```rust
/// use wp_models::clients::HttpRequest;
///
/// let request = HttpRequest::builder("posts")
///     .query_param("per_page", "5")
///     .query_param("search", "rust")
///     .build();
///
/// assert_eq!(request.path, "posts");
/// assert_eq!(request.query[0], ("per_page".to_string(), "5".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The path (relative to the REST base URL) for this request.
    pub path: String,
    /// Query parameters in wire order.
    pub query: Vec<(String, String)>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for a request to `path`.
    #[must_use]
    pub fn builder(path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(path)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    query: Vec<(String, String)>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            extra_headers: None,
        }
    }

    /// Replaces all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            path: self.path,
            query: self.query,
            extra_headers: self.extra_headers,
        }
    }
}
