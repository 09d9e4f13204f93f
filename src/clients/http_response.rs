//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type for accessing status,
//! headers and body of a WordPress REST API response.

use std::collections::HashMap;

/// Header carrying the total number of matching items.
pub const TOTAL_HEADER: &str = "x-wp-total";

/// Header carrying the total number of pages for the current `per_page`.
pub const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";

/// An HTTP response from the WordPress REST API.
///
/// The body is kept as raw text. Decoding is left to the caller through
/// [`HttpResponse::json`] so that malformed payloads surface as decode errors
/// rather than being silently replaced.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the total item count from the `X-WP-Total` header.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.header(TOTAL_HEADER)
            .and_then(|value| value.trim().parse().ok())
    }

    /// Returns the page count from the `X-WP-TotalPages` header.
    #[must_use]
    pub fn total_pages(&self) -> Option<u64> {
        self.header(TOTAL_PAGES_HEADER)
            .and_then(|value| value.trim().parse().ok())
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
