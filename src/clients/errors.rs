//! HTTP-specific error types.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the WordPress API
//! - [`HttpError`]: Unified error type encompassing all transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use wp_models::clients::{HttpClient, HttpRequest, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// WordPress reports errors as `{"code": "...", "message": "...", "data": {...}}`.
/// The machine-readable `code` is kept in `error_code`, the human-readable
/// `message` becomes the error message. When the body is not in that format
/// the raw body text is used instead.
///
/// # Example
///
/// ```rust
/// use wp_models::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Invalid post ID.".to_string(),
///     error_code: Some("rest_post_invalid_id".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "HTTP 404: Invalid post ID.");
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The error message from the response body.
    pub message: String,
    /// The WordPress error code (e.g. `rest_post_invalid_id`).
    pub error_code: Option<String>,
}

impl HttpResponseError {
    /// Builds an error from a status code and the raw response body.
    #[must_use]
    pub fn from_body(code: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
        let field = |name: &str| {
            parsed
                .as_ref()
                .and_then(|v| v.get(name))
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string)
        };

        let message = field("message").unwrap_or_else(|| {
            if body.is_empty() {
                "empty response body".to_string()
            } else {
                body.to_string()
            }
        });

        Self {
            code,
            message,
            error_code: field("code"),
        }
    }
}

/// Unified error type for all transport errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network, DNS, TLS or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Network(_) => None,
        }
    }
}
