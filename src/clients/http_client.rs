//! HTTP client for WordPress REST API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! read requests against one WordPress installation.

use std::collections::HashMap;

use base64::prelude::*;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::InstallConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Path appended to the site URL to reach the REST routes.
pub const REST_BASE_PATH: &str = "/wp-json/wp/v2/";

/// HTTP client for one WordPress installation.
///
/// The client handles:
/// - Base URI construction (`<url>/wp-json/wp/v2/`)
/// - HTTP Basic authentication with the installation's credentials
/// - Default headers including User-Agent
///
/// There is no retry and no timeout beyond the transport default. Failures
/// are returned to the caller as [`HttpError`].
///
/// # Example
///
/// ```rust,ignore
/// use wp_models::clients::{HttpClient, HttpRequest};
///
/// let install = config.install(&Namespace::default())?;
/// let client = HttpClient::new(&install, None);
///
/// let request = HttpRequest::builder("posts").query_param("per_page", "5").build();
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://blog.example.com/wp-json/wp/v2/`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for an installation.
    ///
    /// # Arguments
    ///
    /// * `install` - The url and credentials of the installation
    /// * `user_agent_prefix` - Optional prefix for the User-Agent header
    #[must_use]
    pub fn new(install: &InstallConfig, user_agent_prefix: Option<&str>) -> Self {
        let base_uri = format!("{}{REST_BASE_PATH}", install.url().as_ref());

        let user_agent_prefix = user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("{user_agent_prefix}wp-models v{SDK_VERSION} | Rust {rust_version}");

        let credentials = format!("{}:{}", install.username(), install.password().as_ref());
        let authorization = format!("Basic {}", BASE64_STANDARD.encode(credentials));

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Authorization".to_string(), authorization);

        Self {
            client: reqwest::Client::new(),
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request could not be sent or the
    /// body could not be read, and [`HttpError::Response`] for non-2xx
    /// responses.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = format!("{}{}", self.base_uri, request.path.trim_start_matches('/'));

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = self.client.get(&url);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        tracing::debug!(
            "GET {} with {} query parameter(s)",
            request.path,
            request.query.len()
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, res_headers, body);
        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError::from_body(
            code,
            &response.body,
        )))
    }

    /// Sends a GET request for `path` with the given query.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, HttpError> {
        self.request(HttpRequest::builder(path).query(query).build())
            .await
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Namespace, WordPressConfig};

    fn create_install(url: &str) -> InstallConfig {
        WordPressConfig::builder()
            .install("default", url, "editor", "app-password")
            .build()
            .install(&Namespace::default())
            .unwrap()
    }

    #[test]
    fn test_base_uri_appends_rest_path() {
        let client = HttpClient::new(&create_install("https://blog.example.com/"), None);
        assert_eq!(client.base_uri(), "https://blog.example.com/wp-json/wp/v2/");
    }

    #[test]
    fn test_basic_auth_header() {
        let client = HttpClient::new(&create_install("https://blog.example.com"), None);

        let expected = format!("Basic {}", BASE64_STANDARD.encode("editor:app-password"));
        assert_eq!(client.default_headers().get("Authorization"), Some(&expected));
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_install("https://blog.example.com"), None);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("wp-models v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client = HttpClient::new(
            &create_install("https://blog.example.com"),
            Some("MySite/1.0"),
        );

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MySite/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_install("https://blog.example.com"), None);

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_request_sends_basic_auth_and_query() {
        use wiremock::matchers::{header, method, path, query_param};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;
        let expected = format!("Basic {}", BASE64_STANDARD.encode("editor:app-password"));

        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/posts"))
            .and(header("Authorization", expected.as_str()))
            .and(query_param("per_page", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&create_install(&mock_server.uri()), None);
        let response = client
            .get("posts", vec![("per_page".to_string(), "5".to_string())])
            .await
            .unwrap();

        assert_eq!(response.code, 200);
        assert_eq!(response.body, "[]");
    }

    #[tokio::test]
    async fn test_request_maps_non_2xx_to_response_error() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/posts/99"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "code": "rest_post_invalid_id",
                "message": "Invalid post ID.",
                "data": {"status": 404}
            })))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(&create_install(&mock_server.uri()), None);
        let result = client.get("posts/99", Vec::new()).await;

        match result {
            Err(HttpError::Response(e)) => {
                assert_eq!(e.code, 404);
                assert_eq!(e.error_code.as_deref(), Some("rest_post_invalid_id"));
            }
            other => panic!("Expected response error, got {other:?}"),
        }
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
