//! HTTP transport for WordPress REST API communication.
//!
//! This module provides the transport layer the resource models call through.
//! It owns URL construction, authentication and response capture; it knows
//! nothing about resources or query state.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for one installation
//! - [`HttpRequest`]: A GET request with an ordered query
//! - [`HttpResponse`]: Status, headers and raw body of a response
//! - [`HttpError`]: Transport failures (network errors and non-2xx responses)
//!
//! # Example
//!
//! ```rust,ignore
//! use wp_models::{Namespace, WordPressConfig};
//! use wp_models::clients::{HttpClient, HttpRequest};
//!
//! let config = WordPressConfig::from_env();
//! let install = config.install(&Namespace::default())?;
//! let client = HttpClient::new(&install, config.user_agent_prefix());
//!
//! let request = HttpRequest::builder("posts")
//!     .query_param("per_page", "5")
//!     .build();
//!
//! let response = client.request(request).await?;
//! println!("{} posts in total", response.total().unwrap_or(0));
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, REST_BASE_PATH, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, TOTAL_HEADER, TOTAL_PAGES_HEADER};
