//! # WordPress REST Models
//!
//! A Rust library that maps WordPress REST API collections (posts, pages,
//! media, users, categories, tags) onto typed, queryable models.
//!
//! ## Overview
//!
//! This library provides:
//! - Namespaced installation settings via [`WordPressConfig`] and [`WordPressConfigBuilder`]
//! - Validated newtypes for namespaces, site URLs and passwords
//! - A closed-schema [`QueryState`](rest::QueryState) per resource
//! - A generic [`Model`] that fetches single items, id batches and collections
//! - Declared relations between resources, resolved on demand
//! - The `"field,direction"` sorting shorthand via [`Sortable`](rest::Sortable)
//! - An async HTTP client with Basic authentication
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use wp_models::resources::Posts;
//! use wp_models::{Model, WordPressConfig};
//!
//! // One installation under the default namespace
//! let config = Arc::new(
//!     WordPressConfig::builder()
//!         .install("default", "https://blog.example.com", "editor", "app-password")
//!         .build(),
//! );
//!
//! let posts = Model::<Posts>::new(config)
//!     .unwrap()
//!     .with_state([("search", json!("rust")), ("limit", json!(5))]);
//!
//! assert_eq!(posts.endpoint(), "posts");
//! assert_eq!(
//!     posts.request_options(),
//!     vec![
//!         ("per_page".to_string(), "5".to_string()),
//!         ("search".to_string(), "rust".to_string()),
//!     ]
//! );
//! ```
//!
//! ## Configuration From the Environment
//!
//! Settings are read from `<prefix>_<namespace>_{url,username,password}`:
//!
//! ```text
//! WORDPRESS_DEFAULT_URL=https://blog.example.com
//! WORDPRESS_DEFAULT_USERNAME=editor
//! WORDPRESS_DEFAULT_PASSWORD=app-password
//! WORDPRESS_INTRANET_URL=https://intranet.example.com
//! ...
//! ```
//!
//! ```rust,ignore
//! let config = Arc::new(WordPressConfig::from_env());
//! let internal = Model::<Pages>::in_namespace(config, Namespace::new("intranet")?);
//! ```
//!
//! ## Fetching
//!
//! ```rust,ignore
//! use wp_models::resources::{Posts, Users};
//!
//! // Collection: one page of results
//! let recent = Model::<Posts>::new(Arc::clone(&config))?
//!     .with_state([("sorting", json!("date,desc"))])
//!     .fetch_items()
//!     .await?;
//!
//! // Batch: one slot per id, missing ids are None
//! let slots = Model::<Posts>::new(Arc::clone(&config))?
//!     .with_state([("id", json!([5, 99]))])
//!     .fetch()
//!     .await?;
//!
//! // Relations
//! for post in &recent {
//!     if let Some(author) = post.author().await? {
//!         let user = author.entity()?.unwrap();
//!         println!("{}", user.name.unwrap_or_default());
//!     }
//! }
//! ```
//!
//! ## Custom Resources
//!
//! Implement [`Resource`] for a marker type to map any other collection,
//! including custom post types. See [`rest::Resource`].

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{InstallConfig, Namespace, Password, SiteUrl, WordPressConfig, WordPressConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{HttpClient, HttpError, HttpRequest, HttpRequestBuilder, HttpResponse, HttpResponseError};

// Re-export resource model types
pub use rest::{resources, Model, Resource, ResourceError};
