//! Resource models for the WordPress REST API.
//!
//! This module maps REST collections onto typed query objects:
//!
//! - **[`QueryState`]**: a closed-schema set of query fields per resource
//! - **[`Resource`] trait**: a compile-time descriptor of one collection
//! - **[`Model`]**: a query over a resource, or one fetched item of it
//! - **Fetch pipeline**: batch, single and collection lookups plus totals
//! - **[`Relation`]s**: declared links between resources, resolved on demand
//! - **[`Sortable`]**: the `"field,direction"` sorting shorthand
//! - **[`ResourceError`]**: semantic error types for resource operations
//!
//! # Overview
//!
//! Concrete resources (posts, pages, media, users, categories, tags) live in
//! the [`resources`] submodule. Custom resources implement [`Resource`].
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use serde_json::json;
//! use wp_models::resources::Posts;
//! use wp_models::{Model, WordPressConfig};
//!
//! let config = Arc::new(WordPressConfig::from_env());
//!
//! // A page of published posts, newest first
//! let posts = Model::<Posts>::new(Arc::clone(&config))?
//!     .with_state([("status", json!("publish")), ("sorting", json!("date,desc"))]);
//!
//! for post in posts.fetch_items().await? {
//!     println!("{}: {}", post["id"], post["slug"]);
//!
//!     if let Some(author) = post.author().await? {
//!         println!("  by {}", author["name"]);
//!     }
//! }
//!
//! println!("{} posts in total", posts.total().await);
//! ```

mod endpoint;
mod errors;
mod fetch;
mod model;
mod relation;
mod resource;
mod sortable;
mod state;

pub mod resources;

pub use endpoint::{build_endpoint, request_options, PER_PAGE};
pub use errors::ResourceError;
pub use model::Model;
pub use relation::{Cardinality, Related, Relation};
pub use resource::Resource;
pub use sortable::{Sortable, SORTING_FIELD};
pub use state::{is_blank, QueryState, StateMap, StateTransform, BASE_FIELDS, DEFAULT_LIMIT};
