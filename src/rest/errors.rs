//! Resource-level error types.
//!
//! [`ResourceError`] is what every model operation returns on failure. It
//! separates configuration problems, transport failures, payloads that break
//! the API contract and misuse of the relation table.
//!
//! An empty result is never an error: a collection fetch that matches nothing
//! returns `Ok` with an empty list.
//!
//! # Example
//!
//! ```rust,ignore
//! use wp_models::rest::ResourceError;
//!
//! match posts.fetch().await {
//!     Ok(items) if items.is_empty() => println!("no matching posts"),
//!     Ok(items) => println!("{} posts", items.len()),
//!     Err(ResourceError::NotFound { resource, id }) => println!("{resource} {id} is gone"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Error type for resource model operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The installation settings for the model's namespace are unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request failed in transport or the server answered non-2xx.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A single-item lookup found nothing (HTTP 404 or an empty body).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The resource name (e.g. `posts`).
        resource: &'static str,
        /// The id that was requested.
        id: String,
    },

    /// The response body is not valid JSON.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        /// The resource name.
        resource: &'static str,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The response decoded, but not into the expected JSON shape.
    #[error("Unexpected {resource} response: expected a JSON {expected}")]
    UnexpectedShape {
        /// The resource name.
        resource: &'static str,
        /// The expected shape (`object` or `array`).
        expected: &'static str,
    },

    /// A decoded item carries no `id` field.
    #[error("{resource} item in response has no 'id' field")]
    MissingId {
        /// The resource name.
        resource: &'static str,
    },

    /// The `id` in the query state is neither a string nor a number.
    #[error("{resource} id {id} is not a string or a number")]
    InvalidId {
        /// The resource name.
        resource: &'static str,
        /// The offending id, rendered as JSON.
        id: String,
    },

    /// The resource has no concrete endpoint.
    #[error("Resource '{resource}' has no endpoint")]
    MissingEndpoint {
        /// The type name of the resource descriptor.
        resource: &'static str,
    },

    /// No relation with this name is declared for the resource.
    #[error("{resource} declares no relation named '{relation}'")]
    UnknownRelation {
        /// The resource name.
        resource: &'static str,
        /// The requested relation.
        relation: String,
    },

    /// The relation was resolved against a different target resource.
    #[error("Relation '{relation}' targets {expected}, not {actual}")]
    RelationTargetMismatch {
        /// The relation name.
        relation: &'static str,
        /// The resource the relation declares.
        expected: &'static str,
        /// The resource it was resolved with.
        actual: &'static str,
    },

    /// The relation filters on a field the target resource never declared.
    #[error("Relation '{relation}' filters on '{field}', which {resource} does not declare")]
    UndeclaredFilter {
        /// The relation name.
        relation: &'static str,
        /// The target resource name.
        resource: &'static str,
        /// The undeclared filter field.
        field: &'static str,
    },

    /// A batch worker task could not be joined.
    #[error("Batch lookup of {resource} failed: {message}")]
    Batch {
        /// The resource name.
        resource: &'static str,
        /// Description of the join failure.
        message: String,
    },
}

impl ResourceError {
    /// Maps a transport error of a single-item lookup to a resource error.
    ///
    /// A 404 becomes [`ResourceError::NotFound`]; everything else stays an
    /// [`ResourceError::Http`].
    #[must_use]
    pub fn from_http(error: HttpError, resource: &'static str, id: &str) -> Self {
        match error.status() {
            Some(404) => Self::NotFound {
                resource,
                id: id.to_string(),
            },
            _ => Self::Http(error),
        }
    }

    /// Returns `true` when the failure means "this item is not available"
    /// rather than "the response broke the contract".
    ///
    /// Batch lookups turn these into empty slots.
    #[must_use]
    pub const fn is_missing_item(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Http(_))
    }
}
