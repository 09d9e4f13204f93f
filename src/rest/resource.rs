//! Resource descriptors.
//!
//! A [`Resource`] is a compile-time description of one REST collection: its
//! wire name, the configuration namespace it reads credentials from, the query
//! fields it accepts, the state transforms it applies and the relations it
//! declares. Descriptors are zero-sized marker types; all runtime state lives
//! in [`Model`](crate::rest::Model).
//!
//! # Example: Declaring a Resource
//!
//! ```rust
//! use serde::Deserialize;
//! use wp_models::rest::{QueryState, Resource, Sortable, StateTransform};
//!
//! #[derive(Debug, Deserialize)]
//! pub struct Comment {
//!     pub id: u64,
//!     pub post: Option<u64>,
//! }
//!
//! pub struct Comments;
//!
//! impl Resource for Comments {
//!     type Entity = Comment;
//!
//!     const NAME: &'static str = "comments";
//!     const TRANSFORMS: &'static [&'static dyn StateTransform] = &[&Sortable];
//!
//!     fn declare(state: &mut QueryState) {
//!         state.declare("post").declare("status");
//!     }
//! }
//!
//! let state = Comments::initial_state();
//! assert!(state.is_declared("post"));
//! assert!(state.is_declared("sorting"));
//! ```

use serde::de::DeserializeOwned;

use crate::config::Namespace;
use crate::error::ConfigError;
use crate::rest::relation::Relation;
use crate::rest::state::{QueryState, StateTransform};

/// A REST collection that can be mapped onto [`Model`](crate::rest::Model)s.
pub trait Resource: Send + Sync + Sized + 'static {
    /// Typed representation of one item of this resource.
    type Entity: DeserializeOwned;

    /// The wire name of the collection (e.g. `posts`).
    ///
    /// An empty name marks a resource without a concrete endpoint; fetching
    /// it fails with [`ResourceError::MissingEndpoint`](crate::rest::ResourceError::MissingEndpoint).
    const NAME: &'static str;

    /// The configuration namespace credentials are read from.
    ///
    /// The generic `"wordpress"` namespace maps to the default installation.
    const NAMESPACE: &'static str = Namespace::GENERIC;

    /// Relations this resource declares.
    const RELATIONS: &'static [Relation] = &[];

    /// Transforms applied to incoming state before each merge.
    const TRANSFORMS: &'static [&'static dyn StateTransform] = &[];

    /// Declares resource-specific query fields on top of the base fields.
    fn declare(_state: &mut QueryState) {}

    /// Builds the initial query state: base fields, resource fields, then
    /// fields needed by the transforms.
    #[must_use]
    fn initial_state() -> QueryState {
        let mut state = QueryState::with_base_fields();
        Self::declare(&mut state);
        for transform in Self::TRANSFORMS {
            transform.declare(&mut state);
        }
        state
    }

    /// Resolves [`Resource::NAMESPACE`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNamespace`] if the declared namespace is
    /// not a valid name.
    fn namespace() -> Result<Namespace, ConfigError> {
        Namespace::new(Self::NAMESPACE)
    }

    /// Looks up a declared relation by name.
    #[must_use]
    fn relation(name: &str) -> Option<&'static Relation> {
        Self::RELATIONS.iter().find(|r| r.name == name)
    }
}
