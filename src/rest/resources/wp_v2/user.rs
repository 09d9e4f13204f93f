//! User resource implementation.
//!
//! Users are the authors and staff accounts of a site. Only public fields
//! are returned unless the authenticated user may list users in the `edit`
//! context.
//!
//! # Example
//!
//! ```rust,ignore
//! use wp_models::resources::Users;
//!
//! let authors = Model::<Users>::new(config)?.with_state([("who", json!("authors"))]);
//! for author in authors.fetch_items().await? {
//!     println!("{} wrote {} posts", author["name"], author.posts().await?.len());
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Posts;
use crate::rest::{Model, QueryState, Relation, Resource, ResourceError, Sortable, StateTransform};

/// The users collection (`wp/v2/users`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Users;

impl Resource for Users {
    type Entity = User;

    const NAME: &'static str = "users";

    const RELATIONS: &'static [Relation] = &[Relation::many("posts", "id", "posts", "author")];

    const TRANSFORMS: &'static [&'static dyn StateTransform] = &[&Sortable];

    fn declare(state: &mut QueryState) {
        state.declare("slug").declare("roles").declare("who");
    }
}

/// A user.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct User {
    /// The unique identifier of the user.
    pub id: u64,

    /// The display name.
    #[serde(default)]
    pub name: Option<String>,

    /// The user's website.
    #[serde(default)]
    pub url: Option<String>,

    /// The biographical info.
    #[serde(default)]
    pub description: Option<String>,

    /// The author archive URL.
    #[serde(default)]
    pub link: Option<String>,

    /// The URL-friendly name.
    #[serde(default)]
    pub slug: Option<String>,

    /// Avatar URLs keyed by pixel size.
    #[serde(default)]
    pub avatar_urls: HashMap<String, String>,

    /// Assigned roles, only present in the `edit` context.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Model<Users> {
    /// Returns the posts authored by this user.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the post query fails.
    pub async fn posts(&self) -> Result<Vec<Model<Posts>>, ResourceError> {
        self.related_many("posts").await
    }
}
