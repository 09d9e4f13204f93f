//! Post resource implementation.
//!
//! This module provides the [`Posts`] resource descriptor and the [`Post`]
//! entity. Posts are the dated, categorized entries of a WordPress site.
//!
//! # Query Fields
//!
//! On top of the base fields, posts accept `status`, `categories`, `tags` and
//! `sticky`, plus the `sorting` shorthand.
//!
//! # Relations
//!
//! | Relation | Target | Via |
//! |----------|--------|-----|
//! | `featured_image` | media | `featured_media` id |
//! | `featured_image_url` | media | `featured_media` id, picks `source_url` |
//! | `author` | users | `author` id |
//! | `categories` | categories | `categories` ids as `include` |
//! | `tags` | tags | `tags` ids as `include` |
//! | `attachments` | media | own `id` as `parent` |
//!
//! # Example
//!
//! ```rust,ignore
//! use wp_models::resources::Posts;
//!
//! let posts = Model::<Posts>::new(config)?
//!     .with_state([("categories", json!([4])), ("sorting", json!("date,desc"))]);
//!
//! for post in posts.fetch_items().await? {
//!     let entity = post.entity()?.unwrap();
//!     println!("{}", entity.title.map(|t| t.rendered).unwrap_or_default());
//!
//!     for tag in post.tags().await? {
//!         println!("  #{}", tag["slug"]);
//!     }
//! }
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{PostStatus, Rendered};
use super::{Categories, Media, Tags, Users};
use crate::rest::{Model, QueryState, Relation, Resource, ResourceError, Sortable, StateTransform};

/// The posts collection (`wp/v2/posts`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Posts;

impl Resource for Posts {
    type Entity = Post;

    const NAME: &'static str = "posts";

    const RELATIONS: &'static [Relation] = &[
        Relation::one("featured_image", "featured_media", "media"),
        Relation::one("featured_image_url", "featured_media", "media").picking("source_url"),
        Relation::one("author", "author", "users"),
        Relation::many("categories", "categories", "categories", "include"),
        Relation::many("tags", "tags", "tags", "include"),
        Relation::many("attachments", "id", "media", "parent"),
    ];

    const TRANSFORMS: &'static [&'static dyn StateTransform] = &[&Sortable];

    fn declare(state: &mut QueryState) {
        state
            .declare("status")
            .declare("categories")
            .declare("tags")
            .declare("sticky")
            .declare("author");
    }
}

/// A post.
///
/// Dates are in the site's local time zone; the `*_gmt` variants are UTC.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Post {
    /// The unique identifier of the post.
    pub id: u64,

    /// When the post was published.
    #[serde(default)]
    pub date: Option<NaiveDateTime>,

    /// When the post was published, in UTC.
    #[serde(default)]
    pub date_gmt: Option<NaiveDateTime>,

    /// When the post was last modified.
    #[serde(default)]
    pub modified: Option<NaiveDateTime>,

    /// When the post was last modified, in UTC.
    #[serde(default)]
    pub modified_gmt: Option<NaiveDateTime>,

    /// The URL-friendly name.
    #[serde(default)]
    pub slug: Option<String>,

    /// The publication status.
    #[serde(default)]
    pub status: Option<PostStatus>,

    /// The public URL.
    #[serde(default)]
    pub link: Option<String>,

    /// The globally unique identifier.
    #[serde(default)]
    pub guid: Option<Rendered>,

    /// The title.
    #[serde(default)]
    pub title: Option<Rendered>,

    /// The body.
    #[serde(default)]
    pub content: Option<Rendered>,

    /// The excerpt.
    #[serde(default)]
    pub excerpt: Option<Rendered>,

    /// The id of the author.
    #[serde(default)]
    pub author: Option<u64>,

    /// The id of the featured media item; 0 when there is none.
    #[serde(default)]
    pub featured_media: Option<u64>,

    /// `open` or `closed`.
    #[serde(default)]
    pub comment_status: Option<String>,

    /// `open` or `closed`.
    #[serde(default)]
    pub ping_status: Option<String>,

    /// Whether the post is pinned to the front page.
    #[serde(default)]
    pub sticky: Option<bool>,

    /// The theme template used to display the post.
    #[serde(default)]
    pub template: Option<String>,

    /// The post format (`standard`, `aside`, ...).
    #[serde(default)]
    pub format: Option<String>,

    /// Ids of the assigned categories.
    #[serde(default)]
    pub categories: Vec<u64>,

    /// Ids of the assigned tags.
    #[serde(default)]
    pub tags: Vec<u64>,
}

impl Model<Posts> {
    /// Returns the featured media item.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the media lookup fails.
    pub async fn featured_image(&self) -> Result<Option<Model<Media>>, ResourceError> {
        self.related_one("featured_image").await
    }

    /// Returns the `source_url` of the featured media item.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the media lookup fails.
    pub async fn featured_image_url(&self) -> Result<Option<String>, ResourceError> {
        Ok(self
            .related_value::<Media>("featured_image_url")
            .await?
            .and_then(|url| url.as_str().map(str::to_string)))
    }

    /// Returns the author.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the user lookup fails.
    pub async fn author(&self) -> Result<Option<Model<Users>>, ResourceError> {
        self.related_one("author").await
    }

    /// Returns the assigned categories.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the category query fails.
    pub async fn categories(&self) -> Result<Vec<Model<Categories>>, ResourceError> {
        self.related_many("categories").await
    }

    /// Returns the assigned tags.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the tag query fails.
    pub async fn tags(&self) -> Result<Vec<Model<Tags>>, ResourceError> {
        self.related_many("tags").await
    }

    /// Returns the media items attached to this post.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the media query fails.
    pub async fn attachments(&self) -> Result<Vec<Model<Media>>, ResourceError> {
        self.related_many("attachments").await
    }
}
