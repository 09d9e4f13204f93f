//! Concrete WordPress REST resources.
//!
//! Resources are grouped by REST namespace. The core `wp/v2` resources are
//! re-exported at this level:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports wp/v2)
//!   wp_v2/
//!     mod.rs         <- Posts, Pages, Media, Users, Categories, Tags
//! ```
//!
//! # Available Resources
//!
//! | Descriptor | Entity | Endpoint | Relations |
//! |------------|--------|----------|-----------|
//! | [`Posts`] | [`Post`] | `posts` | featured_image, featured_image_url, author, categories, tags, attachments |
//! | [`Pages`] | [`Page`] | `pages` | featured_image, featured_image_url, author, parent, children |
//! | [`Media`] | [`MediaItem`] | `media` | author |
//! | [`Users`] | [`User`] | `users` | posts |
//! | [`Categories`] | [`Category`] | `categories` | posts, parent |
//! | [`Tags`] | [`Tag`] | `tags` | posts |
//!
//! Every built-in resource accepts the `sorting` shorthand.
//!
//! # Example
//!
//! ```rust,ignore
//! use wp_models::resources::{Posts, Users};
//!
//! let user = Model::<Users>::new(config)?.with_state([("id", json!(3))]);
//! let drafts = user
//!     .sibling::<Posts>()
//!     .with_state([("author", json!([3])), ("status", json!("draft"))]);
//! println!("{} drafts", drafts.total().await);
//! ```

pub mod wp_v2;

pub use wp_v2::*;
