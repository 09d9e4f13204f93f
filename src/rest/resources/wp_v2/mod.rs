//! Resources of the core `wp/v2` namespace.
//!
//! Each module provides a zero-sized descriptor (plural, e.g. [`Posts`]) that
//! is used as the type parameter of [`Model`](crate::rest::Model), and a
//! serde entity (singular, e.g. [`Post`]) returned by
//! [`Model::entity`](crate::rest::Model::entity).

pub mod common;

mod category;
mod media;
mod page;
mod post;
mod tag;
mod user;

pub use category::{Categories, Category};
pub use common::{PostStatus, Rendered};
pub use media::{Media, MediaItem};
pub use page::{Page, Pages};
pub use post::{Post, Posts};
pub use tag::{Tag, Tags};
pub use user::{User, Users};
