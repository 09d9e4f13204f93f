//! Types embedded in several wp/v2 resources.
//!
//! These are not resources themselves; they appear as nested data inside
//! posts, pages, media items and terms.

mod rendered;
mod status;

pub use rendered::Rendered;
pub use status::PostStatus;
