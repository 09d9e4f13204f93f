//! Publication status shared by posts, pages and media.

use serde::{Deserialize, Serialize};

/// The publication status of a post, page or media item.
///
/// # Example
///
/// ```rust
/// use wp_models::resources::PostStatus;
///
/// let status: PostStatus = serde_json::from_str("\"auto-draft\"").unwrap();
/// assert_eq!(status, PostStatus::AutoDraft);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PostStatus {
    /// Visible to everyone.
    #[default]
    Publish,
    /// Scheduled for publication.
    Future,
    /// Not yet published.
    Draft,
    /// Awaiting review.
    Pending,
    /// Visible to logged-in users with the right capability.
    Private,
    /// In the trash.
    Trash,
    /// Created by the editor but never saved.
    AutoDraft,
    /// Takes the status of the parent (attachments).
    Inherit,
    /// A status registered by a plugin.
    #[serde(other)]
    Other,
}
