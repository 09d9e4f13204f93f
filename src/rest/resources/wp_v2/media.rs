//! Media resource implementation.
//!
//! Media items are uploaded attachments: images, video, audio and documents.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{PostStatus, Rendered};
use super::Users;
use crate::rest::{Model, QueryState, Relation, Resource, ResourceError, Sortable, StateTransform};

/// The media collection (`wp/v2/media`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Media;

impl Resource for Media {
    type Entity = MediaItem;

    const NAME: &'static str = "media";

    const RELATIONS: &'static [Relation] = &[Relation::one("author", "author", "users")];

    const TRANSFORMS: &'static [&'static dyn StateTransform] = &[&Sortable];

    fn declare(state: &mut QueryState) {
        state
            .declare("status")
            .declare("media_type")
            .declare("mime_type")
            .declare("parent");
    }
}

/// An uploaded media item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MediaItem {
    /// The unique identifier of the item.
    pub id: u64,

    /// When the item was uploaded.
    #[serde(default)]
    pub date: Option<NaiveDateTime>,

    /// The URL-friendly name.
    #[serde(default)]
    pub slug: Option<String>,

    /// Usually `inherit`.
    #[serde(default)]
    pub status: Option<PostStatus>,

    /// The attachment page URL.
    #[serde(default)]
    pub link: Option<String>,

    /// The title.
    #[serde(default)]
    pub title: Option<Rendered>,

    /// The id of the uploader.
    #[serde(default)]
    pub author: Option<u64>,

    /// Alternative text for images.
    #[serde(default)]
    pub alt_text: Option<String>,

    /// The caption.
    #[serde(default)]
    pub caption: Option<Rendered>,

    /// `image` or `file`.
    #[serde(default)]
    pub media_type: Option<String>,

    /// The MIME type (e.g. `image/jpeg`).
    #[serde(default)]
    pub mime_type: Option<String>,

    /// The URL of the original file.
    #[serde(default)]
    pub source_url: Option<String>,

    /// The id of the post the item is attached to.
    #[serde(default)]
    pub post: Option<u64>,

    /// Dimensions, generated sizes and file metadata.
    #[serde(default)]
    pub media_details: HashMap<String, Value>,
}

impl Model<Media> {
    /// Returns the uploader.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the user lookup fails.
    pub async fn author(&self) -> Result<Option<Model<Users>>, ResourceError> {
        self.related_one("author").await
    }
}
