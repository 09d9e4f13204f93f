//! Tag resource implementation.

use serde::{Deserialize, Serialize};

use super::Posts;
use crate::rest::{Model, QueryState, Relation, Resource, ResourceError, Sortable, StateTransform};

/// The tags collection (`wp/v2/tags`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tags;

impl Resource for Tags {
    type Entity = Tag;

    const NAME: &'static str = "tags";

    const RELATIONS: &'static [Relation] = &[Relation::many("posts", "id", "posts", "tags")];

    const TRANSFORMS: &'static [&'static dyn StateTransform] = &[&Sortable];

    fn declare(state: &mut QueryState) {
        state.declare("hide_empty").declare("slug").declare("post");
    }
}

/// A tag.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Tag {
    /// The unique identifier of the tag.
    pub id: u64,

    /// Number of published posts with the tag.
    #[serde(default)]
    pub count: Option<u64>,

    /// The description.
    #[serde(default)]
    pub description: Option<String>,

    /// The archive URL.
    #[serde(default)]
    pub link: Option<String>,

    /// The display name.
    #[serde(default)]
    pub name: Option<String>,

    /// The URL-friendly name.
    #[serde(default)]
    pub slug: Option<String>,

    /// Always `post_tag`.
    #[serde(default)]
    pub taxonomy: Option<String>,
}

impl Model<Tags> {
    /// Returns the posts with this tag.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the post query fails.
    pub async fn posts(&self) -> Result<Vec<Model<Posts>>, ResourceError> {
        self.related_many("posts").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_deserialization() {
        let json = r#"{"id": 8, "count": 2, "name": "async", "slug": "async", "taxonomy": "post_tag"}"#;
        let tag: Tag = serde_json::from_str(json).unwrap();

        assert_eq!(tag.id, 8);
        assert_eq!(tag.taxonomy.as_deref(), Some("post_tag"));
        assert_eq!(Tags::relation("posts").unwrap().filter_field, "tags");
    }
}
