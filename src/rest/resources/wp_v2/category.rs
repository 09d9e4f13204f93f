//! Category resource implementation.
//!
//! Categories are the hierarchical taxonomy of posts.

use serde::{Deserialize, Serialize};

use super::Posts;
use crate::rest::{Model, QueryState, Relation, Resource, ResourceError, Sortable, StateTransform};

/// The categories collection (`wp/v2/categories`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Categories;

impl Resource for Categories {
    type Entity = Category;

    const NAME: &'static str = "categories";

    const RELATIONS: &'static [Relation] = &[
        Relation::many("posts", "id", "posts", "categories"),
        Relation::one("parent", "parent", "categories"),
    ];

    const TRANSFORMS: &'static [&'static dyn StateTransform] = &[&Sortable];

    fn declare(state: &mut QueryState) {
        state
            .declare("hide_empty")
            .declare("slug")
            .declare("parent")
            .declare("post");
    }
}

/// A category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Category {
    /// The unique identifier of the category.
    pub id: u64,

    /// Number of published posts in the category.
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

    /// Always `category`.
    #[serde(default)]
    pub taxonomy: Option<String>,

    /// The id of the parent category; 0 for top-level categories.
    #[serde(default)]
    pub parent: Option<u64>,
}

impl Model<Categories> {
    /// Returns the posts in this category.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the post query fails.
    pub async fn posts(&self) -> Result<Vec<Model<Posts>>, ResourceError> {
        self.related_many("posts").await
    }

    /// Returns the parent category, or `None` for top-level categories.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the category lookup fails.
    pub async fn parent(&self) -> Result<Option<Self>, ResourceError> {
        self.related_one("parent").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_relations() {
        assert_eq!(Categories::relation("posts").unwrap().filter_field, "categories");
        assert_eq!(Categories::relation("parent").unwrap().target, "categories");
        assert!(Categories::initial_state().is_declared("hide_empty"));
    }

    #[test]
    fn test_category_deserialization() {
        let json = r#"{
            "id": 4,
            "count": 12,
            "description": "",
            "link": "https://blog.example.com/category/rust/",
            "name": "Rust",
            "slug": "rust",
            "taxonomy": "category",
            "parent": 0,
            "meta": []
        }"#;

        let category: Category = serde_json::from_str(json).unwrap();

        assert_eq!(category.id, 4);
        assert_eq!(category.count, Some(12));
        assert_eq!(category.name.as_deref(), Some("Rust"));
        assert_eq!(category.parent, Some(0));
    }
}
