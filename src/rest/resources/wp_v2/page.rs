//! Page resource implementation.
//!
//! Pages are the static, hierarchical documents of a site ("About", "Contact").
//! They share most fields with posts but have a `parent` and a `menu_order`
//! instead of terms.
//!
//! # Example
//!
//! ```rust,ignore
//! use wp_models::resources::Pages;
//!
//! let about = Model::<Pages>::new(config)?.with_state([("slug", json!("about"))]);
//! if let Some(page) = about.fetch_items().await?.into_iter().next() {
//!     for child in page.children().await? {
//!         println!("{}", child["link"]);
//!     }
//! }
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{PostStatus, Rendered};
use super::{Media, Users};
use crate::rest::{Model, QueryState, Relation, Resource, ResourceError, Sortable, StateTransform};

/// The pages collection (`wp/v2/pages`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pages;

impl Resource for Pages {
    type Entity = Page;

    const NAME: &'static str = "pages";

    const RELATIONS: &'static [Relation] = &[
        Relation::one("featured_image", "featured_media", "media"),
        Relation::one("featured_image_url", "featured_media", "media").picking("source_url"),
        Relation::one("author", "author", "users"),
        Relation::one("parent", "parent", "pages"),
        Relation::many("children", "id", "pages", "parent"),
    ];

    const TRANSFORMS: &'static [&'static dyn StateTransform] = &[&Sortable];

    fn declare(state: &mut QueryState) {
        state.declare("status").declare("parent");
    }
}

/// A page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Page {
    /// The unique identifier of the page.
    pub id: u64,

    /// When the page was published.
    #[serde(default)]
    pub date: Option<NaiveDateTime>,

    /// When the page was published, in UTC.
    #[serde(default)]
    pub date_gmt: Option<NaiveDateTime>,

    /// When the page was last modified.
    #[serde(default)]
    pub modified: Option<NaiveDateTime>,

    /// The URL-friendly name.
    #[serde(default)]
    pub slug: Option<String>,

    /// The publication status.
    #[serde(default)]
    pub status: Option<PostStatus>,

    /// The public URL.
    #[serde(default)]
    pub link: Option<String>,

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

    /// The id of the parent page; 0 for top-level pages.
    #[serde(default)]
    pub parent: Option<u64>,

    /// Sort position among siblings.
    #[serde(default)]
    pub menu_order: Option<i64>,

    /// The theme template used to display the page.
    #[serde(default)]
    pub template: Option<String>,
}

impl Model<Pages> {
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

    /// Returns the parent page, or `None` for top-level pages.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the page lookup fails.
    pub async fn parent(&self) -> Result<Option<Self>, ResourceError> {
        self.related_one("parent").await
    }

    /// Returns the direct child pages.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] if the page query fails.
    pub async fn children(&self) -> Result<Vec<Self>, ResourceError> {
        self.related_many("children").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_relations_point_at_pages() {
        assert_eq!(Pages::relation("parent").unwrap().target, Pages::NAME);
        assert_eq!(Pages::relation("children").unwrap().filter_field, "parent");
        assert!(Pages::initial_state().is_declared("parent"));
    }

    #[test]
    fn test_page_deserialization() {
        let json = r#"{
            "id": 2,
            "date": "2017-05-23T06:25:50",
            "slug": "sample-page",
            "status": "publish",
            "type": "page",
            "link": "https://blog.example.com/sample-page/",
            "title": {"rendered": "Sample Page"},
            "author": 1,
            "featured_media": 0,
            "parent": 0,
            "menu_order": 3,
            "template": ""
        }"#;

        let page: Page = serde_json::from_str(json).unwrap();

        assert_eq!(page.id, 2);
        assert_eq!(page.slug.as_deref(), Some("sample-page"));
        assert_eq!(page.parent, Some(0));
        assert_eq!(page.menu_order, Some(3));
        assert_eq!(page.title.unwrap().rendered, "Sample Page");
    }
}
