//! Integration tests for relation resolution.
//!
//! These tests verify that relations query the right sibling resource with
//! the right filter, inherit the source model's namespace, and skip the
//! request entirely when the foreign value is blank.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wp_models::resources::{Categories, Media, Pages, Posts, Tags, Users};
use wp_models::rest::Related;
use wp_models::{Model, Namespace, ResourceError, WordPressConfig};

fn config_for(server: &MockServer) -> Arc<WordPressConfig> {
    Arc::new(
        WordPressConfig::builder()
            .install("default", server.uri(), "editor", "app-password")
            .build(),
    )
}

/// Mounts `GET /posts/<id>` and returns the fetched post model.
async fn fetched_post(server: &MockServer, body: serde_json::Value) -> Model<Posts> {
    let id = body["id"].as_u64().unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/wp-json/wp/v2/posts/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;

    Model::<Posts>::new(config_for(server))
        .unwrap()
        .with_state([("id", json!(id))])
        .fetch_items()
        .await
        .unwrap()
        .remove(0)
}

// ============================================================================
// To-Many Relations
// ============================================================================

#[tokio::test]
async fn test_user_posts_filters_by_author() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(query_param("author", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "author": 3},
            {"id": 11, "author": 3}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let user = Model::<Users>::new(config_for(&server))
        .unwrap()
        .with_state([("id", json!(3))]);
    let posts = user.posts().await.unwrap();

    let ids: Vec<_> = posts.iter().map(|p| p["id"].clone()).collect();
    assert_eq!(ids, vec![json!(10), json!(11)]);
}

#[tokio::test]
async fn test_post_categories_use_include_filter() {
    let server = MockServer::start().await;
    let post = fetched_post(&server, json!({"id": 1, "categories": [1, 4], "tags": []})).await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/categories"))
        .and(query_param("include", "1,4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Uncategorized"},
            {"id": 4, "name": "Rust"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let categories = post.categories().await.unwrap();
    assert_eq!(categories.len(), 2);

    let rust = categories[1].entity().unwrap().unwrap();
    assert_eq!(rust.name.as_deref(), Some("Rust"));

    // Blank tag list: no request to /tags is mounted, none is made.
    assert!(post.tags().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_tag_and_category_posts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(query_param("tags", "8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 20}])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(query_param("categories", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 21}, {"id": 22}])))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let tag = Model::<Tags>::new(Arc::clone(&config))
        .unwrap()
        .with_state([("id", json!(8))]);
    let category = Model::<Categories>::new(config)
        .unwrap()
        .with_state([("id", json!(4))]);

    assert_eq!(tag.posts().await.unwrap().len(), 1);
    assert_eq!(category.posts().await.unwrap().len(), 2);
}

// ============================================================================
// To-One Relations
// ============================================================================

#[tokio::test]
async fn test_featured_image_and_url() {
    let server = MockServer::start().await;
    let post = fetched_post(&server, json!({"id": 1, "featured_media": 17})).await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/media/17"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 17,
            "media_type": "image",
            "source_url": "https://blog.example.com/wp-content/uploads/a.jpg"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let image = post.featured_image().await.unwrap().unwrap();
    assert_eq!(image.endpoint(), "media/17");
    assert_eq!(
        image.entity().unwrap().unwrap().media_type.as_deref(),
        Some("image")
    );

    // Not cached: resolving again issues a second request.
    assert_eq!(
        post.featured_image_url().await.unwrap().as_deref(),
        Some("https://blog.example.com/wp-content/uploads/a.jpg")
    );
}

#[tokio::test]
async fn test_zero_featured_media_makes_no_request() {
    let server = MockServer::start().await;
    let post = fetched_post(&server, json!({"id": 1, "featured_media": 0})).await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/media/0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 0})))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/media"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    assert!(post.featured_image().await.unwrap().is_none());
    assert!(post.featured_image_url().await.unwrap().is_none());
}

#[tokio::test]
async fn test_missing_author_propagates_not_found() {
    let server = MockServer::start().await;
    let post = fetched_post(&server, json!({"id": 1, "author": 404})).await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/users/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = post.author().await;
    assert!(matches!(
        result,
        Err(ResourceError::NotFound {
            resource: "users",
            ..
        })
    ));
}

#[tokio::test]
async fn test_page_parent_and_children() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/pages/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5, "parent": 2})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/pages/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2, "parent": 0})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/pages"))
        .and(query_param("parent", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 6}, {"id": 7}])))
        .mount(&server)
        .await;

    let page = Model::<Pages>::new(config_for(&server))
        .unwrap()
        .with_state([("id", json!(5))])
        .fetch_items()
        .await
        .unwrap()
        .remove(0);

    let parent = page.parent().await.unwrap().unwrap();
    assert_eq!(parent.id(), Some(&json!(2)));
    assert!(parent.parent().await.unwrap().is_none());

    assert_eq!(page.children().await.unwrap().len(), 2);
}

// ============================================================================
// Resolution Rules
// ============================================================================

#[tokio::test]
async fn test_relations_inherit_namespace() {
    let public = MockServer::start().await;
    let intranet = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/users/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3, "name": "Ada"})))
        .expect(1)
        .mount(&intranet)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/users/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3, "name": "Wrong"})))
        .expect(0)
        .mount(&public)
        .await;

    let config = Arc::new(
        WordPressConfig::builder()
            .install("default", public.uri(), "editor", "app-password")
            .install("intranet", intranet.uri(), "bot", "token")
            .build(),
    );
    let posts = Model::<Posts>::in_namespace(config, Namespace::new("intranet").unwrap())
        .with_state([("author", json!(3))]);

    let author = posts.author().await.unwrap().unwrap();
    assert_eq!(author["name"], json!("Ada"));
    assert_eq!(author.namespace().as_ref(), "intranet");
    assert_eq!(
        author.install_config().unwrap(),
        posts.install_config().unwrap()
    );
}

#[tokio::test]
async fn test_to_many_relations_inherit_namespace() {
    let public = MockServer::start().await;
    let intranet = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(query_param("author", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 40}, {"id": 41}])))
        .expect(1)
        .mount(&intranet)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .expect(0)
        .mount(&public)
        .await;

    let config = Arc::new(
        WordPressConfig::builder()
            .install("default", public.uri(), "editor", "app-password")
            .install("intranet", intranet.uri(), "bot", "token")
            .build(),
    );
    let user = Model::<Users>::in_namespace(config, Namespace::new("intranet").unwrap())
        .with_state([("id", json!(3))]);

    let posts = user.posts().await.unwrap();
    let ids: Vec<_> = posts.iter().map(|p| p["id"].clone()).collect();
    assert_eq!(ids, vec![json!(40), json!(41)]);
    assert!(posts
        .iter()
        .all(|post| post.namespace().as_ref() == "intranet"));
}

#[tokio::test]
async fn test_generic_relation_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/media"))
        .and(query_param("parent", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 30}])))
        .mount(&server)
        .await;

    let post = Model::<Posts>::new(config_for(&server))
        .unwrap()
        .with_state([("id", json!(1))]);

    match post.relation::<Media>("attachments").await.unwrap() {
        Related::Many(items) => assert_eq!(items[0].id(), Some(&json!(30))),
        other => panic!("Expected Many, got {other:?}"),
    }

    let error = post.relation::<Media>("gallery").await.unwrap_err();
    assert!(matches!(error, ResourceError::UnknownRelation { .. }));

    let error = post.relation::<Users>("attachments").await.unwrap_err();
    assert!(matches!(error, ResourceError::RelationTargetMismatch { .. }));
}
