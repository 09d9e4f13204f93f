//! Integration tests for query state, endpoints and request options.
//!
//! These tests exercise the public model surface without any network access.

use std::sync::Arc;

use serde_json::{json, Value};
use wp_models::resources::{Categories, Media, Pages, Posts, Tags, Users};
use wp_models::rest::{QueryState, Resource};
use wp_models::{Model, WordPressConfig};

fn config() -> Arc<WordPressConfig> {
    Arc::new(
        WordPressConfig::builder()
            .install("default", "https://blog.example.com", "editor", "app-password")
            .build(),
    )
}

fn declared_fields<R: Resource>() -> Vec<String> {
    R::initial_state().declared().map(str::to_string).collect()
}

// ============================================================================
// Closed Schema
// ============================================================================

#[test]
fn test_declared_fields_round_trip_through_values() {
    let mut posts = Model::<Posts>::new(config()).unwrap();

    for field in declared_fields::<Posts>() {
        posts.set_state([(field.clone(), json!("v"))]);
        assert!(
            posts
                .state()
                .values()
                .iter()
                .any(|(name, value)| *name == field && **value == json!("v")),
            "{field} should be kept"
        );
    }
}

#[test]
fn test_undeclared_fields_never_reach_values() {
    for model_values in [
        Model::<Posts>::new(config()).unwrap().with_state([("menu_order", json!(1))]).state().values().len(),
        Model::<Tags>::new(config()).unwrap().with_state([("roles", json!("editor"))]).state().values().len(),
        Model::<Users>::new(config()).unwrap().with_state([("sticky", json!(true))]).state().values().len(),
    ] {
        // Only the default page size remains.
        assert_eq!(model_values, 1);
    }
}

#[test]
fn test_state_can_be_reset() {
    let mut media = Model::<Media>::new(config())
        .unwrap()
        .with_state([("media_type", json!("image")), ("limit", json!(100))]);
    media.state_mut().reset();

    assert_eq!(media.state(), &Media::initial_state());
    assert_eq!(media["limit"], json!(20));
}

#[test]
fn test_custom_state_insertion() {
    let mut pages = Model::<Pages>::new(config()).unwrap();
    pages.state_mut().insert("menu_order", 0);
    pages.set_state([("menu_order", json!(3))]);

    assert_eq!(pages["menu_order"], json!(3));
    assert!(pages
        .request_options()
        .contains(&("menu_order".to_string(), "3".to_string())));
}

// ============================================================================
// Endpoints and Request Options
// ============================================================================

#[test]
fn test_endpoints_follow_resource_names() {
    assert_eq!(Model::<Posts>::new(config()).unwrap().endpoint(), "posts");
    assert_eq!(Model::<Pages>::new(config()).unwrap().endpoint(), "pages");
    assert_eq!(Model::<Media>::new(config()).unwrap().endpoint(), "media");
    assert_eq!(Model::<Users>::new(config()).unwrap().endpoint(), "users");
    assert_eq!(
        Model::<Categories>::new(config()).unwrap().endpoint(),
        "categories"
    );
    assert_eq!(Model::<Tags>::new(config()).unwrap().endpoint(), "tags");

    let single = Model::<Posts>::new(config())
        .unwrap()
        .with_state([("id", json!(7))]);
    assert_eq!(single.endpoint(), "posts/7");
}

#[test]
fn test_request_options_drop_id_and_rename_limit() {
    let posts = Model::<Posts>::new(config())
        .unwrap()
        .with_state([("limit", json!(20)), ("id", json!(3))]);

    assert_eq!(
        posts.request_options(),
        vec![("per_page".to_string(), "20".to_string())]
    );
}

#[test]
fn test_request_options_follow_declaration_order() {
    let categories = Model::<Categories>::new(config()).unwrap().with_state([
        ("post", json!(12)),
        ("hide_empty", json!(true)),
        ("exclude", json!([1, 2])),
    ]);

    let keys: Vec<String> = categories
        .request_options()
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(keys, vec!["per_page", "exclude", "hide_empty", "post"]);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_sorting_expands_into_orderby_and_order() {
    let posts = Model::<Posts>::new(config())
        .unwrap()
        .with_state([("sorting", json!("date,desc"))]);

    assert_eq!(posts["orderby"], json!("date"));
    assert_eq!(posts["order"], json!("desc"));
    assert!(posts
        .request_options()
        .contains(&("sorting".to_string(), "date,desc".to_string())));
}

#[test]
fn test_empty_sorting_leaves_order_unset() {
    let posts = Model::<Posts>::new(config())
        .unwrap()
        .with_state([("sorting", json!(""))]);

    assert_eq!(posts["orderby"], Value::Null);
    assert_eq!(posts["order"], Value::Null);
}

#[test]
fn test_direct_state_edits_bypass_sorting() {
    let mut posts = Model::<Posts>::new(config()).unwrap();
    posts.state_mut().set("sorting", "title,asc");

    assert_eq!(posts["orderby"], Value::Null);
    assert_eq!(posts.state().get("sorting"), Some(&json!("title,asc")));
}

#[test]
fn test_plain_query_state_has_no_sorting() {
    let mut state = QueryState::with_base_fields();
    state.set_state(
        [("sorting".to_string(), json!("date,desc"))]
            .into_iter()
            .collect(),
    );
    assert!(state.get("orderby").is_none());
}
