//! Endpoint and query parameter derivation.
//!
//! A resource is addressed as `<name>` (collection) or `<name>/<id>` (single
//! item) relative to the REST base URL. Query parameters are projected from
//! the query state:
//!
//! - `id` is removed, it travels in the path
//! - `limit` is renamed to `per_page`
//! - everything else that is set passes through unchanged
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use wp_models::rest::{build_endpoint, request_options, QueryState};
//!
//! assert_eq!(build_endpoint("posts", None), "posts");
//! assert_eq!(build_endpoint("posts", Some(&json!(7))), "posts/7");
//!
//! let mut state = QueryState::with_base_fields();
//! state.set("id", 3);
//! assert_eq!(
//!     request_options(&state),
//!     vec![("per_page".to_string(), "20".to_string())]
//! );
//! ```

use serde_json::Value;

use crate::rest::state::{is_blank, QueryState};

/// Query parameter name the API uses for the page size.
pub const PER_PAGE: &str = "per_page";

/// Builds the endpoint path for a resource and an optional id.
///
/// Returns an empty string when `resource` is empty, which marks a resource
/// without a concrete endpoint. The id is appended only when it is a
/// non-blank scalar; list ids are resolved one by one by the fetch pipeline.
#[must_use]
pub fn build_endpoint(resource: &str, id: Option<&Value>) -> String {
    if resource.is_empty() {
        return String::new();
    }

    match id.filter(|id| !is_blank(id)) {
        Some(Value::String(s)) => format!("{resource}/{}", urlencoding::encode(s)),
        Some(Value::Number(n)) => format!("{resource}/{n}"),
        _ => resource.to_string(),
    }
}

/// Projects the query state into wire query parameters.
///
/// Parameters keep the state's insertion order.
#[must_use]
pub fn request_options(state: &QueryState) -> Vec<(String, String)> {
    state
        .values()
        .into_iter()
        .filter(|(name, _)| *name != "id")
        .filter_map(|(name, value)| {
            let key = if name == "limit" { PER_PAGE } else { name };
            query_value(value).map(|v| (key.to_string(), v))
        })
        .collect()
}

/// Renders a state value as a query parameter value.
///
/// Lists become comma-separated values, objects are sent as JSON.
fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(arr) => {
            let values: Vec<String> = arr
                .iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect();
            if values.is_empty() {
                None
            } else {
                Some(values.join(","))
            }
        }
        Value::Object(_) => Some(value.to_string()),
    }
}
