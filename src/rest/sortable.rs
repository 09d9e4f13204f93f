//! `"field,direction"` sorting shorthand.
//!
//! [`Sortable`] is a [`StateTransform`] that expands a single `sorting` value
//! into the native `orderby`/`order` fields before the state merge runs.
//!
//! ```rust
//! use serde_json::json;
//! use wp_models::rest::{QueryState, Sortable, StateMap, StateTransform};
//!
//! let mut values = StateMap::new();
//! values.insert("sorting".to_string(), json!("date,desc"));
//! Sortable.apply(&mut values);
//!
//! assert_eq!(values["orderby"], json!("date"));
//! assert_eq!(values["order"], json!("desc"));
//! ```

use serde_json::Value;

use crate::rest::state::{QueryState, StateMap, StateTransform};

/// Name of the shorthand field.
pub const SORTING_FIELD: &str = "sorting";

/// Expands `sorting = "field,direction"` into `orderby` and `order`.
///
/// The value is split on the first comma. Without a comma only `orderby` is
/// set. An empty `sorting` passes through untouched. `orderby` and `order`
/// must be declared by the resource, otherwise the merge drops them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sortable;

impl StateTransform for Sortable {
    fn declare(&self, state: &mut QueryState) {
        state.declare(SORTING_FIELD);
    }

    fn apply(&self, values: &mut StateMap) {
        let Some(Value::String(sorting)) = values.get(SORTING_FIELD) else {
            return;
        };
        if sorting.trim().is_empty() {
            return;
        }

        let (field, direction) = match sorting.split_once(',') {
            Some((field, direction)) => (field.trim().to_string(), Some(direction.trim().to_string())),
            None => (sorting.trim().to_string(), None),
        };

        values.insert("orderby".to_string(), Value::String(field));
        if let Some(direction) = direction.filter(|d| !d.is_empty()) {
            values.insert("order".to_string(), Value::String(direction));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sorting(value: Value) -> StateMap {
        let mut values = StateMap::new();
        values.insert(SORTING_FIELD.to_string(), value);
        values
    }

    #[test]
    fn test_expands_field_and_direction() {
        let mut values = sorting(json!("date,desc"));
        Sortable.apply(&mut values);

        assert_eq!(values.get("orderby"), Some(&json!("date")));
        assert_eq!(values.get("order"), Some(&json!("desc")));
    }

    #[test]
    fn test_splits_on_first_comma_only() {
        let mut values = sorting(json!("title, asc,extra"));
        Sortable.apply(&mut values);

        assert_eq!(values.get("orderby"), Some(&json!("title")));
        assert_eq!(values.get("order"), Some(&json!("asc,extra")));
    }

    #[test]
    fn test_empty_sorting_passes_through() {
        let mut values = sorting(json!(""));
        Sortable.apply(&mut values);

        assert!(values.get("orderby").is_none());
        assert!(values.get("order").is_none());
    }

    #[test]
    fn test_field_without_direction_sets_only_orderby() {
        let mut values = sorting(json!("menu_order"));
        Sortable.apply(&mut values);

        assert_eq!(values.get("orderby"), Some(&json!("menu_order")));
        assert!(values.get("order").is_none());
    }

    #[test]
    fn test_non_string_sorting_is_ignored() {
        let mut values = sorting(json!(5));
        Sortable.apply(&mut values);
        assert!(values.get("orderby").is_none());
    }

    #[test]
    fn test_declares_sorting() {
        let mut state = QueryState::new();
        Sortable.declare(&mut state);

        assert!(state.is_declared(SORTING_FIELD));
    }

    #[test]
    fn test_sorting_value_is_kept_alongside_expansion() {
        let mut values = sorting(json!("date,desc"));
        Sortable.apply(&mut values);

        assert_eq!(values.get(SORTING_FIELD), Some(&json!("date,desc")));
    }
}
