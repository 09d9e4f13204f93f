//! Closed-schema query state.
//!
//! A [`QueryState`] is an ordered set of declared fields. Only declared fields
//! can hold a value; writes to anything else are dropped. Resource variants
//! declare their fields once at construction, which makes the schema closed
//! per resource type and open only through explicit insertion.
//!
//! Values are [`serde_json::Value`]s. `Null` means "unset".
//!
//! # Example
//!
//! ```rust
//! use serde_json::{json, Map};
//! use wp_models::rest::QueryState;
//!
//! let mut state = QueryState::new();
//! state.insert("limit", 20).declare("search");
//!
//! let mut update = Map::new();
//! update.insert("search".to_string(), json!("rust"));
//! update.insert("unknown".to_string(), json!(true));
//! state.set_state(update);
//!
//! let values = state.values();
//! assert_eq!(values.len(), 2);
//! assert!(state.get("unknown").is_none());
//! ```

use serde_json::{Map, Value};

/// Mutable mapping handed to [`StateTransform`]s before a merge.
pub type StateMap = Map<String, Value>;

/// Fields every resource variant understands.
pub const BASE_FIELDS: &[&str] = &[
    "id", "limit", "offset", "search", "before", "after", "author", "exclude", "include", "order",
    "orderby", "slug",
];

/// Default page size.
pub const DEFAULT_LIMIT: u64 = 20;

#[derive(Clone, Debug, PartialEq)]
struct Field {
    name: String,
    default: Value,
    value: Value,
}

/// Ordered, closed-schema mapping of field names to values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryState {
    fields: Vec<Field>,
}

impl QueryState {
    /// Creates an empty state with no declared fields.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Creates a state with the [`BASE_FIELDS`] declared and `limit`
    /// defaulting to [`DEFAULT_LIMIT`].
    #[must_use]
    pub fn with_base_fields() -> Self {
        let mut state = Self::new();
        for field in BASE_FIELDS {
            if *field == "limit" {
                state.insert(*field, DEFAULT_LIMIT);
            } else {
                state.declare(*field);
            }
        }
        state
    }

    /// Declares `field` as settable with a default value.
    ///
    /// Inserting an already declared field is a no-op; the first default wins.
    pub fn insert(&mut self, field: impl Into<String>, default: impl Into<Value>) -> &mut Self {
        let name = field.into();
        if !self.is_declared(&name) {
            let default = default.into();
            self.fields.push(Field {
                name,
                value: default.clone(),
                default,
            });
        }
        self
    }

    /// Declares `field` as settable without a default.
    pub fn declare(&mut self, field: impl Into<String>) -> &mut Self {
        self.insert(field, Value::Null)
    }

    /// Returns `true` if `field` has been declared.
    #[must_use]
    pub fn is_declared(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.name == field)
    }

    /// Returns declared field names in insertion order.
    pub fn declared(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Sets a single declared field. Returns `false` (and changes nothing)
    /// when the field is undeclared.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == field) {
            Some(slot) => {
                slot.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Merges `values` into the state, silently dropping undeclared keys.
    pub fn set_state(&mut self, values: StateMap) -> &mut Self {
        for (key, value) in values {
            if !self.set(&key, value) {
                tracing::debug!("Dropping undeclared state field '{}'", key);
            }
        }
        self
    }

    /// Returns the current value of a declared, set field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| f.name == field)
            .map(|f| &f.value)
            .filter(|v| !v.is_null())
    }

    /// Returns all set fields in insertion order.
    #[must_use]
    pub fn values(&self) -> Vec<(&str, &Value)> {
        self.fields
            .iter()
            .filter(|f| !f.value.is_null())
            .map(|f| (f.name.as_str(), &f.value))
            .collect()
    }

    /// Restores every field to its declared default.
    pub fn reset(&mut self) -> &mut Self {
        for field in &mut self.fields {
            field.value = field.default.clone();
        }
        self
    }
}

/// Returns `true` for values the platform treats as empty: `null`, `false`,
/// `0`, `""`, `"0"`, `[]` and `{}`.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// A transform applied to incoming values before they are merged into a
/// [`QueryState`].
///
/// Transforms run ahead of the closed-schema filter, so any field they write
/// must already be declared by the resource.
pub trait StateTransform: Send + Sync {
    /// Declares the fields this transform needs.
    fn declare(&self, state: &mut QueryState);

    /// Rewrites incoming values in place.
    fn apply(&self, values: &mut StateMap);
}
