//! Rendered text fields.

use serde::{Deserialize, Serialize};

/// A text field as WordPress returns it: the HTML rendered for display.
///
/// Used for `title`, `content`, `excerpt`, `guid` and `caption`. Requests in
/// the `edit` context additionally carry the `raw` source.
///
/// # Example
///
/// ```rust
/// use wp_models::resources::Rendered;
///
/// let title: Rendered = serde_json::from_str(r#"{"rendered":"Hello world!"}"#).unwrap();
/// assert_eq!(title.rendered, "Hello world!");
/// assert!(!title.is_protected());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Rendered {
    /// The HTML for display.
    #[serde(default)]
    pub rendered: String,

    /// The unrendered source, only present in the `edit` context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,

    /// Whether the content is password protected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
}

impl Rendered {
    /// Returns `true` if the content is password protected.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        self.protected.unwrap_or(false)
    }
}
