//! Error types for configuration lookup.
//!
//! Every resource namespace needs a `username`, `password` and `url` entry in
//! the process configuration. When one of them is missing or malformed the
//! client cannot be built and the operation aborts with a [`ConfigError`].
//! No default credentials are ever synthesized.
//!
//! # Example
//!
//! ```rust
//! use wp_models::{ConfigError, Namespace, WordPressConfig};
//!
//! let config = WordPressConfig::builder().build();
//! let result = config.install(&Namespace::default());
//! assert!(matches!(result, Err(ConfigError::MissingValue { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while resolving installation configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required configuration key is absent.
    #[error("Missing configuration value '{key}'. Every namespace needs a username, password and url entry.")]
    MissingValue {
        /// The full key that was looked up (e.g. `wordpress_default_url`).
        key: String,
    },

    /// The configured site URL is not usable as a base URL.
    #[error("Invalid site URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://blog.example.com').")]
    InvalidSiteUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A namespace name contains characters that cannot appear in a key.
    #[error("Invalid namespace '{namespace}'. Expected lowercase letters, digits and underscores.")]
    InvalidNamespace {
        /// The rejected namespace.
        namespace: String,
    },

    /// The configured username is empty.
    #[error("Username for namespace '{namespace}' cannot be empty.")]
    EmptyUsername {
        /// The namespace whose username was empty.
        namespace: String,
    },
}
