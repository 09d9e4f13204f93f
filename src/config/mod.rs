//! Configuration types for WordPress resource models.
//!
//! This module provides the configuration "container" every model is
//! constructed with, and the per-installation credentials derived from it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`WordPressConfig`]: Flat key/value process configuration shared by models
//! - [`WordPressConfigBuilder`]: A builder for constructing [`WordPressConfig`] instances
//! - [`InstallConfig`]: The `username`/`password`/`url` triplet for one namespace
//! - [`Namespace`]: A validated configuration scope
//! - [`SiteUrl`]: A validated site URL
//! - [`Password`]: A password with masked debug output
//!
//! # Key Convention
//!
//! Credentials are looked up by naming convention:
//!
//! ```text
//! <prefix>_<namespace>_username
//! <prefix>_<namespace>_password
//! <prefix>_<namespace>_url
//! ```
//!
//! The prefix defaults to `wordpress`, so the default installation reads
//! `wordpress_default_username` and friends.
//!
//! # Example
//!
//! ```rust
//! use wp_models::{Namespace, WordPressConfig};
//!
//! let config = WordPressConfig::builder()
//!     .install("default", "https://blog.example.com", "editor", "app-password")
//!     .build();
//!
//! let install = config.install(&Namespace::default()).unwrap();
//! assert_eq!(install.username(), "editor");
//! assert_eq!(install.url().as_ref(), "https://blog.example.com");
//! ```

mod newtypes;

pub use newtypes::{Namespace, Password, SiteUrl};

use std::collections::HashMap;

use crate::error::ConfigError;

/// Default key prefix for installation settings.
pub const DEFAULT_PREFIX: &str = "wordpress";

/// Default number of concurrent requests used when resolving a batch of ids.
pub const DEFAULT_BATCH_CONCURRENCY: usize = 4;

/// Process configuration handed to every resource model.
///
/// This is the container the models read their installation settings from.
/// Keys are stored lower-cased. The struct is cheap to share behind an
/// [`Arc`](std::sync::Arc) and is never mutated after construction.
///
/// # Thread Safety
///
/// `WordPressConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct WordPressConfig {
    prefix: String,
    values: HashMap<String, String>,
    user_agent_prefix: Option<String>,
    batch_concurrency: usize,
}

impl WordPressConfig {
    /// Creates a new builder for constructing a `WordPressConfig`.
    #[must_use]
    pub fn builder() -> WordPressConfigBuilder {
        WordPressConfigBuilder::new()
    }

    /// Builds a configuration from environment variables.
    ///
    /// Every variable whose upper-cased name starts with `WORDPRESS_` is
    /// collected and stored under its lower-cased name, so
    /// `WORDPRESS_DEFAULT_URL` becomes `wordpress_default_url`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(DEFAULT_PREFIX, std::env::vars())
    }

    /// Builds a configuration from arbitrary `(name, value)` pairs, keeping
    /// only names that start with `<prefix>_` (case-insensitive).
    #[must_use]
    pub fn from_vars<I, K, V>(prefix: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let prefix = prefix.to_lowercase();
        let marker = format!("{prefix}_");

        let mut builder = WordPressConfigBuilder::new().prefix(prefix);
        for (name, value) in vars {
            let name = name.into().to_lowercase();
            if name.starts_with(&marker) {
                builder = builder.set(name, value);
            }
        }
        builder.build()
    }

    /// Returns the key prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Looks up a raw configuration value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(&key.to_lowercase()).map(String::as_str)
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how many batch items may be in flight at once.
    #[must_use]
    pub const fn batch_concurrency(&self) -> usize {
        self.batch_concurrency
    }

    /// Returns the configuration key for `field` in `namespace`.
    #[must_use]
    pub fn key(&self, namespace: &Namespace, field: &str) -> String {
        format!("{}_{}_{}", self.prefix, namespace, field)
    }

    /// Resolves the installation settings for a namespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingValue`] if any of the three keys is
    /// absent, [`ConfigError::EmptyUsername`] if the username is blank and
    /// [`ConfigError::InvalidSiteUrl`] if the url cannot be used.
    pub fn install(&self, namespace: &Namespace) -> Result<InstallConfig, ConfigError> {
        let lookup = |field: &str| {
            let key = self.key(namespace, field);
            self.values
                .get(&key)
                .cloned()
                .ok_or(ConfigError::MissingValue { key })
        };

        let username = lookup("username")?;
        let password = lookup("password")?;
        let url = lookup("url")?;

        if username.trim().is_empty() {
            return Err(ConfigError::EmptyUsername {
                namespace: namespace.to_string(),
            });
        }

        Ok(InstallConfig {
            namespace: namespace.clone(),
            username,
            password: Password::new(password),
            url: SiteUrl::new(url)?,
        })
    }
}

// Verify WordPressConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WordPressConfig>();
};

/// Builder for constructing [`WordPressConfig`] instances.
///
/// # Defaults
///
/// - `prefix`: `"wordpress"`
/// - `user_agent_prefix`: `None`
/// - `batch_concurrency`: 4
///
/// # Example
///
/// ```rust
/// use wp_models::WordPressConfig;
///
/// let config = WordPressConfig::builder()
///     .set("wordpress_default_username", "editor")
///     .set("wordpress_default_password", "secret")
///     .set("wordpress_default_url", "https://blog.example.com")
///     .user_agent_prefix("MySite/1.0")
///     .batch_concurrency(8)
///     .build();
///
/// assert_eq!(config.batch_concurrency(), 8);
/// ```
#[derive(Debug)]
pub struct WordPressConfigBuilder {
    prefix: String,
    values: HashMap<String, String>,
    user_agent_prefix: Option<String>,
    batch_concurrency: usize,
}

impl Default for WordPressConfigBuilder {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            values: HashMap::new(),
            user_agent_prefix: None,
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
        }
    }
}

impl WordPressConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key prefix used for installation lookups.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into().to_lowercase();
        self
    }

    /// Sets a raw configuration value. Keys are stored lower-cased.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into().to_lowercase(), value.into());
        self
    }

    /// Writes the three conventional keys for one installation.
    ///
    /// The namespace is normalized the same way lookups normalize it, so
    /// `"wordpress"` registers the default installation. Names that are not
    /// valid namespaces are stored verbatim and will simply never match.
    #[must_use]
    pub fn install(
        self,
        namespace: &str,
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let namespace = Namespace::new(namespace)
            .map_or_else(|_| namespace.to_lowercase(), |ns| ns.to_string());
        let base = format!("{}_{}", self.prefix, namespace);

        self.set(format!("{base}_username"), username)
            .set(format!("{base}_password"), password)
            .set(format!("{base}_url"), url)
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Caps concurrent requests while resolving a batch of ids.
    ///
    /// Values below 1 are raised to 1, which resolves batches sequentially.
    #[must_use]
    pub fn batch_concurrency(mut self, limit: usize) -> Self {
        self.batch_concurrency = limit.max(1);
        self
    }

    /// Builds the [`WordPressConfig`].
    #[must_use]
    pub fn build(self) -> WordPressConfig {
        WordPressConfig {
            prefix: self.prefix,
            values: self.values,
            user_agent_prefix: self.user_agent_prefix,
            batch_concurrency: self.batch_concurrency,
        }
    }
}

/// Settings for one WordPress installation.
///
/// Produced by [`WordPressConfig::install`]; consumed by
/// [`HttpClient::new`](crate::clients::HttpClient::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstallConfig {
    namespace: Namespace,
    username: String,
    password: Password,
    url: SiteUrl,
}

impl InstallConfig {
    /// Returns the namespace these settings belong to.
    #[must_use]
    pub const fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Returns the site URL.
    #[must_use]
    pub const fn url(&self) -> &SiteUrl {
        &self.url
    }
}
