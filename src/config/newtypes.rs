//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A configuration scope selecting which WordPress installation a resource uses.
///
/// Namespaces are lower-cased on construction. The generic `"wordpress"`
/// namespace is normalized to `"default"`, so resources that are not bound to a
/// custom installation share the default credentials.
///
/// # Example
///
/// ```rust
/// use wp_models::Namespace;
///
/// let ns = Namespace::new("WordPress").unwrap();
/// assert_eq!(ns.as_ref(), "default");
///
/// let ns = Namespace::new("intranet").unwrap();
/// assert_eq!(ns.as_ref(), "intranet");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// The namespace used when a resource names no custom installation.
    pub const DEFAULT: &'static str = "default";

    /// The generic namespace that is folded into [`Namespace::DEFAULT`].
    pub const GENERIC: &'static str = "wordpress";

    /// Creates a new validated namespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNamespace`] if the name is empty or
    /// contains anything other than ASCII letters, digits and underscores.
    pub fn new(namespace: impl Into<String>) -> Result<Self, ConfigError> {
        let namespace = namespace.into().trim().to_lowercase();

        if namespace.is_empty()
            || !namespace
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(ConfigError::InvalidNamespace { namespace });
        }

        if namespace == Self::GENERIC {
            return Ok(Self::default());
        }

        Ok(Self(namespace))
    }

    /// Returns `true` for the shared default installation.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Namespace {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Namespace {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated WordPress site URL.
///
/// The URL must carry a scheme and a host. Trailing slashes are trimmed so the
/// REST base path can be appended verbatim.
///
/// # Example
///
/// ```rust
/// use wp_models::SiteUrl;
///
/// let url = SiteUrl::new("https://blog.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://blog.example.com");
/// assert_eq!(url.host_name(), "blog.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl SiteUrl {
    /// Creates a new validated site URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSiteUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidSiteUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        // Host ends at port, path, query, or end of string
        let host_end = url[host_start..]
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for SiteUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

/// A WordPress application password.
///
/// The `Debug` implementation masks the value so credentials never end up in
/// logs.
///
/// # Example
///
/// ```rust
/// use wp_models::Password;
///
/// let password = Password::new("abcd efgh ijkl");
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// assert_eq!(password.as_ref(), "abcd efgh ijkl");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wraps a password value.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}
