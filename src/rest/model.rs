//! The resource model.
//!
//! A [`Model`] plays two roles:
//!
//! - a **query**: an unmaterialized model carries a [`QueryState`] and knows
//!   how to turn it into an endpoint and query parameters
//! - an **item**: a materialized model additionally holds the decoded JSON
//!   object of one resource item, with its `id` pinned in the state
//!
//! Field reads go to the materialized data first and fall back to the state,
//! so `model["title"]` works the same on a fetched item as `model["search"]`
//! does on a query.
//!
//! # Thread Safety
//!
//! `Model` is `Send + Sync`. The HTTP client is built lazily on first use and
//! cached for the model's lifetime.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use wp_models::resources::Posts;
//! use wp_models::{Model, WordPressConfig};
//!
//! let config = Arc::new(
//!     WordPressConfig::builder()
//!         .install("default", "https://blog.example.com", "editor", "app-password")
//!         .build(),
//! );
//!
//! let posts = Model::<Posts>::new(config)
//!     .unwrap()
//!     .with_state([("search", json!("rust")), ("sorting", json!("date,desc"))]);
//!
//! assert_eq!(posts.endpoint(), "posts");
//! assert_eq!(posts["orderby"], json!("date"));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;
use std::sync::{Arc, OnceLock};

use serde_json::{Map, Value};

use crate::clients::HttpClient;
use crate::config::{InstallConfig, Namespace, WordPressConfig};
use crate::error::ConfigError;
use crate::rest::endpoint::{build_endpoint, request_options};
use crate::rest::errors::ResourceError;
use crate::rest::resource::Resource;
use crate::rest::state::{QueryState, StateMap};

static NULL: Value = Value::Null;

/// A query over, or a materialized item of, the resource `R`.
pub struct Model<R: Resource> {
    config: Arc<WordPressConfig>,
    namespace: Namespace,
    pub(crate) state: QueryState,
    client: OnceLock<HttpClient>,
    pub(crate) data: Option<Map<String, Value>>,
    resource: PhantomData<fn() -> R>,
}

// Verify Model is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Model<crate::rest::resources::Posts>>();
};

impl<R: Resource> Model<R> {
    /// Creates an unmaterialized model in the resource's declared namespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNamespace`] if the resource declares an
    /// invalid namespace.
    pub fn new(config: Arc<WordPressConfig>) -> Result<Self, ConfigError> {
        Ok(Self::in_namespace(config, R::namespace()?))
    }

    /// Creates an unmaterialized model bound to an explicit namespace.
    #[must_use]
    pub fn in_namespace(config: Arc<WordPressConfig>, namespace: Namespace) -> Self {
        Self {
            config,
            namespace,
            state: R::initial_state(),
            client: OnceLock::new(),
            data: None,
            resource: PhantomData,
        }
    }

    /// Creates a fresh model of another resource that shares this model's
    /// configuration and namespace.
    #[must_use]
    pub fn sibling<S: Resource>(&self) -> Model<S> {
        Model::in_namespace(Arc::clone(&self.config), self.namespace.clone())
    }

    /// Returns the shared configuration.
    #[must_use]
    pub fn config(&self) -> &Arc<WordPressConfig> {
        &self.config
    }

    /// Returns the namespace credentials are read from.
    #[must_use]
    pub const fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Returns the query state.
    #[must_use]
    pub const fn state(&self) -> &QueryState {
        &self.state
    }

    /// Returns the query state for direct edits.
    ///
    /// Direct edits bypass the resource's state transforms.
    pub fn state_mut(&mut self) -> &mut QueryState {
        &mut self.state
    }

    /// Merges values into the query state.
    ///
    /// The resource's transforms run first (e.g. `sorting` is expanded into
    /// `orderby`/`order`), then undeclared keys are dropped.
    pub fn set_state<I, K>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut values: StateMap = values.into_iter().map(|(k, v)| (k.into(), v)).collect();
        for transform in R::TRANSFORMS {
            transform.apply(&mut values);
        }
        self.state.set_state(values);
        self
    }

    /// Builder-style variant of [`Model::set_state`].
    #[must_use]
    pub fn with_state<I, K>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        self.set_state(values);
        self
    }

    /// Reads a field from the materialized data, falling back to the state.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data
            .as_ref()
            .and_then(|data| data.get(field))
            .or_else(|| self.state.get(field))
    }

    /// Returns the `id` of this model, if set.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.get("id")
    }

    /// Returns the decoded item, if this model has been materialized.
    #[must_use]
    pub const fn data(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()
    }

    /// Returns `true` if this model holds a fetched item.
    #[must_use]
    pub const fn is_materialized(&self) -> bool {
        self.data.is_some()
    }

    /// Deserializes the materialized data into the resource's entity type.
    ///
    /// Returns `Ok(None)` for unmaterialized models.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the data does not fit the entity.
    pub fn entity(&self) -> Result<Option<R::Entity>, ResourceError> {
        let Some(data) = &self.data else {
            return Ok(None);
        };
        serde_json::from_value(Value::Object(data.clone()))
            .map(Some)
            .map_err(|source| ResourceError::Decode {
                resource: R::NAME,
                source,
            })
    }

    /// Returns the endpoint path: `<name>` or `<name>/<id>`.
    #[must_use]
    pub fn endpoint(&self) -> String {
        build_endpoint(R::NAME, self.state.get("id"))
    }

    /// Returns the wire query parameters derived from the state.
    #[must_use]
    pub fn request_options(&self) -> Vec<(String, String)> {
        request_options(&self.state)
    }

    /// Resolves the installation settings for this model's namespace.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any of the settings is missing or invalid.
    pub fn install_config(&self) -> Result<InstallConfig, ConfigError> {
        self.config.install(&self.namespace)
    }

    /// Returns the HTTP client, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the namespace's settings are unusable.
    pub fn client(&self) -> Result<&HttpClient, ConfigError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        let install = self.install_config()?;
        tracing::debug!(
            "Building client for namespace '{}' at {}",
            self.namespace,
            install.url().host_name()
        );
        Ok(self
            .client
            .get_or_init(|| HttpClient::new(&install, self.config.user_agent_prefix())))
    }

    /// Builds a materialized model from one decoded item.
    pub(crate) fn materialize(&self, data: Map<String, Value>) -> Result<Self, ResourceError> {
        let id = data
            .get("id")
            .filter(|id| !id.is_null())
            .cloned()
            .ok_or(ResourceError::MissingId { resource: R::NAME })?;

        let mut item = Self::in_namespace(Arc::clone(&self.config), self.namespace.clone());
        item.state.set("id", id);
        item.data = Some(data);
        Ok(item)
    }
}

impl<R: Resource> Clone for Model<R> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            namespace: self.namespace.clone(),
            state: self.state.clone(),
            client: OnceLock::new(),
            data: self.data.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: Resource> fmt::Debug for Model<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("resource", &R::NAME)
            .field("namespace", &self.namespace)
            .field("state", &self.state)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<R: Resource> Index<&str> for Model<R> {
    type Output = Value;

    /// Returns the field value, or `Value::Null` when it is absent.
    fn index(&self, field: &str) -> &Value {
        self.get(field).unwrap_or(&NULL)
    }
}
