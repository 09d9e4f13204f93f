//! The fetch pipeline.
//!
//! [`Model::fetch`] picks one of three modes from the `id` in the state:
//!
//! | `id` | Mode | Result |
//! |------|------|--------|
//! | non-empty list | batch | one slot per id, in input order |
//! | non-blank scalar | single | exactly one item |
//! | unset or blank | collection | every item of one page, in response order |
//!
//! Every returned item is a fresh, materialized model of the same resource
//! and namespace with its `id` pinned.
//!
//! # Batch lookups
//!
//! Batch ids are looked up concurrently, at most
//! [`WordPressConfig::batch_concurrency`](crate::config::WordPressConfig::batch_concurrency)
//! at a time. Ids that cannot be fetched (404 or another HTTP failure) leave
//! an empty slot. Contract violations (undecodable bodies, items without an
//! `id`) and configuration errors abort the whole batch.
//!
//! # Example
//!
//! ```rust,ignore
//! let posts = Model::<Posts>::new(config)?.with_state([("id", json!([5, 99]))]);
//! let slots = posts.fetch().await?;
//! assert_eq!(slots.len(), 2);
//!
//! let total = Model::<Posts>::new(config)?.total().await;
//! ```

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::clients::HttpResponse;
use crate::rest::endpoint::{build_endpoint, request_options};
use crate::rest::errors::ResourceError;
use crate::rest::model::Model;
use crate::rest::resource::Resource;
use crate::rest::state::is_blank;

impl<R: Resource> Model<R> {
    /// Runs the query.
    ///
    /// Single and collection modes never produce `None` slots; batch mode
    /// does for ids that could not be fetched.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::MissingEndpoint`] if the resource has no endpoint
    /// - [`ResourceError::InvalidId`] if a scalar `id` is neither a string nor a number
    /// - [`ResourceError::Config`] if the namespace's settings are unusable
    /// - [`ResourceError::NotFound`] if a single item does not exist
    /// - [`ResourceError::Http`] for other transport failures
    /// - [`ResourceError::Decode`], [`ResourceError::UnexpectedShape`] or
    ///   [`ResourceError::MissingId`] for responses that break the API contract
    pub async fn fetch(&self) -> Result<Vec<Option<Self>>, ResourceError> {
        match self.state.get("id") {
            Some(Value::Array(ids)) if !ids.is_empty() => self.fetch_batch(ids.clone()).await,
            Some(id @ (Value::Bool(_) | Value::Object(_))) if !is_blank(id) => {
                Err(ResourceError::InvalidId {
                    resource: R::NAME,
                    id: id.to_string(),
                })
            }
            Some(id) if !is_blank(id) => Ok(vec![Some(self.fetch_single().await?)]),
            _ => Ok(self
                .fetch_collection()
                .await?
                .into_iter()
                .map(Some)
                .collect()),
        }
    }

    /// Runs the query and drops empty batch slots.
    ///
    /// # Errors
    ///
    /// See [`Model::fetch`].
    pub async fn fetch_items(&self) -> Result<Vec<Self>, ResourceError> {
        Ok(self.fetch().await?.into_iter().flatten().collect())
    }

    /// Returns the total number of items matching the query.
    ///
    /// Issues the query with a page size of 1 and reads the `X-WP-Total`
    /// header. Any failure, including a missing header, yields 0.
    pub async fn total(&self) -> u64 {
        match self.try_total().await {
            Ok(Some(total)) => total,
            Ok(None) => {
                tracing::debug!("{} response carries no total header", R::NAME);
                0
            }
            Err(e) => {
                tracing::debug!("Counting {} failed: {}", R::NAME, e);
                0
            }
        }
    }

    async fn try_total(&self) -> Result<Option<u64>, ResourceError> {
        let mut state = self.state.clone();
        state.set("limit", 1);

        let endpoint = build_endpoint(R::NAME, state.get("id"));
        if endpoint.is_empty() {
            return Err(Self::missing_endpoint());
        }

        let response = self
            .client()?
            .get(&endpoint, request_options(&state))
            .await?;
        Ok(response.total())
    }

    async fn fetch_single(&self) -> Result<Self, ResourceError> {
        let id = self.state.get("id").map(id_label).unwrap_or_default();
        let response = self
            .send()
            .await
            .map_err(|e| match e {
                ResourceError::Http(http) => ResourceError::from_http(http, R::NAME, &id),
                other => other,
            })?;

        if response.body.trim().is_empty() {
            return Err(ResourceError::NotFound {
                resource: R::NAME,
                id,
            });
        }

        match Self::decode(&response)? {
            Value::Object(item) => self.materialize(item),
            _ => Err(ResourceError::UnexpectedShape {
                resource: R::NAME,
                expected: "object",
            }),
        }
    }

    async fn fetch_collection(&self) -> Result<Vec<Self>, ResourceError> {
        let response = self.send().await?;

        let Value::Array(items) = Self::decode(&response)? else {
            return Err(ResourceError::UnexpectedShape {
                resource: R::NAME,
                expected: "array",
            });
        };

        tracing::debug!("Fetched {} {} item(s)", items.len(), R::NAME);

        items
            .into_iter()
            .map(|item| match item {
                Value::Object(item) => self.materialize(item),
                _ => Err(ResourceError::UnexpectedShape {
                    resource: R::NAME,
                    expected: "object",
                }),
            })
            .collect()
    }

    async fn fetch_batch(&self, ids: Vec<Value>) -> Result<Vec<Option<Self>>, ResourceError> {
        let semaphore = Arc::new(Semaphore::new(self.config().batch_concurrency()));
        let mut slots: Vec<Option<Self>> = (0..ids.len()).map(|_| None).collect();
        let mut workers = JoinSet::new();

        for (slot, id) in ids.into_iter().enumerate() {
            if is_blank(&id) || id.is_array() || id.is_object() {
                tracing::debug!("Skipping unusable {} batch id {}", R::NAME, id);
                continue;
            }

            let mut item = Self::in_namespace(Arc::clone(self.config()), self.namespace().clone());
            item.state.set("id", id);

            let semaphore = Arc::clone(&semaphore);
            workers.spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                (slot, item.fetch_single().await)
            });
        }

        while let Some(joined) = workers.join_next().await {
            let (slot, result) = joined.map_err(|e| ResourceError::Batch {
                resource: R::NAME,
                message: e.to_string(),
            })?;

            match result {
                Ok(item) => slots[slot] = Some(item),
                Err(e) if e.is_missing_item() => {
                    tracing::warn!("Batch lookup of {} slot {} failed: {}", R::NAME, slot, e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(slots)
    }

    async fn send(&self) -> Result<HttpResponse, ResourceError> {
        let endpoint = self.endpoint();
        if endpoint.is_empty() {
            return Err(Self::missing_endpoint());
        }

        let client = self.client()?;
        Ok(client.get(&endpoint, self.request_options()).await?)
    }

    fn decode(response: &HttpResponse) -> Result<Value, ResourceError> {
        response.json().map_err(|source| ResourceError::Decode {
            resource: R::NAME,
            source,
        })
    }

    fn missing_endpoint() -> ResourceError {
        ResourceError::MissingEndpoint {
            resource: std::any::type_name::<R>(),
        }
    }
}

fn id_label(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
