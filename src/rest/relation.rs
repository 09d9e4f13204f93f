//! Declared relations between resources.
//!
//! A [`Relation`] describes how to reach items of another resource from a
//! model: which field of the model holds the foreign value, which resource to
//! query and which filter field of that resource receives the value.
//!
//! | Cardinality | Source value | Query on the target |
//! |-------------|--------------|---------------------|
//! | `Many` | scalar or list | `filter_field = [values]`, collection |
//! | `One` | scalar id | `filter_field = id`, single item |
//!
//! A blank source value short-circuits: `Many` yields an empty list and `One`
//! yields `None`, both without a request. `Many` keeps only the non-blank
//! string and number elements of the source and short-circuits when none are
//! left.
//!
//! Relations are resolved on every call; results are not cached on the model.
//!
//! # Example
//!
//! ```rust,ignore
//! use wp_models::resources::{Posts, Users};
//!
//! let author = Model::<Users>::new(config)?.with_state([("id", json!(3))]);
//! for post in author.posts().await? {
//!     println!("{}", post["slug"]);
//! }
//! ```

use std::fmt;

use serde_json::Value;

use crate::rest::errors::ResourceError;
use crate::rest::model::Model;
use crate::rest::resource::Resource;
use crate::rest::state::is_blank;

/// Whether a relation yields one item or a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinality {
    /// At most one target item.
    One,
    /// Any number of target items.
    Many,
}

/// A declared relation to another resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Relation {
    /// Name the relation is looked up by.
    pub name: &'static str,
    /// Field of the source model holding the foreign value.
    pub source_field: &'static str,
    /// [`Resource::NAME`] of the target resource.
    pub target: &'static str,
    /// Field of the target resource's state the value is written to.
    pub filter_field: &'static str,
    /// One or many.
    pub cardinality: Cardinality,
    /// Field of the single target item to return instead of the item itself.
    pub pick: Option<&'static str>,
}

impl Relation {
    /// Declares a to-one relation that looks the target up by `id`.
    #[must_use]
    pub const fn one(name: &'static str, source_field: &'static str, target: &'static str) -> Self {
        Self {
            name,
            source_field,
            target,
            filter_field: "id",
            cardinality: Cardinality::One,
            pick: None,
        }
    }

    /// Declares a to-many relation filtered by `filter_field`.
    #[must_use]
    pub const fn many(
        name: &'static str,
        source_field: &'static str,
        target: &'static str,
        filter_field: &'static str,
    ) -> Self {
        Self {
            name,
            source_field,
            target,
            filter_field,
            cardinality: Cardinality::Many,
            pick: None,
        }
    }

    /// Returns one field of the target item instead of the item.
    #[must_use]
    pub const fn picking(mut self, field: &'static str) -> Self {
        self.pick = Some(field);
        self
    }
}

/// The result of resolving a relation.
pub enum Related<S: Resource> {
    /// Items of a to-many relation.
    Many(Vec<Model<S>>),
    /// The item of a to-one relation.
    One(Option<Model<S>>),
    /// The picked field of a to-one relation's item.
    Field(Option<Value>),
}

impl<S: Resource> Related<S> {
    fn empty(relation: &Relation) -> Self {
        match (relation.cardinality, relation.pick) {
            (Cardinality::Many, _) => Self::Many(Vec::new()),
            (Cardinality::One, None) => Self::One(None),
            (Cardinality::One, Some(_)) => Self::Field(None),
        }
    }

    /// Returns the related items; a to-one result becomes a list of zero or
    /// one item.
    #[must_use]
    pub fn into_models(self) -> Vec<Model<S>> {
        match self {
            Self::Many(models) => models,
            Self::One(model) => model.into_iter().collect(),
            Self::Field(_) => Vec::new(),
        }
    }

    /// Returns the single related item.
    #[must_use]
    pub fn into_model(self) -> Option<Model<S>> {
        match self {
            Self::Many(models) => models.into_iter().next(),
            Self::One(model) => model,
            Self::Field(_) => None,
        }
    }

    /// Returns the picked field value.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Field(value) => value,
            _ => None,
        }
    }
}

impl<S: Resource> fmt::Debug for Related<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Many(models) => f.debug_tuple("Many").field(models).finish(),
            Self::One(model) => f.debug_tuple("One").field(model).finish(),
            Self::Field(value) => f.debug_tuple("Field").field(value).finish(),
        }
    }
}

impl<R: Resource> Model<R> {
    /// Resolves `relation` against the target resource `S`.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::RelationTargetMismatch`] if `S` is not the relation's target
    /// - [`ResourceError::UndeclaredFilter`] if `S` does not declare the filter field
    /// - any error of the target fetch
    pub async fn resolve<S: Resource>(
        &self,
        relation: &Relation,
    ) -> Result<Related<S>, ResourceError> {
        if relation.target != S::NAME {
            return Err(ResourceError::RelationTargetMismatch {
                relation: relation.name,
                expected: relation.target,
                actual: S::NAME,
            });
        }

        let mut target = self.sibling::<S>();
        if !target.state().is_declared(relation.filter_field) {
            return Err(ResourceError::UndeclaredFilter {
                relation: relation.name,
                resource: S::NAME,
                field: relation.filter_field,
            });
        }

        let Some(source) = self
            .get(relation.source_field)
            .filter(|value| !is_blank(value))
            .cloned()
        else {
            tracing::debug!(
                "Relation '{}' of {} has no '{}' value, skipping request",
                relation.name,
                R::NAME,
                relation.source_field
            );
            return Ok(Related::empty(relation));
        };

        match relation.cardinality {
            Cardinality::Many => {
                let values: Vec<Value> = match source {
                    Value::Array(list) => list,
                    scalar => vec![scalar],
                }
                .into_iter()
                .filter(|value| (value.is_string() || value.is_number()) && !is_blank(value))
                .collect();

                // Without a usable value the filter would vanish from the query.
                if values.is_empty() {
                    tracing::debug!(
                        "Relation '{}' of {} has no usable '{}' value, skipping request",
                        relation.name,
                        R::NAME,
                        relation.source_field
                    );
                    return Ok(Related::empty(relation));
                }

                target.set_state([(relation.filter_field, Value::Array(values))]);
                Ok(Related::Many(target.fetch_items().await?))
            }
            Cardinality::One => {
                target.set_state([(relation.filter_field, source)]);
                let item = target.fetch().await?.into_iter().flatten().next();
                Ok(match relation.pick {
                    Some(field) => {
                        Related::Field(item.and_then(|model| model.get(field).cloned()))
                    }
                    None => Related::One(item),
                })
            }
        }
    }

    /// Resolves the relation declared under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownRelation`] if `R` declares no such
    /// relation, otherwise see [`Model::resolve`].
    pub async fn relation<S: Resource>(&self, name: &str) -> Result<Related<S>, ResourceError> {
        let relation = R::relation(name).ok_or_else(|| ResourceError::UnknownRelation {
            resource: R::NAME,
            relation: name.to_string(),
        })?;
        self.resolve(relation).await
    }

    /// Resolves a relation into a list of models.
    ///
    /// # Errors
    ///
    /// See [`Model::relation`].
    pub async fn related_many<S: Resource>(
        &self,
        name: &str,
    ) -> Result<Vec<Model<S>>, ResourceError> {
        Ok(self.relation::<S>(name).await?.into_models())
    }

    /// Resolves a relation into a single model.
    ///
    /// # Errors
    ///
    /// See [`Model::relation`].
    pub async fn related_one<S: Resource>(
        &self,
        name: &str,
    ) -> Result<Option<Model<S>>, ResourceError> {
        Ok(self.relation::<S>(name).await?.into_model())
    }

    /// Resolves a picking relation into the picked value.
    ///
    /// # Errors
    ///
    /// See [`Model::relation`].
    pub async fn related_value<S: Resource>(
        &self,
        name: &str,
    ) -> Result<Option<Value>, ResourceError> {
        Ok(self.relation::<S>(name).await?.into_value())
    }
}
