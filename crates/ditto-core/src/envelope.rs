//! Envelope - the base immutable DTO
//!
//! An [`Envelope`] pairs navigable content with a [`MetadataStore`]. All
//! operations live on the [`Dto`](crate::Dto) trait so that specializations
//! share them; this module only holds the value and its constructors.

use std::sync::Arc;

use ditto_path::{Navigable, PathConfig, PathResolver};
use serde_json::Value as JsonValue;

use crate::meta::MetadataStore;

/// Immutable content + metadata container
///
/// # Type Parameters
/// - `C`: Content tree type; `serde_json::Value` unless stated otherwise
///
/// # Invariants
/// - Never mutated after construction; `with_*` operations return new values
/// - Unchanged parts are shared between copies (content and declared keys
///   behind `Arc`, metadata in a persistent map)
/// - The declared metadata keys are fixed at construction
#[derive(Debug, Clone)]
pub struct Envelope<C = JsonValue> {
    content: Arc<C>,
    metadata: MetadataStore,
    resolver: PathResolver,
}

impl<C: Navigable + Clone> Envelope<C> {
    /// Create envelope with empty map content, declaring `keys`
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_initial_content(keys, C::empty())
    }

    /// Create envelope whose declared metadata keys are exactly `keys`
    ///
    /// # Example
    /// ```rust
    /// use ditto_core::{Dto, Envelope};
    ///
    /// let envelope: Envelope = Envelope::create_for(["status"]);
    /// assert!(envelope.meta_key_allowed("status"));
    /// assert!(!envelope.meta_key_allowed("other"));
    /// ```
    #[inline]
    pub fn create_for<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(keys)
    }

    /// Create envelope holding `content`, declaring `keys`
    pub fn with_initial_content<I, S>(keys: I, content: C) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content: Arc::new(content),
            metadata: MetadataStore::new(keys),
            resolver: PathResolver::new(),
        }
    }

    /// Copy using `config` to split path strings
    ///
    /// Envelopes derived from the copy (including through [`on`](crate::Dto::on))
    /// keep the configuration.
    #[must_use]
    pub fn with_path_config(&self, config: PathConfig) -> Self {
        Self {
            resolver: PathResolver::with_config(config),
            ..self.clone()
        }
    }

    /// Path syntax in use
    #[inline]
    #[must_use]
    pub fn path_config(&self) -> &PathConfig {
        self.resolver.config()
    }

    #[inline]
    pub(crate) fn content_ref(&self) -> &C {
        &self.content
    }

    #[inline]
    pub(crate) fn metadata_store(&self) -> &MetadataStore {
        &self.metadata
    }

    #[inline]
    pub(crate) fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    #[must_use]
    pub(crate) fn replace_content(&self, content: C) -> Self {
        Self {
            content: Arc::new(content),
            metadata: self.metadata.clone(),
            resolver: self.resolver,
        }
    }

    #[must_use]
    pub(crate) fn replace_metadata(&self, metadata: MetadataStore) -> Self {
        Self {
            content: Arc::clone(&self.content),
            metadata,
            resolver: self.resolver,
        }
    }

    /// Check if both envelopes share the same content allocation
    #[inline]
    #[must_use]
    pub fn shares_content_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.content, &other.content)
    }
}

impl<C: Navigable + Clone> Default for Envelope<C> {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}
