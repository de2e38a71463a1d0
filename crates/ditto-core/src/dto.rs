//! The `Dto` trait
//!
//! Shared operations of [`Envelope`] and every type built on it. Implementors
//! only say how to reach their envelope and how to rebuild themselves around a
//! new one; each `with_*` then returns the implementor's own type, so extra
//! fields such as a success flag survive the copy.

use std::any::{type_name, Any};

use ditto_path::{Navigable, NotFound};
use serde::{de::DeserializeOwned, Serialize};

use crate::accessor::{self, Accessed};
use crate::envelope::Envelope;
use crate::error::{DittoError, DittoResult};
use crate::meta::{MetaValue, MetadataStore};

/// Immutable DTO over navigable content
///
/// # Example
/// ```rust
/// use ditto_core::{Dto, Envelope};
/// use serde_json::json;
///
/// let dto = Envelope::<serde_json::Value>::create_for(["status"])
///     .with_metadata("status", "ok")?
///     .with_content(json!({"foo": {"bar": "baz"}}));
///
/// assert_eq!(dto.get("foo/bar")?, &json!("baz"));
/// assert_eq!(dto.get_or("foo/bing", &json!("fallback")), &json!("fallback"));
/// assert!(dto.with_metadata("other", 1).is_err());
/// # Ok::<(), ditto_core::DittoError>(())
/// ```
pub trait Dto: Clone + Sized {
    /// Content tree type
    type Content: Navigable + Clone;

    /// The wrapped envelope
    fn envelope(&self) -> &Envelope<Self::Content>;

    /// Copy of `self` around a different envelope
    fn with_envelope(&self, envelope: Envelope<Self::Content>) -> Self;

    /// Current content
    #[inline]
    fn content(&self) -> &Self::Content {
        self.envelope().content_ref()
    }

    /// Copy with `content` replacing the current content
    ///
    /// Metadata and declared keys are carried over.
    #[must_use]
    fn with_content(&self, content: Self::Content) -> Self {
        self.with_envelope(self.envelope().replace_content(content))
    }

    /// The metadata store
    #[inline]
    fn meta(&self) -> &MetadataStore {
        self.envelope().metadata_store()
    }

    /// Declared metadata keys, in declaration order
    #[inline]
    fn meta_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.meta().keys()
    }

    /// Check if `key` is a declared metadata key
    #[inline]
    fn meta_key_allowed(&self, key: &str) -> bool {
        self.meta().key_allowed(key)
    }

    /// Fail unless `key` is a declared metadata key
    ///
    /// # Errors
    /// Returns [`DittoError::DisallowedMetaKey`].
    #[inline]
    fn ensure_meta_key_allowed(&self, key: &str) -> DittoResult<()> {
        self.meta().ensure_key_allowed(key)
    }

    /// Copy with metadata `key` set to `value`
    ///
    /// # Errors
    /// Returns [`DittoError::DisallowedMetaKey`] if `key` is not declared.
    fn with_metadata<V: Any + Send + Sync>(&self, key: &str, value: V) -> DittoResult<Self> {
        let metadata = self.meta().with(key, MetaValue::new(value))?;
        Ok(self.with_envelope(self.envelope().replace_metadata(metadata)))
    }

    /// Copy with metadata `key` set to `true`
    ///
    /// # Errors
    /// Returns [`DittoError::DisallowedMetaKey`] if `key` is not declared.
    #[inline]
    fn with_flag(&self, key: &str) -> DittoResult<Self> {
        self.with_metadata(key, MetaValue::flag())
    }

    /// Check if metadata `key` is set
    #[inline]
    fn has_metadata(&self, key: &str) -> bool {
        self.meta().has(key)
    }

    /// Metadata value for `key`
    ///
    /// # Errors
    /// Returns [`DittoError::MetadataNotFound`] if `key` is not set.
    #[inline]
    fn metadata(&self, key: &str) -> DittoResult<&MetaValue> {
        self.meta().get(key)
    }

    /// Metadata value for `key`, or `default` if not set
    #[inline]
    fn metadata_or<'a>(&'a self, key: &str, default: &'a MetaValue) -> &'a MetaValue {
        self.meta().get_or(key, default)
    }

    /// Metadata value for `key` as `T`
    ///
    /// # Errors
    /// Returns [`DittoError::MetadataNotFound`] or [`DittoError::MetadataBadType`].
    #[inline]
    fn metadata_as<T: Any>(&self, key: &str) -> DittoResult<&T> {
        self.meta().get_as(key)
    }

    /// Resolve `path`, returning the [`NotFound`] sentinel on a miss
    ///
    /// # Errors
    /// Returns [`NotFound`] if the path does not exist.
    fn find(&self, path: &str) -> Result<&Self::Content, NotFound> {
        let envelope = self.envelope();
        envelope.resolver().resolve_str(envelope.content_ref(), path)
    }

    /// Value at `path`, or `default` if the path does not exist
    #[inline]
    fn get_or<'a>(&'a self, path: &str, default: &'a Self::Content) -> &'a Self::Content {
        self.find(path).unwrap_or(default)
    }

    /// Value at `path`
    ///
    /// # Errors
    /// Returns [`DittoError::PathNotFound`] carrying `path`.
    fn get(&self, path: &str) -> DittoResult<&Self::Content> {
        self.find(path)
            .map_err(|_| DittoError::path_not_found(path))
    }

    /// Check if `path` exists
    #[inline]
    fn has(&self, path: &str) -> bool {
        self.find(path).is_ok()
    }

    /// Fail unless `path` exists
    ///
    /// # Errors
    /// Returns [`DittoError::PathNotFound`] carrying `path`.
    #[inline]
    fn must_have(&self, path: &str) -> DittoResult<()> {
        self.get(path).map(|_| ())
    }

    /// Copy scoped to the subtree at `path`
    ///
    /// # Errors
    /// Returns [`DittoError::PathNotFound`] carrying `path`.
    fn on(&self, path: &str) -> DittoResult<Self> {
        let content = self.get(path)?.clone();
        Ok(self.with_content(content))
    }

    /// Value at `path`, deserialized into `T`
    ///
    /// # Errors
    /// Returns [`DittoError::PathNotFound`], or [`DittoError::BadType`] if the
    /// value does not have the shape of `T`.
    fn get_as<T: DeserializeOwned>(&self, path: &str) -> DittoResult<T>
    where
        Self::Content: Serialize,
    {
        let found = self.get(path)?;
        serde_json::to_value(found)
            .and_then(serde_json::from_value::<T>)
            .map_err(|_| DittoError::bad_type(path, type_name::<T>(), found.kind()))
    }

    /// Copy whose content is `value` converted into a content tree
    ///
    /// Structs become maps keyed by field name, so their fields are reachable by
    /// path like any other key.
    ///
    /// # Errors
    /// Returns [`DittoError::InvalidContent`] if `value` cannot be represented
    /// as `Self::Content`.
    fn with_serialized<T: Serialize>(&self, value: &T) -> DittoResult<Self>
    where
        Self::Content: DeserializeOwned,
    {
        let content = serde_json::to_value(value)
            .and_then(serde_json::from_value::<Self::Content>)
            .map_err(|e| DittoError::InvalidContent(e.to_string()))?;
        Ok(self.with_content(content))
    }

    /// Run a shorthand accessor by name
    ///
    /// See [`Accessor`](crate::Accessor) for the recognized names.
    ///
    /// # Errors
    /// Returns [`DittoError::BadAccessor`] for unrecognized names and for
    /// `with<Key>` on an undeclared key.
    #[inline]
    fn call(&self, accessor: &str, arg: Option<MetaValue>) -> DittoResult<Accessed<Self>> {
        accessor::dispatch(self, accessor, arg)
    }
}

impl<C: Navigable + Clone> Dto for Envelope<C> {
    type Content = C;

    #[inline]
    fn envelope(&self) -> &Envelope<C> {
        self
    }

    #[inline]
    fn with_envelope(&self, envelope: Envelope<C>) -> Self {
        envelope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::{json, Value};

    fn sample() -> Envelope<Value> {
        Envelope::<Value>::create_for(["status"]).with_content(json!({
            "foo": {"bar": "baz", "none": null},
            "list": [1, 2, 3],
        }))
    }

    #[test]
    fn get_and_get_or() {
        let dto = sample();
        assert_eq!(dto.get("foo/bar").unwrap(), &json!("baz"));
        assert_eq!(dto.get_or("foo/missing", &json!("fallback")), &json!("fallback"));
        assert_eq!(
            dto.get("foo/missing").unwrap_err(),
            DittoError::path_not_found("foo/missing")
        );
    }

    #[test]
    fn null_value_is_present() {
        let dto = sample();
        assert!(dto.has("foo/none"));
        assert_eq!(dto.get_or("foo/none", &json!("fallback")), &Value::Null);
    }

    #[test]
    fn must_have_is_noop_on_success() {
        let dto = sample();
        assert!(dto.must_have("list/2").is_ok());
        assert!(dto.must_have("list/3").unwrap_err().is_not_found());
    }

    #[test]
    fn on_scopes_content() {
        let dto = sample().with_metadata("status", "ok").unwrap();
        let scoped = dto.on("foo").unwrap();
        assert_eq!(scoped.get("bar").unwrap(), &json!("baz"));
        assert!(scoped.has_metadata("status"));
        assert!(dto.on("nope").is_err());
    }

    #[test]
    fn get_as_typed() {
        let dto = sample();
        let list: Vec<u8> = dto.get_as("list").unwrap();
        assert_eq!(list, vec![1, 2, 3]);
        let err = dto.get_as::<u8>("foo/bar").unwrap_err();
        assert_eq!(
            err,
            DittoError::bad_type("foo/bar", "u8", "string")
        );
    }

    #[test]
    fn with_serialized_struct_fields_become_keys() {
        #[derive(Serialize, Deserialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let dto = sample().with_serialized(&Point { x: 1, y: 2 }).unwrap();
        assert_eq!(dto.get("y").unwrap(), &json!(2));
        let back: (i32, i32) = (dto.get_as("x").unwrap(), dto.get_as("y").unwrap());
        assert_eq!(back, (1, 2));
    }

    #[test]
    fn with_flag_stores_true() {
        let dto = sample().with_flag("status").unwrap();
        assert_eq!(dto.metadata_as::<bool>("status"), Ok(&true));
    }

    #[test]
    fn meta_keys_in_declaration_order() {
        let dto = Envelope::<Value>::create_for(["b", "a", "c"]);
        assert_eq!(dto.meta_keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn metadata_or_default() {
        let dto = sample();
        let fallback = MetaValue::new("none");
        assert_eq!(dto.metadata_or("status", &fallback).as_str(), Some("none"));
        assert!(dto.metadata("status").is_err());
    }
}
