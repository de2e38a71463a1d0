//! Metadata store
//!
//! A key-restricted, persistent key/value bag. The declared key set is fixed
//! when the store is created and shared by every copy derived from it.

use std::any::{type_name, Any};
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use indexmap::IndexSet;

use crate::error::{DittoError, DittoResult};

/// Type-erased metadata value
///
/// Cheap to clone; the payload is shared. Any `Send + Sync + 'static` value can
/// be stored, including error values.
#[derive(Clone)]
pub struct MetaValue {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl MetaValue {
    /// Wrap a value
    ///
    /// Wrapping a `MetaValue` returns it unchanged rather than nesting it.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        let boxed: Box<dyn Any + Send + Sync> = Box::new(value);
        match boxed.downcast::<MetaValue>() {
            Ok(meta) => *meta,
            Err(boxed) => Self {
                inner: Arc::from(boxed),
                type_name: type_name::<T>(),
            },
        }
    }

    /// The boolean `true`, stored by flag-style setters
    #[inline]
    #[must_use]
    pub fn flag() -> Self {
        Self::new(true)
    }

    /// Borrow the payload as `T`
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Check the payload type
    #[inline]
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Compare the payload with `other`; false if the types differ
    #[must_use]
    pub fn eq_value<T: Any + PartialEq>(&self, other: &T) -> bool {
        self.downcast_ref::<T>().is_some_and(|value| value == other)
    }

    /// Payload as text, for `&'static str` and `String` payloads
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Some(text) = self.downcast_ref::<&'static str>() {
            return Some(*text);
        }
        self.downcast_ref::<String>().map(String::as_str)
    }

    /// Payload as bool
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.downcast_ref::<bool>().copied()
    }

    /// Name of the payload type
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check if both values share the same payload allocation
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Debug for MetaValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(text) => f.debug_tuple("MetaValue").field(&text).finish(),
            None => f
                .debug_struct("MetaValue")
                .field("type", &self.type_name)
                .finish_non_exhaustive(),
        }
    }
}

/// Declared metadata keys plus the entries currently set
///
/// # Invariants
/// - Every entry key is a declared key
/// - The declared keys never change after construction
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    keys: Arc<IndexSet<String>>,
    entries: im::HashMap<String, MetaValue>,
}

impl MetadataStore {
    /// Create empty store declaring `keys`
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: Arc::new(keys.into_iter().map(Into::<String>::into).collect()),
            entries: im::HashMap::new(),
        }
    }

    /// Check if `key` is declared
    #[inline]
    #[must_use]
    pub fn key_allowed(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Fail unless `key` is declared
    ///
    /// # Errors
    /// Returns [`DittoError::DisallowedMetaKey`] for an undeclared key.
    pub fn ensure_key_allowed(&self, key: &str) -> DittoResult<()> {
        if self.key_allowed(key) {
            Ok(())
        } else {
            tracing::debug!(key, declared = ?self.keys, "rejected metadata key");
            Err(DittoError::disallowed_meta_key(key))
        }
    }

    /// Copy of this store with `key` set
    ///
    /// # Errors
    /// Returns [`DittoError::DisallowedMetaKey`] for an undeclared key; no copy
    /// is made in that case.
    pub fn with(&self, key: &str, value: MetaValue) -> DittoResult<Self> {
        self.ensure_key_allowed(key)?;
        Ok(self.set_unchecked(key, value))
    }

    /// Copy with `key` set, skipping the declaration check
    ///
    /// Caller must ensure `key` is declared.
    #[must_use]
    pub(crate) fn set_unchecked(&self, key: &str, value: MetaValue) -> Self {
        debug_assert!(self.key_allowed(key), "undeclared metadata key {key:?}");
        Self {
            keys: Arc::clone(&self.keys),
            entries: self.entries.update(key.to_string(), value),
        }
    }

    /// Check if `key` is set
    #[inline]
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Value set for `key`
    ///
    /// # Errors
    /// Returns [`DittoError::MetadataNotFound`] if `key` is not set.
    pub fn get(&self, key: &str) -> DittoResult<&MetaValue> {
        self.entries
            .get(key)
            .ok_or_else(|| DittoError::metadata_not_found(key))
    }

    /// Value set for `key`, or `default`
    #[inline]
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a MetaValue) -> &'a MetaValue {
        self.entries.get(key).unwrap_or(default)
    }

    /// Value set for `key`, downcast to `T`
    ///
    /// # Errors
    /// Returns [`DittoError::MetadataNotFound`] if `key` is not set, or
    /// [`DittoError::MetadataBadType`] if the value is not a `T`.
    pub fn get_as<T: Any>(&self, key: &str) -> DittoResult<&T> {
        let value = self.get(key)?;
        value
            .downcast_ref::<T>()
            .ok_or_else(|| DittoError::metadata_bad_type(key, type_name::<T>(), value.type_name()))
    }

    /// Declared keys, in declaration order
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Set entries, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetaValue)> {
        self.keys
            .iter()
            .filter_map(|key| self.entries.get(key).map(|value| (key.as_str(), value)))
    }

    /// Number of set entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entry is set
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if both stores share the same declared key set
    #[inline]
    #[must_use]
    pub fn shares_keys_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.keys, &other.keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MetadataStore {
        MetadataStore::new(["status", "code"])
    }

    #[test]
    fn meta_value_downcast() {
        let value = MetaValue::new(42_i32);
        assert_eq!(value.downcast_ref::<i32>(), Some(&42));
        assert!(value.downcast_ref::<i64>().is_none());
        assert!(value.is::<i32>());
        assert_eq!(value.type_name(), "i32");
    }

    #[test]
    fn meta_value_does_not_nest() {
        let inner = MetaValue::new("ok");
        let outer = MetaValue::new(inner.clone());
        assert!(outer.ptr_eq(&inner));
        assert_eq!(outer.as_str(), Some("ok"));
    }

    #[test]
    fn meta_value_text_and_flag() {
        assert_eq!(MetaValue::new(String::from("s")).as_str(), Some("s"));
        assert_eq!(MetaValue::flag().as_bool(), Some(true));
        assert!(MetaValue::new(1_u8).as_str().is_none());
        assert!(MetaValue::new("x").eq_value(&"x"));
    }

    #[test]
    fn declared_key_round_trip() {
        let updated = store().with("status", MetaValue::new("ok")).unwrap();
        assert!(updated.has("status"));
        assert_eq!(updated.get("status").unwrap().as_str(), Some("ok"));
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn undeclared_key_rejected() {
        let original = store();
        let err = original.with("other", MetaValue::flag()).unwrap_err();
        assert_eq!(err, DittoError::disallowed_meta_key("other"));
        assert!(original.is_empty());
    }

    #[test]
    fn with_leaves_receiver_untouched() {
        let original = store();
        let updated = original.with("code", MetaValue::new(7)).unwrap();
        assert!(!original.has("code"));
        assert!(updated.has("code"));
        assert!(original.shares_keys_with(&updated));
    }

    #[test]
    fn missing_key_and_default() {
        let s = store();
        assert_eq!(s.get("status").unwrap_err(), DittoError::metadata_not_found("status"));
        let fallback = MetaValue::new("fallback");
        assert_eq!(s.get_or("status", &fallback).as_str(), Some("fallback"));
    }

    #[test]
    fn typed_get() {
        let s = store().with("code", MetaValue::new(31_i64)).unwrap();
        assert_eq!(s.get_as::<i64>("code"), Ok(&31));
        let err = s.get_as::<String>("code").unwrap_err();
        assert_eq!(
            err,
            DittoError::metadata_bad_type("code", type_name::<String>(), "i64")
        );
        assert_eq!(err.path(), None);
    }

    #[test]
    fn keys_and_iter_follow_declaration_order() {
        let s = store()
            .with("code", MetaValue::new(1))
            .and_then(|s| s.with("status", MetaValue::new("ok")))
            .unwrap();
        assert_eq!(s.keys().collect::<Vec<_>>(), vec!["status", "code"]);
        let set: Vec<_> = s.iter().map(|(k, _)| k).collect();
        assert_eq!(set, vec!["status", "code"]);
    }
}
