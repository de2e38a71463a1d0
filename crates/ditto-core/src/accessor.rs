//! Shorthand metadata accessors
//!
//! Name-based access to metadata: `hasStatus` checks `status`, `withStatus`
//! sets it, and a bare `status` reads it. Names are matched in a fixed order:
//!
//! 1. names of explicit [`Dto`] operations (`withContent`, `get`, ...) are
//!    reserved and always rejected;
//! 2. a `has` prefix;
//! 3. a `with` prefix;
//! 4. the bare name of a metadata entry that is currently set.
//!
//! The first letter after a prefix is lowercased, so `hasStatus` addresses
//! `status`. A metadata key literally named `hasStatus` can therefore never be
//! read through the bare-name form.

use crate::dto::Dto;
use crate::error::{DittoError, DittoResult};
use crate::meta::MetaValue;

const RESERVED: &[&str] = &[
    "content",
    "createFor",
    "ensureMetaKeyAllowed",
    "get",
    "getOr",
    "has",
    "hasMetadata",
    "metaKeyAllowed",
    "metadata",
    "mustHave",
    "on",
    "withContent",
    "withMetadata",
];

/// Parsed shorthand accessor name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Accessor {
    /// `has<Key>`: is the key set?
    Has(String),
    /// `with<Key>`: copy with the key set (to `true` if no value is given)
    With(String),
    /// `<key>`: the value set for the key
    Value(String),
}

impl Accessor {
    /// Parse an accessor name
    ///
    /// # Errors
    /// Returns [`DittoError::BadAccessor`] for reserved names.
    pub fn parse(name: &str) -> DittoResult<Self> {
        if RESERVED.contains(&name) {
            return Err(DittoError::bad_accessor(name));
        }
        if let Some(rest) = name.strip_prefix("has") {
            return Ok(Self::Has(lcfirst(rest)));
        }
        if let Some(rest) = name.strip_prefix("with") {
            return Ok(Self::With(lcfirst(rest)));
        }
        Ok(Self::Value(name.to_string()))
    }

    /// Metadata key addressed
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Has(key) | Self::With(key) | Self::Value(key) => key,
        }
    }
}

/// Outcome of a shorthand accessor
#[derive(Debug, Clone)]
pub enum Accessed<D> {
    /// Answer of `has<Key>`
    Flag(bool),
    /// New DTO from `with<Key>`
    Dto(D),
    /// Value read by `<key>`
    Value(MetaValue),
}

impl<D> Accessed<D> {
    /// The `has<Key>` answer
    #[inline]
    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    /// The value read by `<key>`
    #[inline]
    #[must_use]
    pub fn as_value(&self) -> Option<&MetaValue> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The DTO produced by `with<Key>`
    #[inline]
    #[must_use]
    pub fn into_dto(self) -> Option<D> {
        match self {
            Self::Dto(dto) => Some(dto),
            _ => None,
        }
    }
}

pub(crate) fn dispatch<D: Dto>(
    dto: &D,
    name: &str,
    arg: Option<MetaValue>,
) -> DittoResult<Accessed<D>> {
    match Accessor::parse(name)? {
        Accessor::Has(key) => Ok(Accessed::Flag(dto.has_metadata(&key))),
        Accessor::With(key) => {
            let value = arg.unwrap_or_else(MetaValue::flag);
            dto.with_metadata(&key, value)
                .map(Accessed::Dto)
                .map_err(|cause| DittoError::bad_accessor_from(name, cause))
        }
        Accessor::Value(key) => match dto.meta().get(&key) {
            Ok(value) => Ok(Accessed::Value(value.clone())),
            Err(_) => {
                tracing::debug!(accessor = name, "no metadata entry for bare accessor");
                Err(DittoError::bad_accessor(name))
            }
        },
    }
}

fn lcfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
