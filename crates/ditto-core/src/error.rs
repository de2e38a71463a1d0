//! Error types for Ditto DTOs
//!
//! Every failing operation reports one [`DittoError`]. Nothing is retried or
//! partially applied: a failed `with_*` produces no new instance.

/// Main Ditto error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DittoError {
    /// Metadata key outside the declared set
    #[error("Meta key \"{key}\" is not allowed")]
    DisallowedMetaKey { key: String },

    /// Metadata key declared but not set, and no default given
    #[error("Metadata key \"{key}\" does not exist")]
    MetadataNotFound { key: String },

    /// Path does not resolve in the content
    #[error("Value with the path \"{path}\" not found.")]
    PathNotFound { path: String },

    /// Shorthand accessor name not recognized, or its metadata operation failed
    #[error("bad accessor: \"{accessor}\"")]
    BadAccessor {
        accessor: String,
        #[source]
        source: Option<Box<DittoError>>,
    },

    /// Value exists but has the wrong type
    #[error("Value with the path \"{path}\" had invalid type. Expected {expected}, but got {actual}")]
    BadType {
        path: String,
        expected: String,
        actual: String,
    },

    /// Metadata value exists but is not of the requested type
    #[error("Metadata key \"{key}\" had invalid type. Expected {expected}, but got {actual}")]
    MetadataBadType {
        key: String,
        expected: String,
        actual: String,
    },

    /// Content could not be converted into a navigable tree
    #[error("invalid content: {0}")]
    InvalidContent(String),
}

/// Broad classification of a [`DittoError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Misuse of the API (undeclared key, unknown accessor)
    Logic,
    /// Lookup of an unset metadata key
    OutOfRange,
    /// Unresolved content path
    NotFound,
    /// Value present but unusable as requested
    UnexpectedValue,
}

impl DittoError {
    /// Create disallowed key error
    #[inline]
    pub fn disallowed_meta_key(key: impl Into<String>) -> Self {
        Self::DisallowedMetaKey { key: key.into() }
    }

    /// Create missing metadata error
    #[inline]
    pub fn metadata_not_found(key: impl Into<String>) -> Self {
        Self::MetadataNotFound { key: key.into() }
    }

    /// Create unresolved path error
    #[inline]
    pub fn path_not_found(path: impl Into<String>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create unknown accessor error
    #[inline]
    pub fn bad_accessor(accessor: impl Into<String>) -> Self {
        Self::BadAccessor {
            accessor: accessor.into(),
            source: None,
        }
    }

    /// Create accessor error caused by a failed metadata operation
    #[inline]
    pub fn bad_accessor_from(accessor: impl Into<String>, cause: DittoError) -> Self {
        Self::BadAccessor {
            accessor: accessor.into(),
            source: Some(Box::new(cause)),
        }
    }

    /// Create type mismatch error
    #[inline]
    pub fn bad_type(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::BadType {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create metadata type mismatch error
    #[inline]
    pub fn metadata_bad_type(
        key: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::MetadataBadType {
            key: key.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Classify error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DisallowedMetaKey { .. } | Self::BadAccessor { .. } => ErrorKind::Logic,
            Self::MetadataNotFound { .. } => ErrorKind::OutOfRange,
            Self::PathNotFound { .. } => ErrorKind::NotFound,
            Self::BadType { .. } | Self::MetadataBadType { .. } | Self::InvalidContent(_) => {
                ErrorKind::UnexpectedValue
            }
        }
    }

    /// Check if error signals API misuse
    #[inline]
    #[must_use]
    pub fn is_logic_error(&self) -> bool {
        self.kind() == ErrorKind::Logic
    }

    /// Check if error is an unresolved path
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Offending path, for path-related errors
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::PathNotFound { path } | Self::BadType { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for Ditto operations
pub type DittoResult<T> = Result<T, DittoError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn messages() {
        assert_eq!(
            DittoError::disallowed_meta_key("nope").to_string(),
            "Meta key \"nope\" is not allowed"
        );
        assert_eq!(
            DittoError::path_not_found("foo/bar").to_string(),
            "Value with the path \"foo/bar\" not found."
        );
        assert_eq!(
            DittoError::bad_type("a", "i64", "string").to_string(),
            "Value with the path \"a\" had invalid type. Expected i64, but got string"
        );
        assert_eq!(
            DittoError::metadata_bad_type("code", "i64", "&str").to_string(),
            "Metadata key \"code\" had invalid type. Expected i64, but got &str"
        );
    }

    #[test]
    fn kinds() {
        assert!(DittoError::disallowed_meta_key("k").is_logic_error());
        assert!(DittoError::bad_accessor("frob").is_logic_error());
        assert_eq!(DittoError::metadata_not_found("k").kind(), ErrorKind::OutOfRange);
        assert!(DittoError::path_not_found("p").is_not_found());
        assert_eq!(
            DittoError::InvalidContent("x".into()).kind(),
            ErrorKind::UnexpectedValue
        );
    }

    #[test]
    fn path_accessor() {
        assert_eq!(DittoError::path_not_found("a/b").path(), Some("a/b"));
        assert_eq!(DittoError::metadata_not_found("k").path(), None);
        assert_eq!(DittoError::bad_type("a/b", "u8", "string").path(), Some("a/b"));
        assert_eq!(DittoError::metadata_bad_type("code", "i64", "&str").path(), None);
    }

    #[test]
    fn bad_accessor_keeps_cause() {
        let err = DittoError::bad_accessor_from("withNope", DittoError::disallowed_meta_key("nope"));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "Meta key \"nope\" is not allowed");
        assert!(DittoError::bad_accessor("x").source().is_none());
    }
}
