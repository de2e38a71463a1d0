//! Path resolution
//!
//! Walks a [`DtoPath`] through [`Navigable`] content. A miss yields the
//! [`NotFound`] sentinel, which is distinct from any value the content can hold:
//! a `null` stored at an existing path is still found.

use crate::config::PathConfig;
use crate::navigable::Navigable;
use crate::path::DtoPath;

/// Marker for a path that does not exist in the content
///
/// `matched` is the number of leading segments that did resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("path unresolved after {matched} segment(s)")]
pub struct NotFound {
    /// Segments resolved before the miss
    pub matched: usize,
}

/// Resolves paths against content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathResolver {
    config: PathConfig,
}

impl PathResolver {
    /// Create resolver with default path syntax
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create resolver with specific path syntax
    #[inline]
    #[must_use]
    pub fn with_config(config: PathConfig) -> Self {
        Self { config }
    }

    /// Path syntax used by [`resolve_str`](Self::resolve_str)
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Split a path string with this resolver's syntax
    #[inline]
    #[must_use]
    pub fn parse(&self, path: &str) -> DtoPath {
        DtoPath::parse_with(path, &self.config)
    }

    /// Resolve a parsed path
    ///
    /// # Errors
    /// Returns [`NotFound`] as soon as a segment is missing or the current node
    /// is not a container.
    pub fn resolve<'a, C: Navigable>(&self, root: &'a C, path: &DtoPath) -> Result<&'a C, NotFound> {
        let mut current = root;
        for (matched, segment) in path.iter().enumerate() {
            match current.lookup(segment) {
                Some(next) => current = next,
                None => {
                    tracing::trace!(
                        path = %path,
                        matched,
                        kind = current.kind(),
                        "path segment not found"
                    );
                    return Err(NotFound { matched });
                }
            }
        }
        Ok(current)
    }

    /// Resolve a path string
    ///
    /// # Errors
    /// Returns [`NotFound`] if the path does not exist.
    #[inline]
    pub fn resolve_str<'a, C: Navigable>(&self, root: &'a C, path: &str) -> Result<&'a C, NotFound> {
        self.resolve(root, &self.parse(path))
    }
}

/// Resolve `path` against `root` with the default `/` syntax
///
/// # Errors
/// Returns [`NotFound`] if the path does not exist.
#[inline]
pub fn resolve<'a, C: Navigable>(root: &'a C, path: &str) -> Result<&'a C, NotFound> {
    PathResolver::new().resolve_str(root, path)
}
