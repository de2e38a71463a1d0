//! Content paths
//!
//! Provides [`DtoPath`], the parsed form of a slash-delimited lookup path.

use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::PathConfig;

/// Path into a content tree
///
/// An ordered list of segment keys. Segments are never validated or escaped:
/// an empty segment is a literal empty key.
///
/// # Examples
/// - `"foo/bar"` → `["foo", "bar"]`
/// - `"/foo"` → `["", "foo"]`
/// - `""` → `[""]`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DtoPath(Vec<String>);

impl DtoPath {
    /// Default segment separator
    pub const SEPARATOR: char = '/';

    /// Create new path from segments
    #[inline]
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Path with no segments; resolves to the root itself
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Split `path` on `/`
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self::parse_with(path, &PathConfig::default())
    }

    /// Split `path` according to `config`
    #[must_use]
    pub fn parse_with(path: &str, config: &PathConfig) -> Self {
        let segments = path
            .split(config.separator)
            .filter(|seg| !(config.skip_empty_segments && seg.is_empty()))
            .map(str::to_string)
            .collect();
        Self(segments)
    }

    /// Get path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Get number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if path has no segments
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get parent path (if not root)
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Append a segment, returning new path
    #[inline]
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.0.push(segment.into());
        new
    }

    /// Leading segments up to (excluding) `len`
    #[must_use]
    pub fn prefix(&self, len: usize) -> Self {
        Self(self.0[..len.min(self.0.len())].to_vec())
    }

    /// Iterator over segments from root to leaf
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Join segments with custom separator
    #[inline]
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl Display for DtoPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join("/"))
    }
}

impl FromStr for DtoPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for DtoPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<Vec<String>> for DtoPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl Default for DtoPath {
    fn default() -> Self {
        Self::root()
    }
}
