//! Path syntax configuration

use serde::{Deserialize, Serialize};

/// How path strings are split into segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Segment separator
    pub separator: char,
    /// Drop empty segments instead of treating them as literal empty keys
    pub skip_empty_segments: bool,
}

impl PathConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With segment separator
    #[inline]
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// With empty-segment handling
    #[inline]
    #[must_use]
    pub fn with_skip_empty_segments(mut self, skip: bool) -> Self {
        self.skip_empty_segments = skip;
        self
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            separator: '/',
            skip_empty_segments: false,
        }
    }
}
