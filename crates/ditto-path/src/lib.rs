//! Ditto Path Resolution
//!
//! Slash-delimited lookup into nested, heterogeneous content.
//!
//! # Core Concepts
//!
//! - [`DtoPath`]: Parsed path, one segment per key
//! - [`Navigable`]: Capability of a content node to be stepped into
//! - [`PathResolver`]: Walks a path and returns the value or [`NotFound`]
//! - [`PathConfig`]: Separator and empty-segment handling
//!
//! # Example
//!
//! ```rust
//! use ditto_path::{resolve, NotFound};
//! use serde_json::json;
//!
//! let content = json!({"foo": {"bar": "baz"}});
//! assert_eq!(resolve(&content, "foo/bar"), Ok(&json!("baz")));
//! assert_eq!(resolve(&content, "foo/bing"), Err(NotFound { matched: 1 }));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod config;
mod navigable;
mod path;
mod resolver;

pub use config::PathConfig;
pub use navigable::{parse_index, Navigable};
pub use path::DtoPath;
pub use resolver::{resolve, NotFound, PathResolver};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
