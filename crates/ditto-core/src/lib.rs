//! Ditto Core
//!
//! Generic immutable data-transfer objects.
//!
//! # Core Concepts
//!
//! - [`Envelope<C>`]: Content tree plus a metadata bag with declared keys
//! - [`Dto`]: Operations shared by every DTO (`with_*`, `get`, `on`, ...)
//! - [`MetadataStore`]: Key-restricted, persistent metadata
//! - [`CallResult`] / [`MessageResult`]: Function-call outcomes
//! - [`Accessor`] and [`ditto_accessors!`]: `hasKey` / `withKey` / `key` shorthand
//!
//! # Example
//!
//! ```rust
//! use ditto_core::{Dto, Envelope};
//! use serde_json::json;
//!
//! let dto = Envelope::<serde_json::Value>::create_for(["status", "code"])
//!     .with_metadata("status", "ok")?
//!     .with_metadata("code", "g-31")?
//!     .with_content(json!({"some": "data", "foo": {"bar": "baz"}}));
//!
//! assert!(dto.has_metadata("status"));
//! assert_eq!(dto.metadata("code")?.as_str(), Some("g-31"));
//! assert_eq!(dto.get_or("foo/bar", &json!("fallback")), &json!("baz"));
//! assert_eq!(dto.get_or("foo/bing", &json!("fallback")), &json!("fallback"));
//! # Ok::<(), ditto_core::DittoError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

#[macro_use]
mod macros;

mod accessor;
mod dto;
mod envelope;
mod error;
mod meta;
mod result;

// Re-exports
pub use accessor::{Accessed, Accessor};
pub use dto::Dto;
pub use envelope::Envelope;
pub use error::{DittoError, DittoResult, ErrorKind};
pub use meta::{MetaValue, MetadataStore};
pub use result::{CallResult, MessageResult, RESULT_META_KEYS};

pub use ditto_path::{DtoPath, Navigable, NotFound, PathConfig, PathResolver};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with DTOs
    pub use crate::{
        CallResult, DittoError, DittoResult, Dto, Envelope, MessageResult, MetaValue,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shorthand_and_explicit_calls_agree() {
        let dto = Envelope::<serde_json::Value>::create_for(["status"]);
        let via_call = dto
            .call("withStatus", Some(MetaValue::new("ok")))
            .unwrap()
            .into_dto()
            .unwrap();
        let via_method = dto.with_metadata("status", "ok").unwrap();
        assert_eq!(
            via_call.metadata("status").unwrap().as_str(),
            via_method.metadata("status").unwrap().as_str()
        );
        assert_eq!(via_call.call("hasStatus", None).unwrap().as_flag(), Some(true));
    }

    #[test]
    fn result_types_share_path_lookup() {
        let content = json!({"foo": {"bar": "baz"}});
        let call = CallResult::new(true, content.clone());
        let message = MessageResult::new(true, 0, "ok", content);
        assert_eq!(call.get("foo/bar").unwrap(), message.get("foo/bar").unwrap());
    }
}
