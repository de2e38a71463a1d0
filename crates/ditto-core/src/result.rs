//! Function-call result DTOs
//!
//! [`CallResult`] adds a success flag to an envelope; [`MessageResult`] adds a
//! status code and message on top of that. Both implement [`Dto`], so every
//! `with_*` keeps the flag, code and message.

use std::any::Any;

use ditto_path::Navigable;
use serde_json::Value as JsonValue;

use crate::dto::Dto;
use crate::envelope::Envelope;
use crate::meta::MetaValue;

/// Metadata keys declared by [`CallResult::new`] and [`MessageResult::new`]
pub const RESULT_META_KEYS: &[&str] = &["exception"];

/// Outcome of a call, with optional content
#[derive(Debug, Clone)]
pub struct CallResult<C = JsonValue> {
    success: bool,
    envelope: Envelope<C>,
}

impl<C: Navigable + Clone> CallResult<C> {
    /// Metadata keys declared by [`new`](Self::new)
    pub const META_KEYS: &'static [&'static str] = RESULT_META_KEYS;

    /// Create result declaring [`META_KEYS`](Self::META_KEYS)
    #[inline]
    pub fn new(success: bool, content: C) -> Self {
        Self::with_meta_keys(success, content, Self::META_KEYS.iter().copied())
    }

    /// Create result declaring `keys` instead of the defaults
    pub fn with_meta_keys<I, S>(success: bool, content: C, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            success,
            envelope: Envelope::with_initial_content(keys, content),
        }
    }

    /// Did the call succeed?
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Did the call fail?
    #[inline]
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.success
    }

    /// Failed result with empty map content and `error` stored under `exception`
    pub fn failure<E: Any + Send + Sync>(error: E) -> Self {
        let result = Self::new(false, C::empty());
        let metadata = result
            .meta()
            .set_unchecked("exception", MetaValue::new(error));
        result.with_envelope(result.envelope.replace_metadata(metadata))
    }
}

impl<C: Navigable + Clone> Dto for CallResult<C> {
    type Content = C;

    #[inline]
    fn envelope(&self) -> &Envelope<C> {
        &self.envelope
    }

    #[inline]
    fn with_envelope(&self, envelope: Envelope<C>) -> Self {
        Self {
            success: self.success,
            envelope,
        }
    }
}

/// Call outcome with a status code and status message
#[derive(Debug, Clone)]
pub struct MessageResult<C = JsonValue> {
    result: CallResult<C>,
    code: i64,
    message: String,
}

impl<C: Navigable + Clone> MessageResult<C> {
    /// Create result declaring [`RESULT_META_KEYS`]
    #[inline]
    pub fn new(success: bool, code: i64, message: impl Into<String>, content: C) -> Self {
        Self::with_meta_keys(success, code, message, content, RESULT_META_KEYS.iter().copied())
    }

    /// Create result declaring `keys` instead of the defaults
    pub fn with_meta_keys<I, S>(
        success: bool,
        code: i64,
        message: impl Into<String>,
        content: C,
        keys: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            result: CallResult::with_meta_keys(success, content, keys),
            code,
            message: message.into(),
        }
    }

    /// Status code
    #[inline]
    #[must_use]
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Status message
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Did the call succeed?
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_success()
    }

    /// Did the call fail?
    #[inline]
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.result.is_failure()
    }

    /// Drop code and message
    #[inline]
    #[must_use]
    pub fn into_call_result(self) -> CallResult<C> {
        self.result
    }
}

impl<C: Navigable + Clone> Dto for MessageResult<C> {
    type Content = C;

    #[inline]
    fn envelope(&self) -> &Envelope<C> {
        self.result.envelope()
    }

    fn with_envelope(&self, envelope: Envelope<C>) -> Self {
        Self {
            result: self.result.with_envelope(envelope),
            code: self.code,
            message: self.message.clone(),
        }
    }
}
