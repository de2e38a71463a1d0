//! Ditto demo
//!
//! Replays the reference usage of an envelope and optionally looks up
//! caller-supplied paths against caller-supplied content.

#![allow(missing_docs)]

use std::path::Path;

use anyhow::Context;
use ditto_core::{ditto_accessors, DittoResult, Dto, Envelope, PathConfig};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Metadata keys declared by the demo envelope
pub const META_KEYS: [&str; 5] = ["exception", "message", "status", "success", "code"];

/// Fallback printed for paths that do not exist
pub const DEFAULT_FALLBACK: &str = "fallback value";

/// Error kept in the envelope's `exception` entry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct DemoError(pub String);

ditto_accessors! {
    /// Shorthand for every key in [`META_KEYS`]
    pub trait DemoAccessors {
        "exception" => has_exception, with_exception, exception;
        "message" => has_message, with_message, message;
        "status" => has_status, with_status, status;
        "success" => has_success, with_success, success;
        "code" => has_code, with_code, code;
    }
}

/// Demo configuration, read from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Path syntax used for lookups
    pub path: PathConfig,
}

impl DemoConfig {
    #[must_use]
    pub fn with_path(mut self, path: PathConfig) -> Self {
        self.path = path;
        self
    }

    /// Parse TOML text
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid demo config")
    }

    /// Read a TOML file, or the defaults if `path` is `None`
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&text)
    }
}

/// What to print
#[derive(Debug, Clone, Default)]
pub struct DemoOptions {
    /// Replacement content as JSON text
    pub content: Option<String>,
    /// Paths to look up; the demo paths when empty
    pub paths: Vec<String>,
    /// Printed for missing paths
    pub fallback: Option<String>,
}

pub fn demo_content() -> Value {
    json!({
        "some": "data",
        "foo": {
            "bar": "baz",
        },
    })
}

pub fn demo_error() -> DemoError {
    DemoError("Spoung".to_string())
}

/// The demo envelope, before any caller-supplied content
pub fn demo_envelope(config: &DemoConfig) -> DittoResult<Envelope> {
    Ok(Envelope::<Value>::create_for(META_KEYS)
        .with_path_config(config.path)
        .with_status("ok")?
        .with_message("some kind of message")?
        .with_code("g-31")?
        .with_exception(demo_error())?
        .with_content(demo_content()))
}

/// Run the demo and return the lines to print
pub fn run(options: &DemoOptions, config: &DemoConfig) -> anyhow::Result<Vec<String>> {
    let mut dto = demo_envelope(config)?;
    if let Some(text) = &options.content {
        let content: Value = serde_json::from_str(text).context("--content is not valid JSON")?;
        dto = dto.with_content(content);
    }
    tracing::debug!(meta_keys = dto.meta().len(), "demo envelope ready");

    let mut lines = Vec::new();
    if dto.has_status() {
        lines.push("Success!!".to_string());
    }
    if dto.code()?.as_str() == Some("g-31") {
        lines.push("Correct code!!".to_string());
    }
    if let Err(err) = raise_stored(&dto) {
        tracing::debug!(error = %err, "stored exception raised");
        lines.push("Correct exception".to_string());
    }

    let fallback = Value::String(
        options
            .fallback
            .clone()
            .unwrap_or_else(|| DEFAULT_FALLBACK.to_string()),
    );
    let paths = if options.paths.is_empty() {
        vec!["foo/bar".to_string(), "foo/bing".to_string()]
    } else {
        options.paths.clone()
    };
    for path in &paths {
        lines.push(render(dto.get_or(path, &fallback)));
    }
    Ok(lines)
}

fn raise_stored(dto: &Envelope) -> Result<(), DemoError> {
    if dto.has_exception() {
        if let Ok(err) = dto.metadata_as::<DemoError>("exception") {
            return Err(err.clone());
        }
    }
    Ok(())
}

/// Strings print bare, everything else as JSON
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
