//! Testing utilities for Ditto workspace
//!
//! Shared fixtures, strategies and the reference usage scenario.

#![allow(missing_docs)]

use ditto_core::{DittoResult, Envelope};
use ditto_demo::DemoConfig;
use proptest::prelude::*;
use serde_json::{json, Value};

pub use ditto_demo::{demo_content, demo_error, DemoAccessors, DemoError, META_KEYS as DEMO_META_KEYS};

pub fn empty_demo_envelope() -> Envelope {
    Envelope::create_for(DEMO_META_KEYS)
}

/// Envelope built exactly as the reference usage builds it
pub fn demo_envelope() -> DittoResult<Envelope> {
    ditto_demo::demo_envelope(&DemoConfig::default())
}

/// Arbitrary JSON trees of bounded depth
pub fn json_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{0,3}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

/// Every path that exists in `value`, as `/`-joined strings
pub fn existing_paths(value: &Value) -> Vec<String> {
    fn walk(value: &Value, prefix: Option<String>, out: &mut Vec<String>) {
        let children: Vec<(String, &Value)> = match value {
            Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
            Value::Array(items) => items.iter().enumerate().map(|(i, v)| (i.to_string(), v)).collect(),
            _ => Vec::new(),
        };
        for (segment, child) in children {
            let path = match &prefix {
                Some(p) => format!("{p}/{segment}"),
                None => segment,
            };
            out.push(path.clone());
            walk(child, Some(path), out);
        }
    }

    let mut out = Vec::new();
    walk(value, None, &mut out);
    out
}
