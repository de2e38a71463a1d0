use ditto_path::{resolve, DtoPath, Navigable, NotFound, PathConfig, PathResolver};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn nest(keys: &[String], leaf: Value) -> Value {
    keys.iter().rev().fold(leaf, |acc, key| {
        let mut map = Map::new();
        map.insert(key.clone(), acc);
        Value::Object(map)
    })
}

#[test]
fn sequence_positions_are_addressable() {
    let content = json!({"users": [{"name": "ann"}, {"name": "bob"}]});
    assert_eq!(resolve(&content, "users/1/name"), Ok(&json!("bob")));
    assert_eq!(resolve(&content, "users/01/name"), Err(NotFound { matched: 1 }));
}

#[test]
fn yaml_and_json_resolve_alike() {
    let yaml: serde_yaml::Value = serde_yaml::from_str("foo:\n  bar: baz\n").unwrap();
    let found = resolve(&yaml, "foo/bar").unwrap();
    assert_eq!(found.as_str(), Some("baz"));
    assert_eq!(resolve(&yaml, "foo/bar/x").unwrap_err().matched, 2);
}

#[test]
fn toml_document_resolves() {
    let doc: toml::Value = toml::from_str("[db]\nhost = \"localhost\"\n").unwrap();
    assert_eq!(resolve(&doc, "db/host").unwrap().as_str(), Some("localhost"));
    assert_eq!(resolve(&doc, "db").unwrap().kind(), "map");
}

#[test]
fn skip_empty_segments_resolves_sloppy_paths() {
    let content = json!({"foo": {"bar": 1}});
    let strict = PathResolver::new();
    let lenient = PathResolver::with_config(PathConfig::new().with_skip_empty_segments(true));
    assert!(strict.resolve_str(&content, "/foo//bar/").is_err());
    assert_eq!(lenient.resolve_str(&content, "/foo//bar/"), Ok(&json!(1)));
}

proptest! {
    #[test]
    fn prop_built_paths_resolve_to_leaf(
        keys in prop::collection::vec("[a-z]{0,4}", 1..6),
        leaf in any::<i64>(),
    ) {
        let content = nest(&keys, json!(leaf));
        let path = DtoPath::new(keys.clone());
        let expected = json!(leaf);
        prop_assert_eq!(PathResolver::new().resolve(&content, &path), Ok(&expected));
        prop_assert_eq!(resolve(&content, &keys.join("/")), Ok(&expected));
    }

    #[test]
    fn prop_extra_segment_past_leaf_is_not_found(
        keys in prop::collection::vec("[a-z]{1,4}", 1..6),
        extra in "[a-z]{0,4}",
    ) {
        let content = nest(&keys, json!("scalar"));
        let path = DtoPath::new(keys.clone()).child(extra);
        let result = PathResolver::new().resolve(&content, &path);
        prop_assert_eq!(result, Err(NotFound { matched: keys.len() }));
    }
}
