//! Navigable content
//!
//! The [`Navigable`] capability lets the resolver step into maps, sequences and
//! object-like values without knowing the concrete representation.

use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;
use toml::Value as TomlValue;

/// A content node that can be stepped into by segment key
///
/// Implementations decide which of their variants are containers. Scalars
/// return `None` for every segment.
pub trait Navigable {
    /// Child addressed by `segment`, if this node is a container holding it
    fn lookup(&self, segment: &str) -> Option<&Self>;

    /// Short name of this node's variant (`"map"`, `"sequence"`, `"string"`, ...)
    fn kind(&self) -> &'static str;

    /// Empty map node, the content of a freshly created envelope
    fn empty() -> Self
    where
        Self: Sized;
}

/// Parse a sequence index segment
///
/// Only canonical decimal is accepted: `"0"`, `"12"`. Forms such as `"01"`,
/// `"+1"` or `"-1"` are plain keys and never address a sequence slot.
#[must_use]
pub fn parse_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment.len() == 1 || !segment.starts_with('0'));
    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}

impl Navigable for JsonValue {
    fn lookup(&self, segment: &str) -> Option<&Self> {
        match self {
            JsonValue::Object(map) => map.get(segment),
            JsonValue::Array(items) => parse_index(segment).and_then(|i| items.get(i)),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "bool",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "sequence",
            JsonValue::Object(_) => "map",
        }
    }

    fn empty() -> Self {
        JsonValue::Object(serde_json::Map::new())
    }
}

impl Navigable for YamlValue {
    fn lookup(&self, segment: &str) -> Option<&Self> {
        match self {
            YamlValue::Mapping(map) => map.get(segment).or_else(|| {
                // YAML keys are not restricted to strings
                if let Ok(n) = segment.parse::<i64>() {
                    map.get(YamlValue::Number(n.into()))
                } else if let Ok(b) = segment.parse::<bool>() {
                    map.get(YamlValue::Bool(b))
                } else {
                    None
                }
            }),
            YamlValue::Sequence(items) => parse_index(segment).and_then(|i| items.get(i)),
            YamlValue::Tagged(tagged) => tagged.value.lookup(segment),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            YamlValue::Null => "null",
            YamlValue::Bool(_) => "bool",
            YamlValue::Number(_) => "number",
            YamlValue::String(_) => "string",
            YamlValue::Sequence(_) => "sequence",
            YamlValue::Mapping(_) => "map",
            YamlValue::Tagged(_) => "tagged",
        }
    }

    fn empty() -> Self {
        YamlValue::Mapping(serde_yaml::Mapping::new())
    }
}

impl Navigable for TomlValue {
    fn lookup(&self, segment: &str) -> Option<&Self> {
        match self {
            TomlValue::Table(table) => table.get(segment),
            TomlValue::Array(items) => parse_index(segment).and_then(|i| items.get(i)),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            TomlValue::String(_) => "string",
            TomlValue::Integer(_) | TomlValue::Float(_) => "number",
            TomlValue::Boolean(_) => "bool",
            TomlValue::Datetime(_) => "datetime",
            TomlValue::Array(_) => "sequence",
            TomlValue::Table(_) => "map",
        }
    }

    fn empty() -> Self {
        TomlValue::Table(toml::Table::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn index_must_be_canonical() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("12"), Some(12));
        assert_eq!(parse_index("01"), None);
        assert_eq!(parse_index("+1"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("1a"), None);
    }

    #[test]
    fn json_object_and_array() {
        let value = json!({"list": [10, 20], "name": "x"});
        assert_eq!(value.lookup("name"), Some(&json!("x")));
        let list = value.lookup("list").unwrap();
        assert_eq!(list.lookup("1"), Some(&json!(20)));
        assert_eq!(list.lookup("2"), None);
        assert_eq!(list.lookup("name"), None);
    }

    #[test]
    fn json_scalars_not_navigable() {
        assert_eq!(json!("text").lookup("0"), None);
        assert_eq!(json!(null).lookup(""), None);
        assert_eq!(json!(42).kind(), "number");
    }

    #[test]
    fn json_null_child_is_returned() {
        let value = json!({"empty": null});
        assert_eq!(value.lookup("empty"), Some(&JsonValue::Null));
    }

    #[test]
    fn yaml_non_string_keys() {
        let value: YamlValue = serde_yaml::from_str("1: one\ntrue: yes\nname: n\n").unwrap();
        assert_eq!(value.lookup("1").and_then(YamlValue::as_str), Some("one"));
        assert!(value.lookup("true").is_some());
        assert_eq!(value.lookup("name").and_then(YamlValue::as_str), Some("n"));
        assert!(value.lookup("2").is_none());
    }

    #[test]
    fn yaml_sequence_and_tagged() {
        let value: YamlValue = serde_yaml::from_str("items: [a, b]\nboxed: !wrap {inner: 1}\n").unwrap();
        let items = value.lookup("items").unwrap();
        assert_eq!(items.lookup("0").and_then(YamlValue::as_str), Some("a"));
        let boxed = value.lookup("boxed").unwrap();
        assert_eq!(boxed.kind(), "tagged");
        assert!(boxed.lookup("inner").is_some());
    }

    #[test]
    fn toml_table_and_array() {
        let value: TomlValue = toml::from_str("ports = [80, 443]\n[server]\nhost = \"h\"\n").unwrap();
        let server = value.lookup("server").unwrap();
        assert_eq!(server.kind(), "map");
        assert_eq!(server.lookup("host").and_then(TomlValue::as_str), Some("h"));
        let ports = value.lookup("ports").unwrap();
        assert_eq!(ports.lookup("1").and_then(TomlValue::as_integer), Some(443));
    }

    #[test]
    fn empty_is_an_empty_map() {
        assert_eq!(JsonValue::empty(), json!({}));
        assert_eq!(JsonValue::empty().kind(), "map");
        assert_eq!(YamlValue::empty(), YamlValue::Mapping(serde_yaml::Mapping::new()));
        assert_eq!(TomlValue::empty().kind(), "map");
        assert_eq!(TomlValue::empty().lookup("a"), None);
    }
}
