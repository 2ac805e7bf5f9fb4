//! Conversion from decoded YAML/JSON into `Node` trees.
//!
//! Documents are decoded with `serde_yaml` (which also accepts JSON, since
//! JSON is a subset of YAML 1.2) and then converted into our own node model.
//! Nodes produced here are unmodified, so a later `set` is what makes the
//! tree dirty.
//!
//! # Example
//!
//! ```
//! use pathquill::document::parser::parse_yaml;
//!
//! let doc = parse_yaml(r#"{"name": "Alice", "age": 30}"#).unwrap();
//! assert!(doc.root().is_mapping());
//! assert!(!doc.has_changes());
//! ```

use super::node::{Node, Number, Scalar, Value};
use super::tree::Document;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde_yaml::Value as SerdeValue;

/// Parses a YAML or JSON string into a `Document`.
pub fn parse_yaml(source: &str) -> Result<Document> {
    let value: SerdeValue = serde_yaml::from_str(source).context("Failed to parse document")?;
    Ok(Document::new(parse_value(&value)))
}

/// Converts a decoded `serde_yaml::Value` into an unmodified `Node`.
///
/// Non-string mapping keys are rendered to strings, and tags are dropped in
/// favour of the value they wrap.
pub fn parse_value(value: &SerdeValue) -> Node {
    let converted = match value {
        SerdeValue::Null => Value::Scalar(Scalar::Null),
        SerdeValue::Bool(b) => Value::Scalar(Scalar::Boolean(*b)),
        SerdeValue::Number(n) => Value::Scalar(Scalar::Number(convert_number(n))),
        SerdeValue::String(s) => Value::Scalar(Scalar::String(s.clone())),
        SerdeValue::Sequence(items) => Value::Sequence(items.iter().map(parse_value).collect()),
        SerdeValue::Mapping(entries) => {
            let mut map = IndexMap::with_capacity(entries.len());
            for (key, child) in entries {
                map.insert(key_to_string(key), parse_value(child));
            }
            Value::Mapping(map)
        }
        SerdeValue::Tagged(tagged) => return parse_value(&tagged.value),
    };
    Node::unmodified(converted)
}

/// Parses a value given on the command line.
///
/// The text is read as YAML so `9`, `true`, `null`, `[1, 2]` and `{a: 1}`
/// become typed nodes. Anything that is not valid YAML is kept as a string.
pub fn parse_literal(text: &str) -> Node {
    match serde_yaml::from_str::<SerdeValue>(text) {
        Ok(value) => {
            let mut node = parse_value(&value);
            node.modified = true;
            node
        }
        Err(_) => Node::from(text),
    }
}

fn convert_number(n: &serde_yaml::Number) -> Number {
    match n.as_i64() {
        Some(i) => Number::Integer(i),
        None => Number::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

fn key_to_string(key: &SerdeValue) -> String {
    match key {
        SerdeValue::String(s) => s.clone(),
        SerdeValue::Bool(b) => b.to_string(),
        SerdeValue::Number(n) => n.to_string(),
        SerdeValue::Null => "null".to_string(),
        SerdeValue::Tagged(tagged) => key_to_string(&tagged.value),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::NodeKind;

    #[test]
    fn test_parse_yaml_mapping() {
        let doc = parse_yaml("name: Alice\nage: 30\ntags: [a, b]\n").unwrap();
        let root = doc.root();
        let Value::Mapping(entries) = root.value() else {
            panic!("Expected mapping");
        };
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "age", "tags"]);
        assert_eq!(entries["age"], Node::from(30));
        assert_eq!(entries["tags"].kind(), NodeKind::Sequence);
    }

    #[test]
    fn test_parse_json_input() {
        let doc = parse_yaml(r#"{"a": [1, 2.5, null, true]}"#).unwrap();
        let Value::Mapping(entries) = doc.root().value() else {
            panic!("Expected mapping");
        };
        let Value::Sequence(items) = entries["a"].value() else {
            panic!("Expected sequence");
        };
        assert_eq!(items[0], Node::from(1));
        assert_eq!(items[1], Node::from(2.5));
        assert_eq!(items[2], Node::null());
        assert_eq!(items[3], Node::from(true));
    }

    #[test]
    fn test_non_string_keys_are_stringified() {
        let doc = parse_yaml("1: one\ntrue: yes\n").unwrap();
        let Value::Mapping(entries) = doc.root().value() else {
            panic!("Expected mapping");
        };
        assert!(entries.contains_key("1"));
        assert!(entries.contains_key("true"));
    }

    #[test]
    fn test_parsed_nodes_are_unmodified() {
        let doc = parse_yaml("a: {b: 1}").unwrap();
        assert!(!doc.has_changes());
    }

    #[test]
    fn test_parse_invalid_document() {
        assert!(parse_yaml("a: [1, 2").is_err());
    }

    #[test]
    fn test_parse_literal() {
        assert_eq!(parse_literal("9"), Node::from(9));
        assert_eq!(parse_literal("true"), Node::from(true));
        assert_eq!(parse_literal("hello"), Node::from("hello"));
        assert!(parse_literal("{x: 1}").is_mapping());
        assert_eq!(parse_literal("[1, 2"), Node::from("[1, 2"));
        assert!(parse_literal("9").is_modified());
    }
}
