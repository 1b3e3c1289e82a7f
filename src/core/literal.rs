//! Type inference for command-line literals
//!
//! The right-hand side of `key=value` is inferred in a fixed order: integer,
//! float, boolean, flow collection, then string. The order matters because
//! `123` and `true` are also valid strings.

use super::key_path::KeyPath;
use super::value::Value;
use crate::error::{FrontmatterError, Result};
use log::debug;
use std::str::FromStr;

/// Infer a typed value from a raw literal
pub fn parse_literal(raw: &str) -> Value {
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Int(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return Value::Float(f);
    }
    if let Some(b) = parse_bool(raw) {
        return Value::Bool(b);
    }
    if is_bracketed(raw, '[', ']') || is_bracketed(raw, '{', '}') {
        return match parse_collection(raw) {
            Ok(value) => value,
            Err(err) => {
                debug!("treating {:?} as a string: {}", raw, err);
                Value::String(strip_quotes(raw).to_string())
            }
        };
    }
    Value::String(strip_quotes(raw).to_string())
}

/// Booleans as YAML 1.2 core schema spells them
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

fn is_bracketed(raw: &str, open: char, close: char) -> bool {
    raw.len() >= 2 && raw.starts_with(open) && raw.ends_with(close)
}

/// Decode a flow list or map. Brace-delimited text is tried as a JSON object
/// first, then as YAML.
fn parse_collection(raw: &str) -> Result<Value> {
    if raw.starts_with('{') {
        if let Ok(map) = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(raw) {
            return Ok(Value::from_json(serde_json::Value::Object(map)));
        }
    }
    let decoded: serde_yaml::Value = serde_yaml::from_str(raw)?;
    Value::from_yaml(decoded)
}

/// Strip one pair of surrounding double quotes
fn strip_quotes(raw: &str) -> &str {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}

/// A parsed `key=value` argument
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub path: KeyPath,
    pub value: Value,
}

impl Assignment {
    /// Parse `key=value`, splitting on the first `=` only
    pub fn parse(input: &str) -> Result<Self> {
        let (key, raw) = input
            .split_once('=')
            .ok_or_else(|| FrontmatterError::invalid_assignment(input))?;
        if key.is_empty() {
            return Err(FrontmatterError::invalid_assignment(input));
        }
        Ok(Self {
            path: KeyPath::parse(key),
            value: parse_literal(raw),
        })
    }
}

impl FromStr for Assignment {
    type Err = FrontmatterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_integers() {
        assert_eq!(parse_literal("123"), Value::Int(123));
        assert_eq!(parse_literal("-42"), Value::Int(-42));
        assert_eq!(parse_literal("+7"), Value::Int(7));
    }

    #[test]
    fn test_integer_needs_full_match() {
        assert_eq!(parse_literal("123abc"), Value::from("123abc"));
        assert_eq!(parse_literal(" 12"), Value::from(" 12"));
    }

    #[test]
    fn test_floats() {
        assert_eq!(parse_literal("12.34"), Value::Float(12.34));
        assert_eq!(parse_literal("1e3"), Value::Float(1000.0));
        assert_eq!(parse_literal("-0.5"), Value::Float(-0.5));
    }

    #[test]
    fn test_integer_wins_over_float() {
        assert_eq!(parse_literal("5"), Value::Int(5));
    }

    #[test]
    fn test_booleans() {
        assert_eq!(parse_literal("true"), Value::Bool(true));
        assert_eq!(parse_literal("False"), Value::Bool(false));
        assert_eq!(parse_literal("TRUE"), Value::Bool(true));
        assert_eq!(parse_literal("tRuE"), Value::from("tRuE"));
        assert_eq!(parse_literal("yes"), Value::from("yes"));
    }

    #[test]
    fn test_flow_sequence() {
        assert_eq!(
            parse_literal(r#"["tag1", "tag2", "tag3"]"#),
            Value::Sequence(vec![
                Value::from("tag1"),
                Value::from("tag2"),
                Value::from("tag3"),
            ])
        );
        assert_eq!(
            parse_literal("[1, two, 3.5]"),
            Value::Sequence(vec![Value::Int(1), Value::from("two"), Value::Float(3.5)])
        );
    }

    #[test]
    fn test_json_object() {
        let value = parse_literal(r#"{"x":1,"y":"two"}"#);
        let map = value.as_mapping().unwrap();
        assert_eq!(map.get("x"), Some(&Value::Int(1)));
        assert_eq!(map.get("y"), Some(&Value::from("two")));
    }

    #[test]
    fn test_yaml_flow_mapping_fallback() {
        let value = parse_literal("{a: 1, b: [x, y]}");
        let map = value.as_mapping().unwrap();
        assert_eq!(map.get("a"), Some(&Value::Int(1)));
        assert_eq!(
            map.get("b"),
            Some(&Value::Sequence(vec![Value::from("x"), Value::from("y")]))
        );
    }

    #[test]
    fn test_broken_collection_is_string() {
        assert_eq!(parse_literal("[a, [b]"), Value::from("[a, [b]"));
        assert_eq!(parse_literal("{a: [}"), Value::from("{a: [}"));
    }

    #[test]
    fn test_quoted_strings() {
        assert_eq!(parse_literal("\"Hello World\""), Value::from("Hello World"));
        assert_eq!(parse_literal("\"\"nested\"\""), Value::from("\"nested\""));
        assert_eq!(parse_literal("\"unbalanced"), Value::from("\"unbalanced"));
        assert_eq!(parse_literal("\""), Value::from("\""));
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(parse_literal("Hello World"), Value::from("Hello World"));
        assert_eq!(parse_literal(""), Value::from(""));
    }

    #[test]
    fn test_assignment_splits_on_first_equals() {
        let assignment = Assignment::parse("url=http://example.com?query=123").unwrap();
        assert_eq!(assignment.path, KeyPath::parse("url"));
        assert_eq!(assignment.value, Value::from("http://example.com?query=123"));
    }

    #[test]
    fn test_assignment_dotted_key() {
        let assignment: Assignment = "object.field=5".parse().unwrap();
        assert_eq!(assignment.path.segments(), ["object", "field"]);
        assert_eq!(assignment.value, Value::Int(5));
    }

    #[test]
    fn test_assignment_empty_value() {
        let assignment = Assignment::parse("note=").unwrap();
        assert_eq!(assignment.value, Value::from(""));
    }

    #[test]
    fn test_invalid_assignments() {
        assert!(matches!(
            Assignment::parse("novalue"),
            Err(FrontmatterError::InvalidAssignment { .. })
        ));
        assert!(matches!(
            Assignment::parse("=value"),
            Err(FrontmatterError::InvalidAssignment { .. })
        ));
    }
}
