//! Serializing front matter back to text
//!
//! Encoding goes through `serde_yaml`, which picks scalar styles on its own.
//! Two cosmetic passes run afterwards so the output reads like hand-written
//! front matter: keys made only of letters, digits, `_` and `-` lose their
//! quotes, and block sequences under a key are indented by two spaces.

use super::reader::DELIMITER;
use crate::core::{Mapping, Value};
use crate::error::Result;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Spaces added in front of a block sequence nested under a key
const SEQUENCE_INDENT: usize = 2;

/// Encode a front matter mapping as YAML text
///
/// An empty mapping encodes to the empty string, which callers treat as "no
/// front matter block".
pub fn format_front_matter(map: &Mapping) -> Result<String> {
    if map.is_empty() {
        return Ok(String::new());
    }
    let yaml = serde_yaml::to_string(map)?;
    Ok(indent_sequences(&unquote_simple_keys(&yaml)))
}

/// Encode a single value for display
///
/// Scalars print as bare text followed by a newline. Sequences and mappings
/// print as block YAML.
pub fn format_value(value: &Value) -> Result<String> {
    match value.scalar_text() {
        Some(text) => Ok(format!("{}\n", text)),
        None => {
            let yaml = serde_yaml::to_string(value)?;
            Ok(indent_sequences(&unquote_simple_keys(&yaml)))
        }
    }
}

/// Remove quotes from mapping keys that do not need them
///
/// Lines inside block scalars (`|`, `>`) are string content and are left
/// untouched.
pub fn unquote_simple_keys(yaml: &str) -> String {
    let mut output = String::with_capacity(yaml.len());
    let mut block = BlockScalar::default();

    for line in yaml.split_inclusive('\n') {
        if block.contains(line) {
            output.push_str(line);
            continue;
        }

        let line = quoted_key_regex().replace(line, |caps: &Captures| {
            let key = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
            format!("{}{}:", &caps[1], key)
        });
        block.observe(&line);
        output.push_str(&line);
    }

    output
}

/// Indent block sequences that are the value of a mapping key
///
/// `serde_yaml` writes such sequences flush with their key (`tags:\n- a`).
/// Each one is moved two spaces right of the key, together with everything
/// nested inside its items. Sequences at the top level stay where they are.
pub fn indent_sequences(yaml: &str) -> String {
    let mut output = String::with_capacity(yaml.len());
    let mut block = BlockScalar::default();
    // (indent of the item lines as emitted, total shift inside the sequence)
    let mut frames: Vec<(usize, usize)> = Vec::new();
    let mut open_key_column: Option<usize> = None;

    for line in yaml.split_inclusive('\n') {
        let shift = frames.last().map_or(0, |&(_, shift)| shift);

        if block.contains(line) {
            if !line.trim().is_empty() {
                push_spaces(&mut output, shift);
            }
            output.push_str(line);
            open_key_column = None;
            continue;
        }

        let indent = leading_spaces(line);
        let body = &line[indent..];
        let is_item = body.starts_with("- ") || body.trim_end() == "-";

        while let Some(&(item_indent, _)) = frames.last() {
            if indent < item_indent || (indent == item_indent && !is_item) {
                frames.pop();
            } else {
                break;
            }
        }

        let starts_sequence = is_item
            && open_key_column == Some(indent)
            && frames.last().map_or(true, |&(item_indent, _)| item_indent != indent);
        if starts_sequence {
            let outer = frames.last().map_or(0, |&(_, shift)| shift);
            frames.push((indent, outer + SEQUENCE_INDENT));
        }

        push_spaces(&mut output, frames.last().map_or(0, |&(_, shift)| shift));
        output.push_str(line);

        let (column, rest) = split_item_prefix(line);
        open_key_column = rest.ends_with(':').then_some(column);
        block.observe(line);
    }

    output
}

/// Assemble a full document from front matter text and body bytes
///
/// Blank front matter yields the body alone, without delimiters.
pub fn compose(front_matter: &str, body: &[u8]) -> Vec<u8> {
    if front_matter.trim().is_empty() {
        return body.to_vec();
    }

    let mut output = Vec::with_capacity(front_matter.len() + body.len() + 10);
    output.extend_from_slice(DELIMITER.as_bytes());
    output.push(b'\n');
    output.extend_from_slice(front_matter.as_bytes());
    if !front_matter.ends_with('\n') {
        output.push(b'\n');
    }
    output.extend_from_slice(DELIMITER.as_bytes());
    output.push(b'\n');
    output.extend_from_slice(body);
    output
}

/// Tracks block scalar (`|`, `>`) content across lines
#[derive(Debug, Default)]
struct BlockScalar {
    parent_column: Option<usize>,
}

impl BlockScalar {
    /// Whether `line` belongs to the block scalar opened earlier
    fn contains(&mut self, line: &str) -> bool {
        if let Some(parent) = self.parent_column {
            if line.trim().is_empty() || leading_spaces(line) > parent {
                return true;
            }
            self.parent_column = None;
        }
        false
    }

    /// Start tracking if `line` opens a block scalar
    fn observe(&mut self, line: &str) {
        if !block_scalar_regex().is_match(line.trim_end()) {
            return;
        }
        let (column, rest) = split_item_prefix(line);
        // a bare `- |` item belongs to the sequence, not to a key
        self.parent_column = Some(if rest.starts_with(['|', '>']) {
            column.saturating_sub(SEQUENCE_INDENT)
        } else {
            column
        });
    }
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Column where the content of `line` starts once `- ` item markers are skipped
fn split_item_prefix(line: &str) -> (usize, &str) {
    let mut column = leading_spaces(line);
    let mut rest = &line[column..];
    while let Some(after) = rest.strip_prefix("- ") {
        column += 2;
        rest = after;
    }
    (column, rest.trim_end())
}

fn push_spaces(output: &mut String, count: usize) {
    output.extend(std::iter::repeat(' ').take(count));
}

fn quoted_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^( *(?:- )*)(?:"([A-Za-z0-9_-]+)"|'([A-Za-z0-9_-]+)'):"#)
            .expect("quoted key pattern is valid")
    })
}

fn block_scalar_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:^|[ :])[|>][-+]?[0-9]?[-+]?$").expect("block scalar pattern is valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FrontMatter;
    use pretty_assertions::assert_eq;

    fn mapping(text: &str) -> Mapping {
        FrontMatter::parse(text).unwrap().into_mapping()
    }

    #[test]
    fn test_empty_mapping_is_empty_text() {
        assert_eq!(format_front_matter(&Mapping::new()).unwrap(), "");
    }

    #[test]
    fn test_nested_uses_two_space_indent() {
        let text = format_front_matter(&mapping("object:\n  other: value\n  field: 5\n")).unwrap();
        assert_eq!(text, "object:\n  other: value\n  field: 5\n");
    }

    #[test]
    fn test_key_order_is_kept() {
        let text = format_front_matter(&mapping("zeta: 1\nalpha: 2\n")).unwrap();
        assert_eq!(text, "zeta: 1\nalpha: 2\n");
    }

    #[test]
    fn test_long_lines_are_not_wrapped() {
        let long = "word ".repeat(40);
        let mut map = Mapping::new();
        map.insert("long", Value::from(long.trim()));
        let text = format_front_matter(&map).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_numeric_looking_keys_are_unquoted() {
        let mut map = Mapping::new();
        map.insert("123", Value::from("x"));
        map.insert("true", Value::from("y"));
        let text = format_front_matter(&map).unwrap();
        assert_eq!(text, "123: x\ntrue: y\n");
    }

    #[test]
    fn test_values_keep_encoder_quoting() {
        let mut map = Mapping::new();
        map.insert("count", Value::from("123"));
        let text = format_front_matter(&map).unwrap();
        assert_ne!(text, "count: 123\n");
        assert_eq!(mapping(&text).get("count"), Some(&Value::from("123")));
    }

    #[test]
    fn test_unquote_simple_keys() {
        let input = "\"plain\": 1\n  'nested-key_2': 2\n- \"item\": 3\n\"has space\": 4\n\"a.b\": 5\n";
        let expected = "plain: 1\n  nested-key_2: 2\n- item: 3\n\"has space\": 4\n\"a.b\": 5\n";
        assert_eq!(unquote_simple_keys(input), expected);
    }

    #[test]
    fn test_unquote_skips_block_scalars() {
        let input = "text: |-\n  \"inner\": kept\n  more\n\"after\": 1\n";
        let expected = "text: |-\n  \"inner\": kept\n  more\nafter: 1\n";
        assert_eq!(unquote_simple_keys(input), expected);
    }

    #[test]
    fn test_multiline_string_round_trips() {
        let mut map = Mapping::new();
        map.insert("text", Value::from("\"k\": v\nsecond line"));
        let text = format_front_matter(&map).unwrap();
        assert_eq!(mapping(&text), map);
    }

    #[test]
    fn test_round_trip() {
        let source = "title: Test\ncount: 3\nratio: 0.5\ndraft: false\ntags:\n- a\n- b\nmeta:\n  author:\n    name: Jane\n  empty: {}\n";
        let map = mapping(source);
        let text = format_front_matter(&map).unwrap();
        assert_eq!(mapping(&text), map);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&Value::from("Hello World")).unwrap(), "Hello World\n");
        assert_eq!(format_value(&Value::Int(5)).unwrap(), "5\n");
        assert_eq!(format_value(&Value::Bool(true)).unwrap(), "true\n");

        let seq = Value::Sequence(vec![Value::from("go"), Value::from("cli")]);
        assert_eq!(format_value(&seq).unwrap(), "- go\n- cli\n");

        let nested = Value::Mapping(mapping("other: value\nfield: 5\n"));
        assert_eq!(format_value(&nested).unwrap(), "other: value\nfield: 5\n");
    }

    #[test]
    fn test_indent_sequences_under_keys() {
        let text = format_front_matter(&mapping("title: Post\ntags: [go, cli]\n")).unwrap();
        assert_eq!(text, "title: Post\ntags:\n  - go\n  - cli\n");
    }

    #[test]
    fn test_indent_nested_sequences() {
        let input = "items:\n- name: a\n  list:\n  - x\n  - y\n- - inner\n  - pair\nafter: 1\n";
        let expected = "items:\n  - name: a\n    list:\n      - x\n      - y\n  - - inner\n    - pair\nafter: 1\n";
        assert_eq!(indent_sequences(input), expected);
    }

    #[test]
    fn test_indent_leaves_top_level_sequences() {
        assert_eq!(indent_sequences("- a\n- b\n"), "- a\n- b\n");
    }

    #[test]
    fn test_indent_shifts_block_scalar_content() {
        let input = "notes:\n- |-\n  first\n\n  second\n- plain\nnext: 1\n";
        let expected = "notes:\n  - |-\n    first\n\n    second\n  - plain\nnext: 1\n";
        assert_eq!(indent_sequences(input), expected);
    }

    #[test]
    fn test_indented_sequences_round_trip() {
        let source = "a:\n  b:\n  - 1\n  - c: [x, y]\n    d: text\nz:\n- - 1\n  - 2\n";
        let map = mapping(source);
        let text = format_front_matter(&map).unwrap();
        assert!(text.contains("\n  b:\n    - 1\n"));
        assert_eq!(mapping(&text), map);
    }

    #[test]
    fn test_compose_with_front_matter() {
        assert_eq!(compose("title: x\n", b"Body"), b"---\ntitle: x\n---\nBody");
        assert_eq!(compose("title: x", b""), b"---\ntitle: x\n---\n");
    }

    #[test]
    fn test_compose_without_front_matter() {
        assert_eq!(compose("", b"Body only\n"), b"Body only\n");
        assert_eq!(compose("  \n", b"Body only\n"), b"Body only\n");
    }

    #[test]
    fn test_compose_keeps_non_utf8_body() {
        assert_eq!(compose("a: 1\n", b"Caf\xE9\n"), b"---\na: 1\n---\nCaf\xE9\n");
    }
}
