//! Block-style YAML output for group files.
//!
//! The front-end loads group files with a YAML 1.1 style schema that turns
//! plain `2025-01-30` or `2025-01-30 23:59:59` into date objects. Every
//! string shaped like a timestamp is therefore written single-quoted; all
//! other scalars are rendered by `serde_yaml`.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Sequence, Value};

/// YAML 1.1 `timestamp` resolver pattern (date, or date and time).
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[0-9]{4}-[0-9]{2}-[0-9]{2}|[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}(?:[Tt]|[ \t]+)[0-9]{1,2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]*)?(?:[ \t]*(?:Z|[-+][0-9]{1,2}(?::[0-9]{2})?))?)$",
    )
    .expect("timestamp pattern is valid")
});

/// Whether a plain scalar with this text would load as a timestamp.
pub fn looks_like_timestamp(text: &str) -> bool {
    TIMESTAMP.is_match(text)
}

/// Render a value as block YAML: mappings one key per line, sequences
/// inside mappings at the key's indentation.
///
/// # Examples
/// ```
/// use confsync::utils::yaml::to_block_yaml;
///
/// let value: serde_yaml::Value =
///     serde_yaml::from_str("- deadline: '2025-01-30 23:59:59'\n  tags: [ml]\n").unwrap();
/// assert_eq!(
///     to_block_yaml(&value).unwrap(),
///     "- deadline: '2025-01-30 23:59:59'\n  tags:\n  - ml\n"
/// );
/// ```
pub fn to_block_yaml(value: &Value) -> Result<String, serde_yaml::Error> {
    let mut out = String::new();
    match value {
        Value::Sequence(items) if !items.is_empty() => write_sequence(&mut out, items, 0)?,
        Value::Mapping(map) if !map.is_empty() => write_mapping(&mut out, map, 0, false)?,
        other => {
            out.push_str(&scalar(other)?);
            out.push('\n');
        }
    }
    Ok(out)
}

fn write_sequence(out: &mut String, items: &Sequence, indent: usize) -> Result<(), serde_yaml::Error> {
    for item in items {
        out.push_str(&" ".repeat(indent));
        out.push('-');
        match item {
            Value::Mapping(map) if !map.is_empty() => {
                out.push(' ');
                write_mapping(out, map, indent + 2, true)?;
            }
            Value::Sequence(nested) if !nested.is_empty() => {
                out.push('\n');
                write_sequence(out, nested, indent + 2)?;
            }
            other => {
                out.push(' ');
                out.push_str(&scalar(other)?);
                out.push('\n');
            }
        }
    }
    Ok(())
}

/// `first_inline`: the first key continues a `- ` already written.
fn write_mapping(
    out: &mut String,
    map: &Mapping,
    indent: usize,
    first_inline: bool,
) -> Result<(), serde_yaml::Error> {
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 || !first_inline {
            out.push_str(&" ".repeat(indent));
        }
        out.push_str(&scalar(key)?);
        out.push(':');
        match value {
            Value::Mapping(nested) if !nested.is_empty() => {
                out.push('\n');
                write_mapping(out, nested, indent + 2, false)?;
            }
            Value::Sequence(items) if !items.is_empty() => {
                out.push('\n');
                write_sequence(out, items, indent)?;
            }
            other => {
                out.push(' ');
                out.push_str(&scalar(other)?);
                out.push('\n');
            }
        }
    }
    Ok(())
}

/// Single-line rendering of a scalar, or of an empty collection.
fn scalar(value: &Value) -> Result<String, serde_yaml::Error> {
    if let Value::String(text) = value {
        if looks_like_timestamp(text) {
            return Ok(format!("'{text}'"));
        }
    }

    let rendered = serde_yaml::to_string(value)?;
    let rendered = rendered.trim_end_matches('\n');
    if rendered.contains('\n') {
        if let Value::String(text) = value {
            // Block scalars would need re-indenting; a JSON string is a valid
            // double-quoted YAML scalar on one line.
            return Ok(serde_json::to_string(text).unwrap_or_else(|_| rendered.to_string()));
        }
    }
    Ok(rendered.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(yaml: &str) -> String {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        to_block_yaml(&value).unwrap()
    }

    #[test]
    fn test_timestamp_shapes() {
        assert!(looks_like_timestamp("2025-07-13"));
        assert!(looks_like_timestamp("2025-01-30 23:59:59"));
        assert!(looks_like_timestamp("2025-1-3T9:00:00Z"));
        assert!(looks_like_timestamp("2025-01-30 23:59:59 +08:00"));
        assert!(!looks_like_timestamp("2025-7-13"));
        assert!(!looks_like_timestamp("July 13-19, 2025"));
        assert!(!looks_like_timestamp("TBD"));
        assert!(!looks_like_timestamp("2025"));
    }

    #[test]
    fn test_timestamps_are_single_quoted() {
        let out = render("- deadline: '2025-01-30 23:59:59'\n  start: '2025-07-13'\n  note: '2025-05-01'\n");
        assert_eq!(
            out,
            "- deadline: '2025-01-30 23:59:59'\n  start: '2025-07-13'\n  note: '2025-05-01'\n"
        );
    }

    #[test]
    fn test_ambiguous_scalars_stay_strings() {
        let out = render("- id: '2025'\n  flag: 'true'\n  empty: ''\n  year: 2025\n");
        let back: Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(back[0]["id"], Value::String("2025".to_string()));
        assert_eq!(back[0]["flag"], Value::String("true".to_string()));
        assert_eq!(back[0]["empty"], Value::String(String::new()));
        assert_eq!(back[0]["year"], Value::Number(2025.into()));
    }

    #[test]
    fn test_nested_collections() {
        let out = render(
            "- title: ICML\n  tags: []\n  deadlines:\n  - type: submission\n    date: '2025-01-30 23:59:59'\n  meta:\n    sponsor: IMLS\n",
        );
        assert_eq!(
            out,
            "- title: ICML\n  tags: []\n  deadlines:\n  - type: submission\n    date: '2025-01-30 23:59:59'\n  meta:\n    sponsor: IMLS\n"
        );
    }

    #[test]
    fn test_multiline_and_unicode_strings_round_trip() {
        let value = Value::Sequence(vec![Value::Mapping(Mapping::from_iter([(
            Value::String("note".to_string()),
            Value::String("Première ligne\nsecond: line".to_string()),
        )]))]);
        let out = to_block_yaml(&value).unwrap();
        assert!(out.contains("Première"));
        let back: Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(to_block_yaml(&Value::Sequence(Vec::new())).unwrap(), "[]\n");
    }
}
