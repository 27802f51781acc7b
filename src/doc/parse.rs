//! Document parser.
//!
//! Reads the front-matter block back into a plain JSON mapping. The parser
//! is total: missing markers, hand-edited junk, or any malformed input yield
//! an empty object rather than an error.
//!
//! The grammar is a line-level finite-state machine over exactly two nesting
//! levels (top-level keys and one child level) plus one list-of-scalars
//! level under a child key. Deeper input is absorbed, not rejected.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

fn front_matter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\A---[ \t\r]*\n(.*?)\n---").unwrap())
}

fn list_item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s+-\s+(.+)").unwrap())
}

fn child_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s+(\w+)\s*:\s*(.*)").unwrap())
}

fn top_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\w+)\s*:\s*(.*)").unwrap())
}

/// Parse state: at the top level, inside a nested mapping, or collecting
/// list items under a child key of that mapping.
#[derive(Debug, Clone)]
enum LineState {
    TopLevel,
    Mapping(String),
    List { parent: String, key: String },
}

impl LineState {
    fn parent(&self) -> Option<&str> {
        match self {
            LineState::TopLevel => None,
            LineState::Mapping(parent) => Some(parent),
            LineState::List { parent, .. } => Some(parent),
        }
    }
}

/// Extracts and parses the front-matter block of `text`.
///
/// Returns an empty object when no block bounded by two marker lines is
/// found. Never fails.
pub fn parse_front_matter(text: &str) -> Value {
    let Some(caps) = front_matter_re().captures(text) else {
        return Value::Object(Map::new());
    };
    let body = caps.get(1).map(|m| m.as_str()).unwrap_or("");

    let mut result = Map::new();
    let mut state = LineState::TopLevel;
    for line in body.split('\n') {
        state = step(&mut result, state, line);
    }

    Value::Object(result)
}

/// One transition of the state machine, by input line category.
fn step(result: &mut Map<String, Value>, state: LineState, line: &str) -> LineState {
    let stripped = line.trim();

    // Blank and comment lines reset both parent and list state.
    if stripped.is_empty() || stripped.starts_with('#') {
        return LineState::TopLevel;
    }

    // List item, only while a list is actively being collected.
    if let LineState::List { parent, key } = &state {
        if let Some(caps) = list_item_re().captures(line) {
            let item = coerce(caps.get(1).map(|m| m.as_str().trim()).unwrap_or(""));
            if let Some(items) = list_slot(result, parent, key) {
                items.push(item);
            }
            return state;
        }
    }

    // Any other line ends list collection; children still attach to the same
    // parent mapping.
    let parent = state.parent().map(str::to_string);

    if let Some(parent) = &parent {
        if line.starts_with("  ") {
            if let Some(caps) = child_re().captures(line) {
                let key = caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string();
                let raw = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
                if let Some(Value::Object(map)) = result.get_mut(parent) {
                    if raw.is_empty() {
                        // Child key with no value opens an empty list.
                        map.insert(key.clone(), Value::Array(Vec::new()));
                        return LineState::List {
                            parent: parent.clone(),
                            key,
                        };
                    }
                    map.insert(key, coerce(raw));
                }
            }
            // Indented but unrecognized (or over-nested): absorbed.
            return LineState::Mapping(parent.clone());
        }
    }

    if let Some(caps) = top_re().captures(line) {
        let key = caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string();
        let raw = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
        if raw.is_empty() {
            // Start of a nested block.
            result.insert(key.clone(), Value::Object(Map::new()));
            return LineState::Mapping(key);
        }
        result.insert(key, coerce(raw));
        return LineState::TopLevel;
    }

    // Unrecognized line: parse state survives it.
    match parent {
        Some(parent) => LineState::Mapping(parent),
        None => LineState::TopLevel,
    }
}

fn list_slot<'a>(
    result: &'a mut Map<String, Value>,
    parent: &str,
    key: &str,
) -> Option<&'a mut Vec<Value>> {
    match result.get_mut(parent) {
        Some(Value::Object(map)) => match map.get_mut(key) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

/// Scalar coercion applied to every parsed value.
fn coerce(raw: &str) -> Value {
    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        // A digit run too long for i64 stays a string; the parser is total.
        if let Ok(n) = raw.parse::<i64>() {
            return Value::from(n);
        }
    }
    let bytes = raw.as_bytes();
    if raw.len() >= 2 {
        let quoted = (bytes[0] == b'"' && bytes[raw.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[raw.len() - 1] == b'\'');
        if quoted {
            return Value::String(raw[1..raw.len() - 1].to_string());
        }
    }
    Value::String(raw.to_string())
}
