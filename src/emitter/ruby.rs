//! Rendering JSON values as Ruby literals.

use serde_json::{Map, Value};
use std::fmt::Write;

const INDENT: &str = "  ";

/// Body of a single-quoted Ruby string; only `\` and `'` need escaping.
pub fn escape_single(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

pub fn single_quoted(text: &str) -> String {
    format!("'{}'", escape_single(text))
}

/// Double-quoted Ruby string the way `String#inspect` writes it.
pub fn double_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{1b}' => out.push_str("\\e"),
            '#' if matches!(chars.peek(), Some('{' | '$' | '@')) => out.push_str("\\#"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `:name` for identifier-like keys, a quoted string otherwise.
pub fn hash_key(key: &str) -> String {
    let mut chars = key.chars();
    let symbol_like = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if symbol_like {
        format!(":{key}")
    } else {
        double_quoted(key)
    }
}

/// One-line literal, as `inspect` prints it.
pub fn inspect(value: &Value) -> String {
    match value {
        Value::Null => "nil".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => double_quoted(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(inspect).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let pairs: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{} => {}", double_quoted(k), inspect(v)))
                .collect();
            format!("{{{}}}", pairs.join(", "))
        }
    }
}

/// Multi-line hash literal with left-aligned `=>` columns.
pub fn pretty_hash(map: &Map<String, Value>) -> String {
    let mut out = String::new();
    pretty_map(&mut out, map, 0);
    out
}

fn pretty_into(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Array(items) if !items.is_empty() => {
            out.push_str("[\n");
            for (idx, item) in items.iter().enumerate() {
                out.push_str(&INDENT.repeat(depth + 1));
                pretty_into(out, item, depth + 1);
                if idx + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&INDENT.repeat(depth));
            out.push(']');
        }
        Value::Object(map) if !map.is_empty() => pretty_map(out, map, depth),
        other => out.push_str(&inspect(other)),
    }
}

fn pretty_map(out: &mut String, map: &Map<String, Value>, depth: usize) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }
    let keys: Vec<String> = map.keys().map(|k| hash_key(k)).collect();
    let width = keys.iter().map(|k| k.chars().count()).max().unwrap_or(0);
    out.push_str("{\n");
    for (idx, (key, value)) in keys.iter().zip(map.values()).enumerate() {
        out.push_str(&INDENT.repeat(depth + 1));
        let _ = write!(out, "{key:<width$} => ");
        pretty_into(out, value, depth + 1);
        if idx + 1 < map.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(&INDENT.repeat(depth));
    out.push('}');
}
