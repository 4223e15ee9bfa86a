use crate::layout::{INDENT_WIDTH, pad, sorted_keys};
use statefmt_types::Value;
use std::collections::HashMap;
use std::fmt::Write;

/// Render a value as a configuration literal.
///
/// `indent` is the column of the line the value starts on. Nested elements
/// are written one `INDENT_UNIT` deeper and the closing bracket lines up
/// with `indent`, so the caller only writes the text before the value.
pub fn render_value(value: &Value, indent: usize) -> String {
    let mut buf = String::new();
    write_value(&mut buf, value, indent);
    buf
}

/// Append the rendering of `value` to `buf`; see [`render_value`].
pub fn write_value(buf: &mut String, value: &Value, indent: usize) {
    match value {
        Value::Null => buf.push_str("null"),
        Value::String(s) => buf.push_str(&format_string(s)),
        Value::Number(n) => buf.push_str(&format_number(n)),
        Value::Bool(b) => buf.push_str(if *b { "true" } else { "false" }),
        Value::List(items) | Value::Set(items) | Value::Tuple(items) => {
            write_sequence(buf, items, indent)
        }
        // Null map entries stay visible; null object fields are absent
        Value::Map(entries) => write_entries(buf, entries, indent, false),
        Value::Object(fields) => write_entries(buf, fields, indent, true),
    }
}

fn write_sequence(buf: &mut String, items: &[Value], indent: usize) {
    if items.is_empty() {
        buf.push_str("[]");
        return;
    }

    let inner = indent + INDENT_WIDTH;
    buf.push_str("[\n");
    for (i, item) in items.iter().enumerate() {
        buf.push_str(&pad(inner));
        write_value(buf, item, inner);
        if i + 1 < items.len() {
            buf.push(',');
        }
        buf.push('\n');
    }
    buf.push_str(&pad(indent));
    buf.push(']');
}

fn write_entries(buf: &mut String, entries: &HashMap<String, Value>, indent: usize, skip_null: bool) {
    let keys: Vec<&str> = sorted_keys(entries.keys())
        .into_iter()
        .filter(|key| !skip_null || !entries[*key].is_null())
        .collect();

    if keys.is_empty() {
        buf.push_str("{}");
        return;
    }

    let inner = indent + INDENT_WIDTH;
    buf.push_str("{\n");
    for (i, key) in keys.iter().enumerate() {
        buf.push_str(&pad(inner));
        buf.push_str(&format_key(key));
        buf.push_str(" = ");
        write_value(buf, &entries[*key], inner);
        if i + 1 < keys.len() {
            buf.push(',');
        }
        buf.push('\n');
    }
    buf.push_str(&pad(indent));
    buf.push('}');
}

/// Quote a string as a double-quoted template literal.
///
/// Template introducers are doubled (`${` becomes `$${`) so the text reads
/// back literally.
pub fn format_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Canonical number literal: integral values never carry a fraction.
pub fn format_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

/// Object and map keys print bare when they are identifiers.
pub fn format_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if is_identifier {
        key.to_string()
    } else {
        format_string(key)
    }
}
