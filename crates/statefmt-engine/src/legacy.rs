// Legacy output renderer for loosely-typed values (plain JSON, no schema).
//
// Used for output values printed on their own. Leaves are written bare
// (no quoting), and the named map form indents entries by
// LEGACY_MAP_INDENT instead of INDENT_UNIT. Existing consumers parse this
// text, so the layout is kept as is.

use crate::layout::{INDENT_UNIT, LEGACY_MAP_INDENT, sorted_keys};
use serde_json::{Map, Value};

/// Render a list, either bare (`output_name` empty) or as a named
/// `name = [...]` assignment.
///
/// Elements that are not strings, lists or maps are skipped, but the
/// separator after them is still written.
pub fn format_list_output(indent: &str, output_name: &str, output_list: &[Value]) -> String {
    let mut buf = String::new();
    let mut key_indent = "";

    if !output_name.is_empty() {
        buf.push_str(&format!("{}{} = [", indent, output_name));
        key_indent = INDENT_UNIT;
    }

    let nested_indent = format!("{}{}", indent, key_indent);
    for (i, value) in output_list.iter().enumerate() {
        match value {
            Value::String(s) => buf.push_str(&format!("\n{}{}{}", indent, key_indent, s)),
            Value::Array(items) => {
                buf.push_str(&format!("\n{}{}", indent, format_nested_list(&nested_indent, items)))
            }
            Value::Object(entries) => {
                buf.push_str(&format!("\n{}{}", indent, format_nested_map(&nested_indent, entries)))
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }

        if i + 1 != output_list.len() {
            buf.push(',');
        }
    }

    if !output_name.is_empty() {
        if output_list.is_empty() {
            buf.push(']');
        } else {
            buf.push_str(&format!("\n{}]", indent));
        }
    }

    strip_leading_newline(buf)
}

/// Render a list nested inside a list element. Its elements are written
/// inline.
pub fn format_nested_list(indent: &str, output_list: &[Value]) -> String {
    if output_list.is_empty() {
        return format!("{}[]", indent);
    }

    let mut buf = format!("{}[", indent);
    for (i, value) in output_list.iter().enumerate() {
        buf.push_str(&format!("\n{}{}{}", indent, INDENT_UNIT, inline(value)));
        if i + 1 != output_list.len() {
            buf.push(',');
        }
    }
    buf.push_str(&format!("\n{}]", indent));

    strip_leading_newline(buf)
}

/// Render a map nested inside a list element, keys sorted.
pub fn format_nested_map(indent: &str, output_map: &Map<String, Value>) -> String {
    if output_map.is_empty() {
        return format!("{}{{}}", indent);
    }

    let keys = sorted_keys(output_map.keys());
    let mut buf = format!("{}{{", indent);
    for (i, key) in keys.iter().enumerate() {
        buf.push_str(&format!(
            "\n{}{}{} = {}",
            indent,
            INDENT_UNIT,
            key,
            inline(&output_map[*key])
        ));
        if i + 1 != keys.len() {
            buf.push(',');
        }
    }
    buf.push_str(&format!("\n{}}}", indent));

    strip_leading_newline(buf)
}

/// Render a map, either bare or as a named `name = {...}` assignment.
/// Entries carry no separators.
pub fn format_map_output(indent: &str, output_name: &str, output_map: &Map<String, Value>) -> String {
    let keys = sorted_keys(output_map.keys());
    let mut buf = String::new();
    let mut key_indent = "";

    if !output_name.is_empty() {
        buf.push_str(&format!("{}{} = {{", indent, output_name));
        key_indent = LEGACY_MAP_INDENT;
    }

    for key in &keys {
        buf.push_str(&format!(
            "\n{}{}{} = {}",
            indent,
            key_indent,
            key,
            inline(&output_map[*key])
        ));
    }

    if !output_name.is_empty() {
        if output_map.is_empty() {
            buf.push('}');
        } else {
            buf.push_str(&format!("\n{}}}", indent));
        }
    }

    strip_leading_newline(buf)
}

/// Single-line form of a leaf: strings bare, composites as compact JSON.
fn inline(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn strip_leading_newline(buf: String) -> String {
    match buf.strip_prefix('\n') {
        Some(rest) => rest.to_string(),
        None => buf,
    }
}
