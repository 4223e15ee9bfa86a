use crate::loader::load_state;
use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use serde_json::Value as JsonValue;
use statefmt_engine::{format_list_output, format_map_output};
use std::path::Path;

/// Shown instead of a sensitive value when listing all outputs. Asking for
/// the output by name prints the value.
const SENSITIVE_PLACEHOLDER: &str = "<sensitive>";

pub fn handle(state_path: &Path, name: Option<&str>, enable_color: bool) -> Result<()> {
    let state = load_state(state_path)?;
    let outputs = match state.root_module() {
        Some(root) if !root.outputs.is_empty() => &root.outputs,
        _ => {
            let warning = "No outputs found in the state file.";
            if enable_color {
                eprintln!("{}", warning.yellow());
            } else {
                eprintln!("{}", warning);
            }
            return Ok(());
        }
    };

    match name {
        Some(name) => {
            let Some(output) = outputs.get(name) else {
                bail!("output {:?} not found", name);
            };
            println!("{}", format_output("", &output.value.to_json()));
        }
        None => {
            let mut names: Vec<&String> = outputs.keys().collect();
            names.sort();
            for name in names {
                let output = &outputs[name];
                if output.sensitive {
                    println!("{} = {}", name, SENSITIVE_PLACEHOLDER);
                } else {
                    println!("{}", format_output(name, &output.value.to_json()));
                }
            }
        }
    }
    Ok(())
}

/// Lists and maps go through the legacy renderer; scalars print bare, or as
/// `name = value` when named.
fn format_output(name: &str, value: &JsonValue) -> String {
    let scalar = match value {
        JsonValue::Array(items) => return format_list_output("", name, items),
        JsonValue::Object(entries) => return format_map_output("", name, entries),
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    };
    if name.is_empty() {
        scalar
    } else {
        format!("{} = {}", name, scalar)
    }
}
