use crate::color::{Colorize, RESET};
use crate::diagnostics::DiagnosticSink;
use crate::layout::sorted_keys;
use crate::options::FormatOptions;
use crate::value::write_value;
use crate::walker::{WalkContext, write_module};
use crate::Result;
use statefmt_types::{AttributeDecoder, SchemaResolver, StateTree};

/// Text returned for a state without any module.
pub const EMPTY_STATE_MESSAGE: &str = "The state file is empty. No resources are represented.";

/// Inputs of [`format_state`]. All collaborators are required.
pub struct StateOpts<'a> {
    pub state: &'a StateTree,
    pub schemas: &'a dyn SchemaResolver,
    pub decoder: &'a dyn AttributeDecoder,
    pub color: &'a dyn Colorize,
    pub options: FormatOptions,
}

/// Render a whole state: every module's resource blocks in module order,
/// then the root module's outputs sorted by name.
///
/// Decode failures are sent to `sink` and only affect their own instance.
/// A resource without schema fails the whole call.
pub fn format_state(opts: &StateOpts<'_>, sink: &mut dyn DiagnosticSink) -> Result<String> {
    let state = opts.state;
    if state.is_empty() {
        return Ok(EMPTY_STATE_MESSAGE.to_string());
    }

    let mut buf = String::from(RESET);
    let ctx = WalkContext {
        schemas: opts.schemas,
        decoder: opts.decoder,
        options: &opts.options,
    };

    for module in state.modules.values() {
        write_module(&mut buf, module, &ctx, sink)?;
    }

    if let Some(root) = state.root_module()
        && !root.outputs.is_empty()
    {
        buf.push_str("\nOutputs:\n\n");
        for name in sorted_keys(root.outputs.keys()) {
            buf.push_str(&format!("{} = ", name));
            write_value(&mut buf, &root.outputs[name].value, 0);
            buf.push('\n');
        }
    }

    // Resolved markup may leave blank lines at either end
    Ok(opts.color.color(buf.trim()).trim().to_string())
}
