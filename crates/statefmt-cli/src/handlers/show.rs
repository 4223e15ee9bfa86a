use crate::color::MarkupColorizer;
use crate::config::DecodeErrors;
use crate::console::ConsoleSink;
use crate::loader::{load_schemas, load_state};
use anyhow::Result;
use statefmt_engine::{FormatOptions, StateOpts, format_state};
use statefmt_types::JsonDecoder;
use std::path::Path;

pub fn handle(
    state_path: &Path,
    schemas_path: &Path,
    decode_errors: DecodeErrors,
    enable_color: bool,
) -> Result<()> {
    let state = load_state(state_path)?;
    let schemas = load_schemas(schemas_path)?;
    let color = MarkupColorizer::new(enable_color);

    let opts = StateOpts {
        state: &state,
        schemas: &schemas,
        decoder: &JsonDecoder,
        color: &color,
        options: FormatOptions {
            on_decode_error: decode_errors.into(),
        },
    };

    let mut sink = ConsoleSink::new(enable_color);
    let text = format_state(&opts, &mut sink)?;
    println!("{}", text);

    // Decode problems were already printed; they do not change the exit status
    Ok(())
}
