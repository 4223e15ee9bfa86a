// Engine module - rendering of state snapshots into configuration-like text
// Input is a fully loaded state tree plus schemas; output is one text blob

pub mod block;
pub mod color;
pub mod diagnostics;
mod error;
pub mod layout;
pub mod legacy;
pub mod options;
pub mod state;
pub mod value;
pub mod walker;

pub use color::{Colorize, MARKUP_CODES, RESET};
pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use error::{Error, Result};
pub use legacy::{format_list_output, format_map_output, format_nested_list, format_nested_map};
pub use options::{DecodeErrorMode, FormatOptions};
pub use state::{EMPTY_STATE_MESSAGE, StateOpts, format_state};
pub use value::render_value;
