// NOTE: statefmt CLI layout
//
// The engine is a pure function from (state, schemas) to text. Everything
// with side effects lives here: reading files, resolving configuration,
// deciding on color, writing to stdout/stderr and choosing the exit code.

mod args;
pub mod color;
mod commands;
pub mod config;
pub mod console;
mod handlers;
pub mod loader;

pub use args::{Cli, Commands};
pub use commands::run;
