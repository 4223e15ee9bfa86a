use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let enable_color = cli.color.unwrap_or(config.color).enabled();

    match cli.command {
        Commands::Show {
            state,
            schemas,
            decode_errors,
        } => handlers::show::handle(
            &state,
            &schemas,
            decode_errors.unwrap_or(config.decode_errors),
            enable_color,
        ),

        Commands::Output { state, name } => {
            handlers::output::handle(&state, name.as_deref(), enable_color)
        }
    }
}
