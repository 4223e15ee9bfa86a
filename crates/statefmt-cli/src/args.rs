use crate::config::{ColorMode, DecodeErrors};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "statefmt")]
#[command(about = "Render state snapshots as readable, configuration-like text", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: $STATEFMT_CONFIG or the user config dir)")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, global = true, help = "When to use colors")]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show every resource instance and the root module outputs")]
    Show {
        #[arg(long, help = "State snapshot (JSON)")]
        state: PathBuf,

        #[arg(long, help = "Provider schemas (JSON)")]
        schemas: PathBuf,

        #[arg(long, value_enum, help = "How to end a block whose attributes fail to decode")]
        decode_errors: Option<DecodeErrors>,
    },

    #[command(about = "Print root module outputs")]
    Output {
        #[arg(long, help = "State snapshot (JSON)")]
        state: PathBuf,

        #[arg(help = "Print only this output's value")]
        name: Option<String>,
    },
}
