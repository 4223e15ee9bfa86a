use owo_colors::OwoColorize;
use statefmt_engine::{Diagnostic, DiagnosticSink};

/// Prints each diagnostic to stderr as it arrives.
pub struct ConsoleSink {
    enable_color: bool,
}

impl ConsoleSink {
    pub fn new(enable_color: bool) -> Self {
        Self { enable_color }
    }
}

impl DiagnosticSink for ConsoleSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        if self.enable_color {
            eprintln!("{} {}", "Error:".red().bold(), diagnostic);
        } else {
            eprintln!("Error: {}", diagnostic);
        }
    }
}
