use std::fmt;

/// A problem met while rendering one instance. Rendering of other
/// instances carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Fully qualified instance address
    pub address: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.address, self.message)
    }
}

/// Receives diagnostics as they are produced.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
