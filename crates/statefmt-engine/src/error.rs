use statefmt_types::ResourceMode;
use std::fmt;

/// Result type for statefmt-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that abort a whole formatting call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The schema set has no entry for a resource in the state
    SchemaNotFound {
        provider: String,
        mode: ResourceMode,
        type_name: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SchemaNotFound {
                provider,
                mode,
                type_name,
            } => write!(
                f,
                "No schema for {} resource type {:?} in provider {:?}",
                mode, type_name, provider
            ),
        }
    }
}

impl std::error::Error for Error {}
