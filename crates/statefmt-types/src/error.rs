use std::fmt;

/// Result type for statefmt-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Type constraint notation could not be interpreted
    Type(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Type(msg) => write!(f, "Invalid type constraint: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
