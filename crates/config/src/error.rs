//! Configuration errors

/// Generic error type for slotmint configuration operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic error
    #[error("Error: {0}")]
    Generic(String),
    /// A parse error occurred
    #[error("Parse error: {0}")]
    ParseError(String),
    /// An IO error occurred
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
}
