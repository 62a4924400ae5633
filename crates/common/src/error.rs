/// Generic error type for shared slotmint operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error occurred while communicating with the RPC endpoint
    #[error("RPC error: {0}")]
    RpcError(String),
    /// A parse error occurred
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Generic error
    #[error("Error: {0}")]
    Generic(String),
}
