/// Errors raised while forging a balance
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error occurred while communicating with the RPC endpoint
    #[error("Rpc error: {0}")]
    RpcError(String),
    /// A parse error occurred
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Internal error
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
