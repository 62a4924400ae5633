/// Aggregated error type for slotmint operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error raised by the mint operation
    #[error("Mint error: {0}")]
    MintError(#[from] slotmint_minter::error::Error),
    /// An error raised by the fund operation
    #[error("Fund error: {0}")]
    FundError(#[from] slotmint_funder::error::Error),
}
