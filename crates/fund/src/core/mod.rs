use crate::{error::Error, interfaces::FundArgs};
use alloy::primitives::{utils::parse_units, Address, U256};
use slotmint_common::ether::{controller::ChainController, provider::DevProvider};
use tracing::info;

/// The outcome of a fund operation
#[derive(Debug, Clone)]
pub struct FundResult {
    /// The accounts whose native balance was set
    pub accounts: Vec<Address>,
    /// The balance each account was set to, in wei
    pub wei: U256,
}

impl FundResult {
    /// Log the outcome of the funding run
    pub fn display(&self) {
        info!("set native balance of {} account(s) to {} wei", self.accounts.len(), self.wei);
    }
}

/// Set the native balance of every account in `args.accounts` to the given
/// ether amount.
pub async fn fund(args: FundArgs) -> Result<FundResult, Error> {
    let provider = DevProvider::connect(&args.rpc_url).await.map_err(|e| {
        Error::RpcError(format!("failed to connect to provider '{}': {e}", &args.rpc_url))
    })?;

    fund_with_controller(&provider, &args).await
}

/// [`fund`], generic over the privileged chain controller so the flow can run
/// against a substitute chain in tests.
pub async fn fund_with_controller<C: ChainController>(
    chain: &C,
    args: &FundArgs,
) -> Result<FundResult, Error> {
    let wei: U256 = parse_units(&args.amount, 18)
        .map_err(|e| Error::ParseError(format!("failed to parse amount '{}': {e}", &args.amount)))?
        .get_absolute();

    let mut accounts = Vec::with_capacity(args.accounts.len());
    for account in &args.accounts {
        let address = account
            .parse::<Address>()
            .map_err(|_| Error::ParseError(format!("invalid account: '{}'", account)))?;

        chain
            .set_balance(address, wei)
            .await
            .map_err(|e| Error::RpcError(format!("failed to set balance of '{address}': {e}")))?;
        info!("native balance of '{}' set to {} ether", address, &args.amount);

        accounts.push(address);
    }

    Ok(FundResult { accounts, wei })
}
