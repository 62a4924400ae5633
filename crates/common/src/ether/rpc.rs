use crate::{error::Error, ether::provider::DevProvider};
use alloy::primitives::Address;
use std::str::FromStr;
use tracing::{debug, trace};

/// Get the chainId of the provided RPC URL
///
/// ```no_run
/// use slotmint_common::ether::rpc::chain_id;
///
/// // let chain_id = chain_id("http://localhost:8545").await?;
/// // assert_eq!(chain_id, 31337);
/// ```
pub async fn chain_id(rpc_url: &str) -> Result<u64, Error> {
    let provider = DevProvider::connect(rpc_url)
        .await
        .map_err(|_| Error::RpcError(format!("failed to connect to provider '{}'", &rpc_url)))?;
    provider
        .get_chainid()
        .await
        .map_err(|e| Error::RpcError(format!("failed to get chain id: {e}")))
}

/// Get the bytecode of the provided contract address
///
/// ```no_run
/// use slotmint_common::ether::rpc::get_code;
///
/// // let bytecode = get_code("0x0", "http://localhost:8545").await;
/// // assert!(bytecode.is_ok());
/// ```
pub async fn get_code(contract_address: &str, rpc_url: &str) -> Result<Vec<u8>, Error> {
    let address = Address::from_str(contract_address)
        .map_err(|_| Error::ParseError(format!("invalid address '{}'", &contract_address)))?;
    let provider = DevProvider::connect(rpc_url)
        .await
        .map_err(|_| Error::RpcError(format!("failed to connect to provider '{}'", &rpc_url)))?;
    provider
        .get_code_at(address)
        .await
        .map_err(|e| Error::RpcError(format!("failed to get account code: {e}")))
}

/// Get the client version string of the provided RPC URL
pub async fn client_version(rpc_url: &str) -> Result<String, Error> {
    let provider = DevProvider::connect(rpc_url)
        .await
        .map_err(|_| Error::RpcError(format!("failed to connect to provider '{}'", &rpc_url)))?;
    provider
        .client_version()
        .await
        .map_err(|e| Error::RpcError(format!("failed to get client version: {e}")))
}

/// Whether the provided RPC URL points at a development node (anvil or
/// hardhat). Errors are treated as "no": a node that cannot answer
/// `web3_clientVersion` will not answer privileged overrides either.
pub async fn is_dev_node(rpc_url: &str) -> bool {
    match client_version(rpc_url).await {
        Ok(version) => {
            trace!("client version: '{}'", &version);
            let version = version.to_lowercase();
            version.starts_with("anvil") || version.starts_with("hardhat")
        }
        Err(e) => {
            debug!("client version probe failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
pub mod tests {
    use crate::ether::rpc::*;

    #[tokio::test]
    async fn test_chain_id() {
        let rpc_url = std::env::var("RPC_URL").unwrap_or_else(|_| {
            println!("RPC_URL not set, skipping test");
            std::process::exit(0);
        });

        let rpc_chain_id = chain_id(&rpc_url).await.expect("chain_id() returned an error!");

        assert!(rpc_chain_id > 0);
    }

    #[tokio::test]
    async fn test_chain_id_invalid_rpc_url() {
        let rpc_url = "https://none.llamarpc.com";
        let rpc_chain_id = chain_id(rpc_url).await;

        assert!(rpc_chain_id.is_err())
    }

    #[tokio::test]
    async fn test_get_code_invalid_contract_address() {
        let rpc_url = std::env::var("RPC_URL").unwrap_or_else(|_| {
            println!("RPC_URL not set, skipping test");
            std::process::exit(0);
        });

        let contract_address = "0x0";
        let bytecode = get_code(contract_address, &rpc_url).await;

        assert!(bytecode.is_err())
    }

    #[tokio::test]
    async fn test_is_dev_node_unreachable_endpoint() {
        assert!(!is_dev_node("http://127.0.0.1:1").await);
    }
}
