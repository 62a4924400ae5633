//! Wrapper around an alloy [`Provider`] connected to a development node.
use crate::{
    ether::trace::ExecutionTrace,
    utils::strings::encode_slot_compact,
};
use alloy::{
    network::Ethereum,
    primitives::{Address, B256, TxHash, U256},
    providers::{ext::DebugApi, Provider, ProviderBuilder, RootProvider},
    rpc::types::{
        trace::geth::{GethDebugTracingOptions, GethDefaultTracingOptions, GethTrace},
        TransactionRequest,
    },
};
use eyre::Result;

/// [`DevProvider`] is a convenience wrapper around a [`Provider`] pointed at a
/// development node (anvil or hardhat), adding the privileged `hardhat_*`
/// override namespace and struct-log tracing on top of the standard calls.
///
/// The privileged methods are issued as raw requests so that the exact wire
/// representation (notably the compact slot encoding hardhat expects) stays
/// under our control.
#[derive(Clone, Debug)]
pub struct DevProvider {
    provider: RootProvider<Ethereum>,
}

impl DevProvider {
    /// Connect to a provider using the given rpc_url.
    pub async fn connect(rpc_url: &str) -> Result<Self> {
        if rpc_url.is_empty() {
            return Err(eyre::eyre!("No RPC URL provided"));
        }

        let provider = ProviderBuilder::new().connect(rpc_url).await?.root().clone();
        Ok(Self { provider })
    }

    /// Get the chain id.
    pub async fn get_chainid(&self) -> Result<u64> {
        Ok(self.provider.get_chain_id().await?)
    }

    /// Get the bytecode at the given address.
    pub async fn get_code_at(&self, address: Address) -> Result<Vec<u8>> {
        Ok(self.provider.get_code_at(address).await?.to_vec())
    }

    /// Get the node's client version string (`web3_clientVersion`).
    pub async fn client_version(&self) -> Result<String> {
        Ok(self.provider.raw_request("web3_clientVersion".into(), ()).await?)
    }

    /// Submit a transaction through the node's own signer set
    /// (`eth_sendTransaction`). The `from` account must be unlocked or
    /// impersonated on the node.
    pub async fn send_raw(&self, tx: &TransactionRequest) -> Result<TxHash> {
        Ok(self.provider.raw_request("eth_sendTransaction".into(), (tx,)).await?)
    }

    /// Fetch the full opcode-level struct-log trace of a mined transaction,
    /// with memory capture enabled. Both the geth-style `enableMemory` and
    /// the legacy hardhat `disableMemory` switches are set, since the two
    /// node families disagree on which one they honor.
    pub async fn trace_raw(&self, tx_hash: TxHash) -> Result<ExecutionTrace> {
        let options = GethDebugTracingOptions {
            config: GethDefaultTracingOptions {
                enable_memory: Some(true),
                disable_memory: Some(false),
                disable_stack: Some(false),
                disable_storage: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };

        match self.provider.debug_trace_transaction(tx_hash, options).await? {
            GethTrace::Default(frame) => Ok(ExecutionTrace::try_from(frame)?),
            _ => Err(eyre::eyre!("node returned a non-default trace frame")),
        }
    }

    /// Make the given account impersonatable (`hardhat_impersonateAccount`).
    /// Hardhat answers these overrides with `true` where anvil answers with
    /// `null`, so the result is read as an arbitrary value and discarded.
    pub async fn impersonate_account(&self, address: Address) -> Result<()> {
        let _: serde_json::Value =
            self.provider.raw_request("hardhat_impersonateAccount".into(), (address,)).await?;
        Ok(())
    }

    /// Override the native-currency balance of an account
    /// (`hardhat_setBalance`).
    pub async fn override_balance(&self, address: Address, wei: U256) -> Result<()> {
        let _: serde_json::Value =
            self.provider.raw_request("hardhat_setBalance".into(), (address, wei)).await?;
        Ok(())
    }

    /// Override a single storage slot of a contract
    /// (`hardhat_setStorageAt`). The slot is sent in the compact hex form
    /// hardhat insists on; the value is always a full 32-byte word.
    pub async fn override_storage(&self, contract: Address, slot: B256, value: B256) -> Result<()> {
        let _: serde_json::Value = self
            .provider
            .raw_request(
                "hardhat_setStorageAt".into(),
                (contract, encode_slot_compact(slot), value),
            )
            .await?;
        Ok(())
    }
}
