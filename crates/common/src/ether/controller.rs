//! The privileged chain-controller capability.
//!
//! Everything the slot-discovery and balance-forging core needs from a chain
//! is collected behind this trait: impersonation, balance and storage
//! overrides, probe submission, and struct-log tracing. A production chain
//! simply does not implement these methods; the only real implementation is
//! [`DevProvider`], and tests substitute their own.

use crate::ether::{provider::DevProvider, trace::ExecutionTrace};
use alloy::{
    primitives::{Address, B256, TxHash, U256},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;
use eyre::Result;

/// Privileged operations against a development node.
///
/// All operations are idempotent given identical inputs: overwriting a slot
/// or balance with the same value twice is a no-op in effect.
#[async_trait]
pub trait ChainController {
    /// Make `address` usable as a transaction sender without its key.
    async fn impersonate(&self, address: Address) -> Result<()>;

    /// Set the native-currency balance of `address` to `wei`.
    async fn set_balance(&self, address: Address, wei: U256) -> Result<()>;

    /// Write `value` into `slot` of `contract`'s storage.
    async fn set_storage_at(&self, contract: Address, slot: B256, value: B256) -> Result<()>;

    /// Submit a transaction signed by the node on behalf of an impersonated
    /// `from` account, returning its hash.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash>;

    /// Fetch the opcode-level trace of a mined transaction, memory included.
    async fn trace_transaction(&self, tx_hash: TxHash) -> Result<ExecutionTrace>;
}

#[async_trait]
impl ChainController for DevProvider {
    async fn impersonate(&self, address: Address) -> Result<()> {
        self.impersonate_account(address).await
    }

    async fn set_balance(&self, address: Address, wei: U256) -> Result<()> {
        self.override_balance(address, wei).await
    }

    async fn set_storage_at(&self, contract: Address, slot: B256, value: B256) -> Result<()> {
        self.override_storage(contract, slot, value).await
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash> {
        self.send_raw(&tx).await
    }

    async fn trace_transaction(&self, tx_hash: TxHash) -> Result<ExecutionTrace> {
        self.trace_raw(tx_hash).await
    }
}
