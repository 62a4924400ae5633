//! Probe-transaction driving and trace acquisition.

use crate::error::Error;
use alloy::{network::TransactionBuilder, primitives::Address, rpc::types::TransactionRequest};
use slotmint_common::{
    constants::{
        MINE_DELAY_SECONDS, PROBE_GAS_LIMIT, PROBE_HOLDER, PROBE_SENDER, PROBE_SENDER_FUNDING,
    },
    ether::{calldata::encode_balanceof, controller::ChainController, trace::ExecutionTrace},
};
use std::time::Duration;
use tracing::{debug, trace};

/// Submit a throwaway `balanceOf(PROBE_HOLDER)` transaction against `target`
/// from an impersonated, freshly funded sender, and fetch its opcode-level
/// trace with memory capture.
///
/// The call is submitted as a real transaction rather than an `eth_call` so
/// that a transaction hash exists to trace. The probe is never withdrawn; an
/// abandoned run leaves a stray transaction behind, which is acceptable on
/// the disposable chains this tool targets.
pub(crate) async fn acquire_trace<C: ChainController>(
    chain: &C,
    target: Address,
) -> Result<ExecutionTrace, Error> {
    chain
        .impersonate(PROBE_SENDER)
        .await
        .map_err(|e| Error::RpcError(format!("failed to impersonate probe sender: {e}")))?;
    chain
        .set_balance(PROBE_SENDER, PROBE_SENDER_FUNDING)
        .await
        .map_err(|e| Error::RpcError(format!("failed to fund probe sender: {e}")))?;

    let tx = TransactionRequest::default()
        .with_from(PROBE_SENDER)
        .with_to(target)
        .with_input(encode_balanceof(PROBE_HOLDER))
        .with_gas_limit(PROBE_GAS_LIMIT);

    let tx_hash = chain
        .send_transaction(tx)
        .await
        .map_err(|e| Error::RpcError(format!("failed to submit probe transaction: {e}")))?;
    debug!("submitted probe transaction '{}' against '{}'", tx_hash, target);

    // give the node a mining interval before asking for the trace
    tokio::time::sleep(Duration::from_secs(MINE_DELAY_SECONDS)).await;

    let probe_trace = chain
        .trace_transaction(tx_hash)
        .await
        .map_err(|e| Error::RpcError(format!("failed to trace probe transaction: {e}")))?;
    trace!("probe trace for '{}' contains {} steps", target, probe_trace.len());

    Ok(probe_trace)
}
