use crate::{
    error::Error,
    interfaces::{MintArgs, MintResult, SlotResult},
    utils::slots::{mapping_slot, pad_address},
};
use alloy::primitives::{utils::parse_units, Address, B256, U256};
use slotmint_cache::read_cache;
use slotmint_common::{
    constants::PROBE_HOLDER,
    ether::{controller::ChainController, provider::DevProvider},
    utils::hex::ToLowerHex,
};
use tracing::{debug, info, warn};

mod locate;
mod probe;

pub use locate::find_balance_slot;

/// Forge the balance of `args.recipient` on the token at `args.target`,
/// discovering the balance storage slot from a probe trace when it is not
/// already known.
///
/// There is no rollback on partial failure: the operation is idempotent, so
/// callers simply re-run it.
pub async fn mint(args: MintArgs) -> Result<MintResult, Error> {
    let provider = DevProvider::connect(&args.rpc_url).await.map_err(|e| {
        Error::RpcError(format!("failed to connect to provider '{}': {e}", &args.rpc_url))
    })?;

    mint_with_controller(&provider, &args).await
}

/// [`mint`], generic over the privileged chain controller so the whole flow
/// can run against a substitute chain in tests.
pub async fn mint_with_controller<C: ChainController>(
    chain: &C,
    args: &MintArgs,
) -> Result<MintResult, Error> {
    let token = args.get_target()?;
    let recipient = args.get_recipient()?;

    // a data-quality warning, not an abort: some registries report zero
    // decimals for tokens that really have them
    if args.decimals == 0 {
        warn!("token '{}' reports zero decimals, amount will be written unscaled", token);
    }

    // scale the human-denominated amount into base units
    let value: U256 = parse_units(&args.amount, args.decimals)
        .map_err(|e| Error::ParseError(format!("failed to parse amount '{}': {e}", &args.amount)))?
        .get_absolute();

    // resolve the base slot: explicit argument, then the persisted cache,
    // then probe-trace discovery
    let slot_result = match args.get_slot()? {
        Some(slot) => slot,
        None => match cached_slot(token, args.no_cache) {
            Some(slot) => slot,
            None => discover_slot(chain, token, args.scan_window).await?,
        },
    };

    let storage_slot =
        mapping_slot(pad_address(recipient), slot_result.slot, slot_result.convention);

    chain
        .set_storage_at(token, storage_slot, B256::from(value))
        .await
        .map_err(|e| Error::RpcError(format!("failed to write balance slot: {e}")))?;
    info!("wrote {} base units of '{}' to '{}'", value, token, recipient);

    Ok(MintResult { token, recipient, value, slot: slot_result, storage_slot })
}

/// Opportunistic read of a previously persisted slot record. The cache is
/// only ever written by callers, never here.
fn cached_slot(token: Address, skip: bool) -> Option<SlotResult> {
    if skip {
        return None;
    }

    match read_cache::<SlotResult>(&format!("slot.{}", token.to_lower_hex())) {
        Ok(Some(slot)) => {
            debug!("using cached slot record for '{}'", token);
            Some(slot)
        }
        Ok(None) => None,
        Err(e) => {
            debug!("slot cache read failed: {}", e);
            None
        }
    }
}

/// Probe the token and scan the resulting trace for its balance slot,
/// falling back to the legacy sentinel when nothing matches.
async fn discover_slot<C: ChainController>(
    chain: &C,
    token: Address,
    window: usize,
) -> Result<SlotResult, Error> {
    let trace = probe::acquire_trace(chain, token).await?;

    Ok(find_balance_slot(&trace, PROBE_HOLDER, window).unwrap_or_else(|| {
        warn!(
            "no hashed mapping read found in probe trace for '{}', falling back to slot 0 (solidity)",
            token
        );
        SlotResult::default()
    }))
}
