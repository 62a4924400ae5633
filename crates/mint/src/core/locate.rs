//! Locating a balance mapping's base slot in a probe trace.
//!
//! Both solc and vyper derive a mapping entry's storage slot by hashing the
//! key together with the mapping's base slot, so a `balanceOf` probe ends in
//! a storage load whose key was just produced by a Keccak-256 over a memory
//! region holding the two preimage words. Scanning backwards from each
//! storage load for that hashing step and checking which preimage word
//! carries the probe holder address recovers both the base slot and the
//! operand order.

use crate::interfaces::{Convention, SlotResult};
use alloy::primitives::{Address, B256};
use slotmint_common::{
    constants::WORD_SIZE,
    ether::trace::{ExecutionTrace, StepLog},
};

const OP_SLOAD: &str = "SLOAD";
// geth and hardhat still emit the pre-istanbul mnemonic, anvil the modern one
const OP_SHA3: &str = "SHA3";
const OP_KECCAK256: &str = "KECCAK256";

/// Scan `trace` for the hashed-mapping storage read keyed by `holder` and
/// extract the mapping's base slot and hashing convention. The earliest
/// qualifying storage load wins.
///
/// Returns `None` when no storage-load/hash pair anywhere in the trace
/// matches: an unsupported layout, a codeless target, or a reverted probe.
/// Callers wanting the legacy sentinel take [`SlotResult::default()`].
pub fn find_balance_slot(
    trace: &ExecutionTrace,
    holder: Address,
    window: usize,
) -> Option<SlotResult> {
    for (index, step) in trace.steps.iter().enumerate() {
        if step.op != OP_SLOAD {
            continue;
        }

        // pair the load with the nearest hashing step inside the window; a
        // load whose nearest hash covers something else does not qualify
        let matched = trace.steps[..index]
            .iter()
            .rev()
            .take(window)
            .find(|step| step.op == OP_SHA3 || step.op == OP_KECCAK256)
            .and_then(|step| match_preimage(step, holder));

        if matched.is_some() {
            return matched;
        }
    }

    None
}

/// Read the two words hashed by `step` out of its memory image, as recorded
/// at the hashing step itself, and decide which of them is the left-padded
/// `holder` key.
fn match_preimage(step: &StepLog, holder: Address) -> Option<SlotResult> {
    // stack top is the byte offset of the hash preimage in memory
    let offset = usize::try_from(*step.stack.last()?).ok()?;
    let index = offset / WORD_SIZE;

    let top = step.memory.get(index)?;
    let top2 = step.memory.get(index + 1)?;

    if is_padded_address(top, holder) {
        // keccak256(key ++ slot)
        Some(SlotResult { slot: *top2, convention: Convention::Solidity })
    } else if is_padded_address(top2, holder) {
        // keccak256(slot ++ key)
        Some(SlotResult { slot: *top, convention: Convention::Vyper })
    } else {
        None
    }
}

/// Whether the last 20 bytes of `word` are `address`
fn is_padded_address(word: &B256, address: Address) -> bool {
    word[12..] == *address.as_slice()
}
