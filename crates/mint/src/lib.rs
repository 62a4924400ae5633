//! Forge ERC20-like token balances on a development chain by discovering the
//! token's balance storage slot from a probe-call execution trace and writing
//! the desired balance directly into contract storage.

pub mod error;

mod core;
mod interfaces;
mod utils;

// re-export the public interface
pub use core::{find_balance_slot, mint, mint_with_controller};
pub use interfaces::{Convention, MintArgs, MintArgsBuilder, MintResult, SlotResult};
pub use utils::slots::{hash_slot, mapping_slot, pad_address};
