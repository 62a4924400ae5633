use crate::interfaces::{Convention, SlotResult};
use alloy::primitives::{Address, B256, U256};
use clap::Parser;
use derive_builder::Builder;
use eyre::{eyre, Result};
use slotmint_common::constants::DEFAULT_SCAN_WINDOW;
use slotmint_config::parse_url_arg;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Forge an ERC20 balance by writing the token's balance storage slot directly",
    override_usage = "slotmint mint <TARGET> [OPTIONS]"
)]
/// Arguments for the mint operation
///
/// This struct contains all the configuration parameters needed to discover a
/// token's balance storage slot and write a forged balance into it.
pub struct MintArgs {
    /// The target token contract address.
    #[clap(required = true)]
    pub target: String,

    /// The account whose balance will be forged.
    #[clap(long, required = true)]
    pub recipient: String,

    /// The human-denominated amount of tokens to mint.
    #[clap(long, short, default_value = "1000", hide_default_value = true)]
    pub amount: String,

    /// The token's decimals, used to scale the amount into base units.
    #[clap(long, short, default_value_t = 18, hide_default_value = true)]
    pub decimals: u8,

    /// The RPC provider to use for the probe and the storage write.
    /// This can be an explicit URL or a reference to a MESC endpoint.
    #[clap(long, short, value_parser = parse_url_arg, default_value = "", hide_default_value = true)]
    pub rpc_url: String,

    /// A pre-known base slot (hex), skipping trace discovery entirely.
    #[clap(long, default_value = None, hide_default_value = true)]
    pub slot: Option<String>,

    /// The hashing convention of the pre-known base slot.
    #[clap(long, default_value = "solidity", hide_default_value = true)]
    pub convention: String,

    /// How many steps to scan backwards from a storage load when looking for
    /// the hashing step that derived its key.
    #[clap(long, default_value_t = DEFAULT_SCAN_WINDOW, hide_default_value = true)]
    pub scan_window: usize,

    /// Whether to skip reading the persisted slot cache.
    #[clap(long)]
    pub no_cache: bool,
}

impl MintArgs {
    /// Parse the target token contract address
    pub fn get_target(&self) -> Result<Address> {
        self.target.parse::<Address>().map_err(|_| eyre!("invalid target: '{}'", &self.target))
    }

    /// Parse the recipient address
    pub fn get_recipient(&self) -> Result<Address> {
        self.recipient
            .parse::<Address>()
            .map_err(|_| eyre!("invalid recipient: '{}'", &self.recipient))
    }

    /// Build a [`SlotResult`] from the pre-known slot arguments, if a slot
    /// was provided
    pub fn get_slot(&self) -> Result<Option<SlotResult>> {
        let Some(slot) = &self.slot else { return Ok(None) };

        let slot = U256::from_str_radix(slot.trim_start_matches("0x"), 16)
            .map_err(|_| eyre!("invalid slot: '{}'", slot))?;
        let convention = self
            .convention
            .parse::<Convention>()
            .map_err(|e| eyre!("invalid convention: {}", e))?;

        Ok(Some(SlotResult { slot: B256::from(slot), convention }))
    }
}

impl MintArgsBuilder {
    /// Creates a new MintArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            target: Some(String::new()),
            recipient: Some(String::new()),
            amount: Some(String::from("1000")),
            decimals: Some(18),
            rpc_url: Some(String::new()),
            slot: Some(None),
            convention: Some(String::from("solidity")),
            scan_window: Some(DEFAULT_SCAN_WINDOW),
            no_cache: Some(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_slot_absent() {
        let args = MintArgsBuilder::new().build().expect("build failed");
        assert_eq!(args.get_slot().expect("get_slot failed"), None);
    }

    #[test]
    fn test_get_slot_compact_hex() {
        let args = MintArgsBuilder::new()
            .slot(Some(String::from("0x2")))
            .convention(String::from("vyper"))
            .build()
            .expect("build failed");

        let slot = args.get_slot().expect("get_slot failed").expect("slot missing");
        assert_eq!(slot.slot, B256::with_last_byte(2));
        assert_eq!(slot.convention, Convention::Vyper);
    }

    #[test]
    fn test_get_slot_invalid_convention() {
        let args = MintArgsBuilder::new()
            .slot(Some(String::from("0x2")))
            .convention(String::from("move"))
            .build()
            .expect("build failed");

        assert!(args.get_slot().is_err());
    }

    #[test]
    fn test_get_target_rejects_garbage() {
        let args = MintArgsBuilder::new()
            .target(String::from("not-an-address"))
            .build()
            .expect("build failed");
        assert!(args.get_target().is_err());
    }
}
