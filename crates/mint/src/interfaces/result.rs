use alloy::primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::info;

/// The operand order a contract's compiler used when hashing a mapping key
/// together with the mapping's base slot to derive an entry's storage slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// `keccak256(key ++ base slot)`, the solc layout
    #[default]
    Solidity,
    /// `keccak256(base slot ++ key)`, the vyper layout
    Vyper,
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::Solidity => write!(f, "solidity"),
            Convention::Vyper => write!(f, "vyper"),
        }
    }
}

impl FromStr for Convention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solidity" => Ok(Convention::Solidity),
            "vyper" => Ok(Convention::Vyper),
            _ => Err(format!("Invalid convention: {}", s)),
        }
    }
}

/// The discovered base slot of a token's balance mapping, and which operand
/// order its compiler hashes with.
///
/// Only valid for the specific contract it was derived from; the serialized
/// form matches the external cache-record shape, where the convention field
/// is historically named `contract`.
///
/// The default value is the legacy "unknown layout" sentinel: slot zero with
/// the solidity convention. Callers must treat it with suspicion for
/// contracts whose real base slot is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotResult {
    /// The base storage slot assigned to the balance mapping
    pub slot: B256,
    /// The key/slot hashing convention
    #[serde(rename = "contract")]
    pub convention: Convention,
}

/// The outcome of a mint operation
#[derive(Debug, Clone)]
pub struct MintResult {
    /// The token contract whose storage was written
    pub token: Address,
    /// The account whose balance was forged
    pub recipient: Address,
    /// The balance written, in the token's base units
    pub value: U256,
    /// The base slot and convention the write was derived from
    pub slot: SlotResult,
    /// The storage slot the balance landed in
    pub storage_slot: B256,
}

impl MintResult {
    /// Log the outcome of the mint
    pub fn display(&self) {
        info!(
            "wrote {} base units to slot {} of {} (base slot {}, {} layout) for {}",
            self.value,
            self.storage_slot,
            self.token,
            self.slot.slot,
            self.slot.convention,
            self.recipient
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convention_round_trip() {
        assert_eq!("solidity".parse::<Convention>(), Ok(Convention::Solidity));
        assert_eq!("vyper".parse::<Convention>(), Ok(Convention::Vyper));
        assert_eq!(Convention::Solidity.to_string(), "solidity");
        assert_eq!(Convention::Vyper.to_string(), "vyper");
    }

    #[test]
    fn test_convention_rejects_unknown() {
        assert!("viper".parse::<Convention>().is_err());
    }

    #[test]
    fn test_default_slot_result_is_sentinel() {
        let sentinel = SlotResult::default();
        assert_eq!(sentinel.slot, B256::ZERO);
        assert_eq!(sentinel.convention, Convention::Solidity);
    }

    #[test]
    fn test_slot_result_external_record_shape() {
        let result = SlotResult { slot: B256::with_last_byte(2), convention: Convention::Vyper };
        let json = serde_json::to_value(&result).expect("serialization failed");

        assert_eq!(json["contract"], "vyper");
        assert_eq!(
            json["slot"],
            "0x0000000000000000000000000000000000000000000000000000000000000002"
        );
    }
}
