use alloy::primitives::{address, Address, U256};

/// Fixed, well-known sender elevated into an impersonated, funded signer for
/// probe transactions. This is the stock account zero of both anvil and
/// hardhat development nodes.
pub const PROBE_SENDER: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");

/// Arbitrary non-zero address passed as the `balanceOf` argument of probe
/// calls. Must not collide with any account that actually holds the token,
/// otherwise the preimage match could hit an unrelated read.
pub const PROBE_HOLDER: Address = address!("33d356c89479f97c9d5b3f176b5e2d1afba531f7");

/// 4-byte function selector for `balanceOf(address)`
pub const BALANCEOF_SELECTOR: [u8; 4] = [0x70, 0xa0, 0x82, 0x31];

/// Gas limit attached to probe transactions. Generous for a view call, but
/// bounds pathological tokens that burn unbounded gas in `balanceOf`.
pub const PROBE_GAS_LIMIT: u64 = 0x50000;

/// Native balance given to the probe sender before submitting (2^64 wei)
pub const PROBE_SENDER_FUNDING: U256 = U256::from_limbs([0, 1, 0, 0]);

/// Default number of steps scanned backwards from a storage load when looking
/// for the hashing step that derived its key
pub const DEFAULT_SCAN_WINDOW: usize = 14;

/// EVM machine word size in bytes
pub const WORD_SIZE: usize = 32;

/// Seconds to wait after submitting a probe transaction before requesting its
/// trace. The target chain is assumed to auto-mine or mine on a short
/// interval.
pub const MINE_DELAY_SECONDS: u64 = 1;
