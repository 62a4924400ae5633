use alloy::primitives::B256;
use eyre::{eyre, Result};
use std::fmt::Write;

/// Decodes a hex string into a vector of bytes
///
/// ```
/// use slotmint_common::utils::strings::decode_hex;
///
/// let hex = "48656c6c6f20576f726c64"; // "Hello World" in hex
/// let result = decode_hex(hex).expect("should decode hex");
/// assert_eq!(result, vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100]);
/// ```
pub fn decode_hex(mut s: &str) -> Result<Vec<u8>> {
    // normalize
    s = s.trim_start_matches("0x").trim();

    if s.is_empty() {
        return Ok(vec![]);
    }

    if s.len() % 2 != 0 {
        return Err(eyre!("odd-length hex string: {}", s));
    }

    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| eyre!("invalid hex string: {}", s))
}

/// Encodes a vector of bytes into a hex string
///
/// ```
/// use slotmint_common::utils::strings::encode_hex;
///
/// let bytes = vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100];
/// let result = encode_hex(&bytes);
/// assert_eq!(result, "48656c6c6f20576f726c64");
/// ```
pub fn encode_hex(s: &[u8]) -> String {
    s.iter().fold(String::new(), |mut acc, b| {
        write!(acc, "{b:02x}").expect("unable to write");
        acc
    })
}

/// Encodes a storage slot in the compact `0x`-prefixed form the hardhat
/// override namespace expects: redundant leading zero nibbles stripped, with
/// the canonical `0x0` literal for the zero slot.
///
/// ```
/// use slotmint_common::utils::strings::encode_slot_compact;
/// use alloy::primitives::B256;
///
/// assert_eq!(encode_slot_compact(B256::with_last_byte(2)), "0x2");
/// assert_eq!(encode_slot_compact(B256::ZERO), "0x0");
/// ```
pub fn encode_slot_compact(slot: B256) -> String {
    let encoded = encode_hex(slot.as_slice());
    let stripped = encoded.trim_start_matches('0');

    if stripped.is_empty() {
        String::from("0x0")
    } else {
        format!("0x{stripped}")
    }
}
