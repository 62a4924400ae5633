use crate::constants::BALANCEOF_SELECTOR;
use alloy::primitives::{Address, Bytes, B256};

/// ABI-encode a `balanceOf(address)` call for the given holder. This is the
/// only ABI surface the probe consumes; the holder address is left-padded to
/// a full word per the ABI static-argument encoding.
pub fn encode_balanceof(holder: Address) -> Bytes {
    let mut calldata = Vec::with_capacity(36);
    calldata.extend_from_slice(&BALANCEOF_SELECTOR);
    calldata.extend_from_slice(B256::left_padding_from(holder.as_slice()).as_slice());
    Bytes::from(calldata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::hex::ToLowerHex;
    use alloy::primitives::address;

    #[test]
    fn test_encode_balanceof() {
        let holder = address!("33d356c89479f97c9d5b3f176b5e2d1afba531f7");
        let calldata = encode_balanceof(holder);

        assert_eq!(
            calldata.to_lower_hex(),
            "70a0823100000000000000000000000033d356c89479f97c9d5b3f176b5e2d1afba531f7"
        );
    }

    #[test]
    fn test_encode_balanceof_length() {
        let calldata = encode_balanceof(Address::ZERO);
        assert_eq!(calldata.len(), 36);
    }
}
