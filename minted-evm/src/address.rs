//! Ethereum address computation.

use alloy_primitives::{Address, keccak256};

/// Convert public key bytes to an Ethereum address.
///
/// Accepts either the 65-byte SEC1 uncompressed encoding or the raw 64-byte
/// `x || y` form.
#[must_use]
pub fn public_key_to_address(public_key_bytes: &[u8]) -> Address {
    let key_bytes = match public_key_bytes {
        [0x04, rest @ ..] if public_key_bytes.len() == 65 => rest,
        _ => public_key_bytes,
    };

    let hash = keccak256(key_bytes);
    Address::from_slice(&hash[12..])
}

/// Convert address to checksummed format (EIP-55).
#[inline]
#[must_use]
pub fn to_checksum_address(address: &Address) -> String {
    address.to_checksum(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_address() {
        let addr = Address::from_slice(&hex_literal::hex!(
            "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"
        ));
        assert_eq!(
            to_checksum_address(&addr),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
    }

    #[test]
    fn test_prefixed_and_raw_keys_agree() {
        let mut uncompressed = [0x11u8; 65];
        uncompressed[0] = 0x04;

        let from_sec1 = public_key_to_address(&uncompressed);
        let from_raw = public_key_to_address(&uncompressed[1..]);
        assert_eq!(from_sec1, from_raw);
    }
}
