//! Tron Base58Check address encoding.

use minted_core::encoding::base58check_encode;
use minted_core::hash::keccak256;

/// Version byte prepended to the 20-byte account hash on Tron mainnet.
pub const ADDRESS_VERSION: u8 = 0x41;

/// Convert an uncompressed SEC1 public key (65 bytes, `0x04` prefix) into a
/// Tron address.
#[must_use]
pub fn public_key_to_address(uncompressed: &[u8]) -> String {
    let key_bytes = uncompressed.strip_prefix(&[0x04_u8]).unwrap_or(uncompressed);
    let hash = keccak256(key_bytes);
    base58check_encode(&[ADDRESS_VERSION], &hash[12..])
}
