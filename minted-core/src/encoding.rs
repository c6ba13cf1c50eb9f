//! Base58Check encoding for legacy-style addresses.

use crate::hash::double_sha256;

/// Encode `version || payload` with a 4-byte double SHA-256 checksum.
#[must_use]
pub fn base58check_encode(version: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(version.len() + payload.len() + 4);
    data.extend_from_slice(version);
    data.extend_from_slice(payload);

    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..4]);

    bs58::encode(data).into_string()
}
