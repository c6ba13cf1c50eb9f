//! SLIP-0010 Ed25519 key derivation.
//!
//! Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md

use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::Error;

type HmacSha512 = Hmac<Sha512>;

const ED25519_CURVE: &[u8] = b"ed25519 seed";
const HARDENED_BIT: u32 = 0x8000_0000;

/// SLIP-0010 derived key pair.
pub struct DerivedKey {
    /// 32-byte private key.
    pub private_key: Zeroizing<[u8; 32]>,
    /// 32-byte chain code.
    chain_code: Zeroizing<[u8; 32]>,
}

impl DerivedKey {
    /// Derive master key from seed.
    pub fn from_seed(seed: &[u8]) -> Result<Self, Error> {
        let mut mac = HmacSha512::new_from_slice(ED25519_CURVE)
            .map_err(|e| Error::Derivation(e.to_string()))?;
        mac.update(seed);
        Ok(Self::split(&mac.finalize().into_bytes()))
    }

    /// Derive child key at hardened index.
    ///
    /// Ed25519 only supports hardened derivation, so the hardened bit is
    /// always set.
    pub fn derive_hardened(&self, index: u32) -> Result<Self, Error> {
        let hardened_index = index | HARDENED_BIT;

        let mut mac = HmacSha512::new_from_slice(&*self.chain_code)
            .map_err(|e| Error::Derivation(e.to_string()))?;

        // 0x00 || private_key || index
        mac.update(&[0x00]);
        mac.update(&*self.private_key);
        mac.update(&hardened_index.to_be_bytes());

        Ok(Self::split(&mac.finalize().into_bytes()))
    }

    /// Derive along a path like `m/44'/501'/0'/0'`.
    ///
    /// Every component is treated as hardened; the trailing `'` is optional.
    pub fn derive_path(seed: &[u8], path: &str) -> Result<Self, Error> {
        let mut segments = path.split('/');
        if segments.next() != Some("m") {
            return Err(Error::InvalidPath(path.to_string()));
        }

        let mut key = Self::from_seed(seed)?;
        for segment in segments {
            let index: u32 = segment
                .trim_end_matches('\'')
                .parse()
                .map_err(|_| Error::InvalidPath(path.to_string()))?;
            if index >= HARDENED_BIT {
                return Err(Error::InvalidPath(path.to_string()));
            }
            key = key.derive_hardened(index)?;
        }
        Ok(key)
    }

    /// Convert to Ed25519 signing key.
    pub fn to_signing_key(&self) -> SigningKey {
        SigningKey::from_bytes(&self.private_key)
    }

    fn split(output: &[u8]) -> Self {
        let mut private_key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);

        private_key.copy_from_slice(&output[..32]);
        chain_code.copy_from_slice(&output[32..64]);

        Self {
            private_key,
            chain_code,
        }
    }
}
