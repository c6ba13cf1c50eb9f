//! Solana address derivation from a wallet seed.

use core::fmt;

use ed25519_dalek::SigningKey;
use minted_core::Wallet;
use zeroize::Zeroizing;

use crate::Error;
use crate::derivation_style::DerivationStyle;
use crate::slip10::DerivedKey;

/// A derived Solana address with associated keys.
#[derive(Clone)]
pub struct DerivedAddress {
    /// Derivation path used, `None` for the seed-prefix style.
    pub path: Option<String>,
    /// 64-byte keypair (secret 32B + public 32B) in hex (zeroized on drop).
    pub keypair_hex: Zeroizing<String>,
    /// Same keypair in base58, the format Phantom and Solflare import.
    pub keypair_base58: Zeroizing<String>,
    /// Public key in hex format.
    pub public_key_hex: String,
    /// Solana address (Base58 encoded public key).
    pub address: String,
}

impl fmt::Debug for DerivedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedAddress")
            .field("path", &self.path)
            .field("keypair_hex", &"[REDACTED]")
            .field("keypair_base58", &"[REDACTED]")
            .field("public_key_hex", &self.public_key_hex)
            .field("address", &self.address)
            .finish()
    }
}

/// Solana address deriver from a wallet seed.
#[derive(Debug)]
pub struct Deriver<'a> {
    /// Reference to the wallet for seed access.
    wallet: &'a Wallet,
}

impl<'a> Deriver<'a> {
    /// Create a new Solana deriver from a wallet.
    #[inline]
    #[must_use]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive the account with the Standard derivation style.
    ///
    /// # Errors
    ///
    /// Returns an error if derivation fails.
    #[inline]
    pub fn derive(&self) -> Result<DerivedAddress, Error> {
        self.derive_with(DerivationStyle::Standard)
    }

    /// Derive the account with a specific derivation style.
    ///
    /// # Errors
    ///
    /// Returns an error if derivation fails.
    #[allow(deprecated)]
    pub fn derive_with(&self, style: DerivationStyle) -> Result<DerivedAddress, Error> {
        let seed = self.wallet.seed();
        let signing_key = match style.path() {
            Some(path) => DerivedKey::derive_path(seed, path)?.to_signing_key(),
            None => {
                let mut secret = Zeroizing::new([0u8; 32]);
                secret.copy_from_slice(&seed[..32]);
                SigningKey::from_bytes(&secret)
            }
        };

        Ok(Self::build(&signing_key, style.path().map(str::to_string)))
    }

    fn build(signing_key: &SigningKey, path: Option<String>) -> DerivedAddress {
        let keypair_bytes = Zeroizing::new(signing_key.to_keypair_bytes());
        let public_key_bytes = signing_key.verifying_key().to_bytes();

        DerivedAddress {
            path,
            keypair_hex: Zeroizing::new(hex::encode(*keypair_bytes)),
            keypair_base58: Zeroizing::new(bs58::encode(*keypair_bytes).into_string()),
            public_key_hex: hex::encode(public_key_bytes),
            address: bs58::encode(public_key_bytes).into_string(),
        }
    }
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;

    fn test_wallet() -> Wallet {
        Wallet::from_mnemonic(
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        )
        .unwrap()
    }

    #[test]
    fn test_derive_address() {
        let wallet = test_wallet();
        let addr = Deriver::new(&wallet).derive().unwrap();

        assert_eq!(addr.address, "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
        assert_eq!(addr.path.as_deref(), Some("m/44'/501'/0'/0'"));
    }

    #[test]
    fn test_debug_redacts_keypair() {
        let wallet = test_wallet();
        let addr = Deriver::new(&wallet).derive().unwrap();

        let debug = format!("{addr:?}");
        assert!(debug.contains(&addr.address));
        assert!(!debug.contains(addr.keypair_hex.as_str()));
        assert!(!debug.contains(addr.keypair_base58.as_str()));
    }

    #[test]
    fn test_keypair_layout() {
        let wallet = test_wallet();
        let addr = Deriver::new(&wallet).derive().unwrap();

        assert_eq!(addr.keypair_hex.len(), 128);
        assert!(addr.keypair_hex.ends_with(&addr.public_key_hex));

        let decoded = bs58::decode(addr.keypair_base58.as_str()).into_vec().unwrap();
        assert_eq!(hex::encode(decoded), *addr.keypair_hex);
    }

    #[test]
    fn test_address_is_public_key() {
        let wallet = test_wallet();
        let addr = Deriver::new(&wallet).derive().unwrap();

        let decoded = bs58::decode(&addr.address).into_vec().unwrap();
        assert_eq!(hex::encode(decoded), addr.public_key_hex);
    }

    #[test]
    fn test_deterministic_derivation() {
        let wallet = test_wallet();
        let deriver = Deriver::new(&wallet);

        let addr1 = deriver.derive().unwrap();
        let addr2 = deriver.derive().unwrap();

        assert_eq!(addr1.address, addr2.address);
        assert_eq!(*addr1.keypair_hex, *addr2.keypair_hex);
    }

    #[test]
    fn test_seed_prefix_uses_raw_seed() {
        let wallet = test_wallet();
        let addr = Deriver::new(&wallet)
            .derive_with(DerivationStyle::SeedPrefix)
            .unwrap();

        assert_eq!(addr.path, None);
        assert_eq!(&addr.keypair_hex[..64], hex::encode(&wallet.seed()[..32]));
    }

    #[test]
    fn test_standard_differs_from_seed_prefix() {
        let wallet = test_wallet();
        let deriver = Deriver::new(&wallet);

        let standard = deriver.derive_with(DerivationStyle::Standard).unwrap();
        let legacy = deriver.derive_with(DerivationStyle::SeedPrefix).unwrap();

        assert_ne!(standard.address, legacy.address);
    }
}
