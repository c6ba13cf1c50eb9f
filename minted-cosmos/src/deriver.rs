//! Cosmos address derivation from a wallet seed.

use core::fmt;

use bech32::{Bech32, Hrp};
use bip32::{DerivationPath, XPrv};
use minted_core::Wallet;
use minted_core::hash::hash160;
use zeroize::Zeroizing;

use crate::Error;

/// BIP-44 path of the first Cosmos Hub account (Keplr default).
pub const DERIVATION_PATH: &str = "m/44'/118'/0'/0/0";

/// Bech32 prefix of Cosmos Hub account addresses.
pub const DEFAULT_HRP: &str = "cosmos";

/// Encode a 33-byte compressed public key as a Bech32 account address.
///
/// # Errors
///
/// Returns an error if `hrp` is not a valid Bech32 prefix.
pub fn public_key_to_address(hrp: &str, compressed: &[u8]) -> Result<String, Error> {
    let hrp = Hrp::parse(hrp).map_err(|_| Error::InvalidHrp(hrp.to_string()))?;
    bech32::encode::<Bech32>(hrp, &hash160(compressed)).map_err(|e| Error::Encoding(e.to_string()))
}

/// Cosmos address deriver from a wallet seed.
#[derive(Debug)]
pub struct Deriver<'a> {
    /// Reference to the wallet for seed access.
    wallet: &'a Wallet,
    /// Bech32 human-readable prefix.
    hrp: &'a str,
}

/// A derived Cosmos address with associated keys.
#[derive(Clone)]
pub struct DerivedAddress {
    /// Derivation path used.
    pub path: String,
    /// Private key in hex format without prefix (zeroized on drop).
    pub private_key_hex: Zeroizing<String>,
    /// Public key in compressed hex format.
    pub public_key_hex: String,
    /// Bech32 account address.
    pub address: String,
}

impl fmt::Debug for DerivedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedAddress")
            .field("path", &self.path)
            .field("private_key_hex", &"[REDACTED]")
            .field("public_key_hex", &self.public_key_hex)
            .field("address", &self.address)
            .finish()
    }
}

impl<'a> Deriver<'a> {
    /// Create a Cosmos Hub deriver from a wallet.
    #[must_use]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self::with_hrp(wallet, DEFAULT_HRP)
    }

    /// Create a deriver for another chain sharing coin type 118 (e.g. `osmo`).
    #[must_use]
    pub const fn with_hrp(wallet: &'a Wallet, hrp: &'a str) -> Self {
        Self { wallet, hrp }
    }

    /// Derive the account at [`DERIVATION_PATH`].
    ///
    /// # Errors
    ///
    /// Returns an error if derivation or address encoding fails.
    #[inline]
    pub fn derive(&self) -> Result<DerivedAddress, Error> {
        self.derive_at_path(DERIVATION_PATH)
    }

    /// Derive an address at a custom derivation path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not parse, derivation fails, or the
    /// prefix is invalid.
    pub fn derive_at_path(&self, path: &str) -> Result<DerivedAddress, Error> {
        let derivation_path: DerivationPath = path
            .parse()
            .map_err(|_| Error::InvalidPath(path.to_string()))?;

        let derived = XPrv::derive_from_path(self.wallet.seed(), &derivation_path)
            .map_err(|e| Error::Derivation(e.to_string()))?;
        let private_key = derived.private_key();

        let public_key = private_key.verifying_key().to_encoded_point(true);
        let address = public_key_to_address(self.hrp, public_key.as_bytes())?;

        Ok(DerivedAddress {
            path: path.to_string(),
            private_key_hex: Zeroizing::new(hex::encode(private_key.to_bytes())),
            public_key_hex: hex::encode(public_key.as_bytes()),
            address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn test_wallet() -> Wallet {
        Wallet::from_mnemonic(TEST_MNEMONIC).unwrap()
    }

    #[test]
    fn test_derive_known_vector() {
        let wallet = test_wallet();
        let addr = Deriver::new(&wallet).derive().unwrap();

        assert_eq!(addr.path, "m/44'/118'/0'/0/0");
        assert_eq!(addr.address, "cosmos19rl4cm2hmr8afy4kldpxz3fka4jguq0auqdal4");
        assert_eq!(addr.private_key_hex.len(), 64);
        assert_eq!(addr.public_key_hex.len(), 66);
    }

    #[test]
    fn test_address_is_not_chain_code_placeholder() {
        let wallet = test_wallet();
        let addr = Deriver::new(&wallet).derive().unwrap();

        // 40 hex chars was the shape of the old chain-code slice.
        assert!(addr.address.starts_with("cosmos1"));
        assert_eq!(addr.address.len(), 45);
        assert!(!addr.address.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_custom_hrp_shares_key() {
        let wallet = test_wallet();
        let hub = Deriver::new(&wallet).derive().unwrap();
        let osmo = Deriver::with_hrp(&wallet, "osmo").derive().unwrap();

        assert!(osmo.address.starts_with("osmo1"));
        assert_eq!(*hub.private_key_hex, *osmo.private_key_hex);
        assert_ne!(hub.address, osmo.address);
    }

    #[test]
    fn test_invalid_hrp() {
        let wallet = test_wallet();
        let result = Deriver::with_hrp(&wallet, "").derive();
        assert!(matches!(result, Err(Error::InvalidHrp(_))));
    }

    #[test]
    fn test_deterministic_derivation() {
        let wallet = test_wallet();
        let addr1 = Deriver::new(&wallet).derive().unwrap();
        let addr2 = Deriver::new(&wallet).derive().unwrap();
        assert_eq!(addr1.address, addr2.address);
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let wallet = test_wallet();
        let addr = Deriver::new(&wallet).derive().unwrap();

        let debug = format!("{addr:?}");
        assert!(debug.contains(&addr.address));
        assert!(!debug.contains(addr.private_key_hex.as_str()));
    }
}
