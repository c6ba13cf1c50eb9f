//! Ethereum address derivation from a wallet seed.

use core::fmt;

use bip32::{DerivationPath, XPrv};
use k256::ecdsa::SigningKey;
use minted_core::Wallet;
use zeroize::Zeroizing;

use crate::Error;
use crate::address::{public_key_to_address, to_checksum_address};

/// BIP-44 path of the first Ethereum account (`MetaMask`/Trezor default).
pub const DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";

/// Ethereum address deriver from a wallet seed.
#[derive(Debug)]
pub struct Deriver<'a> {
    /// Reference to the wallet for seed access.
    wallet: &'a Wallet,
}

/// A derived Ethereum address with associated keys.
#[derive(Clone)]
pub struct DerivedAddress {
    /// Derivation path used.
    pub path: String,
    /// Private key in hex format with 0x prefix (zeroized on drop).
    pub private_key_hex: Zeroizing<String>,
    /// Public key in uncompressed hex format.
    pub public_key_hex: String,
    /// Checksummed Ethereum address (EIP-55).
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
    /// Create a new Ethereum deriver from a wallet.
    #[must_use]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive the account at [`DERIVATION_PATH`].
    ///
    /// # Errors
    ///
    /// Returns an error if derivation fails.
    #[inline]
    pub fn derive(&self) -> Result<DerivedAddress, Error> {
        self.derive_at_path(DERIVATION_PATH)
    }

    /// Derive an address at a custom derivation path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not parse or derivation fails.
    pub fn derive_at_path(&self, path: &str) -> Result<DerivedAddress, Error> {
        let private_key = self.derive_key(path)?;

        let public_key = private_key.verifying_key();
        let public_key_bytes = public_key.to_encoded_point(false);
        let address = public_key_to_address(public_key_bytes.as_bytes());

        Ok(DerivedAddress {
            path: path.to_string(),
            private_key_hex: Zeroizing::new(format!("0x{}", hex::encode(private_key.to_bytes()))),
            public_key_hex: hex::encode(public_key_bytes.as_bytes()),
            address: to_checksum_address(&address),
        })
    }

    fn derive_key(&self, path: &str) -> Result<SigningKey, Error> {
        let derivation_path: DerivationPath = path
            .parse()
            .map_err(|_| Error::InvalidPath(path.to_string()))?;

        let derived = XPrv::derive_from_path(self.wallet.seed(), &derivation_path)
            .map_err(|e| Error::Derivation(e.to_string()))?;

        Ok(derived.private_key().clone())
    }
}
