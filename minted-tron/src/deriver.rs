//! Tron address derivation from a wallet seed.

use core::fmt;

use bip32::{DerivationPath, XPrv};
use k256::ecdsa::SigningKey;
use minted_core::Wallet;
use zeroize::Zeroizing;

use crate::Error;
use crate::address::public_key_to_address;
use crate::derivation_style::DerivationStyle;

/// Tron address deriver from a wallet seed.
#[derive(Debug)]
pub struct Deriver<'a> {
    /// Reference to the wallet for seed access.
    wallet: &'a Wallet,
}

/// A derived Tron address with associated keys.
#[derive(Clone)]
pub struct DerivedAddress {
    /// Derivation path used, `None` for the seed-prefix style.
    pub path: Option<String>,
    /// Private key in hex format without prefix (zeroized on drop).
    pub private_key_hex: Zeroizing<String>,
    /// Public key in uncompressed hex format.
    pub public_key_hex: String,
    /// Base58Check Tron address.
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
    /// Create a new Tron deriver from a wallet.
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
    /// Returns an error if derivation fails or the seed prefix is not a valid
    /// secp256k1 scalar.
    pub fn derive_with(&self, style: DerivationStyle) -> Result<DerivedAddress, Error> {
        let seed = self.wallet.seed();
        let private_key = match style.path() {
            Some(path) => {
                let derivation_path: DerivationPath = path
                    .parse()
                    .map_err(|_| Error::InvalidPath(path.to_string()))?;
                XPrv::derive_from_path(seed, &derivation_path)
                    .map_err(|e| Error::Derivation(e.to_string()))?
                    .private_key()
                    .clone()
            }
            None => SigningKey::from_slice(&seed[..32]).map_err(|_| Error::InvalidPrivateKey)?,
        };

        let public_key_bytes = private_key.verifying_key().to_encoded_point(false);

        Ok(DerivedAddress {
            path: style.path().map(str::to_string),
            private_key_hex: Zeroizing::new(hex::encode(private_key.to_bytes())),
            public_key_hex: hex::encode(public_key_bytes.as_bytes()),
            address: public_key_to_address(public_key_bytes.as_bytes()),
        })
    }
}
