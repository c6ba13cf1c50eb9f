//! Bitcoin address derivation from a wallet seed.

use core::fmt;
use core::str::FromStr;

use bitcoin::bip32::{DerivationPath, Xpriv};
use bitcoin::key::CompressedPublicKey;
use bitcoin::secp256k1::Secp256k1;
use bitcoin::{Address, Network, PrivateKey, PublicKey};
use minted_core::Wallet;
use zeroize::Zeroizing;

use crate::Error;

/// BIP44 path of the first mainnet receiving address.
pub const DERIVATION_PATH: &str = "m/44'/0'/0'/0/0";

/// Bitcoin mainnet address deriver from a wallet seed.
#[derive(Debug)]
pub struct Deriver<'a> {
    /// Reference to the wallet for seed access.
    wallet: &'a Wallet,
}

/// A derived Bitcoin address with associated keys.
#[derive(Clone)]
pub struct DerivedAddress {
    /// Derivation path used.
    pub path: String,
    /// Private key in WIF format (compressed, zeroized on drop).
    pub private_key_wif: Zeroizing<String>,
    /// Compressed public key in hex format.
    pub public_key_hex: String,
    /// Legacy P2PKH address.
    pub address: String,
}

impl fmt::Debug for DerivedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedAddress")
            .field("path", &self.path)
            .field("private_key_wif", &"[REDACTED]")
            .field("public_key_hex", &self.public_key_hex)
            .field("address", &self.address)
            .finish()
    }
}

impl<'a> Deriver<'a> {
    /// Create a new Bitcoin deriver from a wallet.
    #[must_use]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive the P2PKH address at [`DERIVATION_PATH`].
    ///
    /// # Errors
    ///
    /// Returns an error if master key or child derivation fails.
    pub fn derive(&self) -> Result<DerivedAddress, Error> {
        let derivation_path = DerivationPath::from_str(DERIVATION_PATH)
            .map_err(|e| Error::InvalidDerivationPath(format!("{DERIVATION_PATH}: {e}")))?;

        let secp = Secp256k1::new();
        let master_key = Xpriv::new_master(Network::Bitcoin, self.wallet.seed())?;
        let derived = master_key.derive_priv(&secp, &derivation_path)?;

        let private_key = PrivateKey::new(derived.private_key, Network::Bitcoin);
        let public_key = CompressedPublicKey::from_private_key(&secp, &private_key)?;
        let address = Address::p2pkh(PublicKey::from(public_key), Network::Bitcoin);

        Ok(DerivedAddress {
            path: DERIVATION_PATH.to_string(),
            private_key_wif: Zeroizing::new(private_key.to_wif()),
            public_key_hex: public_key.to_string(),
            address: address.to_string(),
        })
    }
}
