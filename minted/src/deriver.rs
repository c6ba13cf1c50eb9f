//! Chain dispatch from a fresh mnemonic to a [`WalletRecord`].

use minted_core::{DEFAULT_WORD_COUNT, Wallet};
use tracing::debug;
use zeroize::Zeroizing;

use crate::{ChainType, Error, Result, WalletRecord};

/// Source of wallet records for a chain.
///
/// [`BatchGenerator`](crate::BatchGenerator) is generic over this trait so a
/// batch can be driven by something other than [`WalletDeriver`].
pub trait Derive {
    /// Produce one new wallet record for `chain`.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet could not be generated.
    fn derive(&self, chain: ChainType) -> Result<WalletRecord>;
}

/// Generates a fresh 12-word mnemonic and derives the chain's key and address.
///
/// Each chain is handled by its own crate at a fixed path:
///
/// | Chain          | Path                 | Private key           | Address            |
/// |----------------|----------------------|-----------------------|--------------------|
/// | Ethereum / BSC | `m/44'/60'/0'/0/0`   | `0x` + hex            | EIP-55 hex         |
/// | Solana         | `m/44'/501'/0'/0'`   | 64-byte keypair hex   | Base58 public key  |
/// | Bitcoin        | `m/44'/0'/0'/0/0`    | compressed WIF        | P2PKH              |
/// | Tron           | `m/44'/195'/0'/0/0`  | hex                   | Base58Check `T...` |
/// | Cosmos         | `m/44'/118'/0'/0/0`  | hex                   | Bech32 `cosmos1..` |
#[derive(Debug, Clone, Copy, Default)]
pub struct WalletDeriver {
    legacy_seed_prefix: bool,
}

/// Private key and address produced by a chain handler.
struct Keys {
    private_key: Zeroizing<String>,
    address: String,
}

impl WalletDeriver {
    /// Create a deriver using the standard path for every chain.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            legacy_seed_prefix: false,
        }
    }

    /// Use the first 32 seed bytes as the Solana and Tron key instead of the
    /// standard path, reproducing wallets exported by older releases.
    #[must_use]
    pub const fn with_legacy_seed_prefix(mut self, enabled: bool) -> Self {
        self.legacy_seed_prefix = enabled;
        self
    }

    /// Whether the legacy seed-prefix derivation is enabled.
    #[must_use]
    pub const fn legacy_seed_prefix(&self) -> bool {
        self.legacy_seed_prefix
    }

    /// Generate a new wallet for `chain`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Derivation`] if mnemonic generation or key derivation
    /// fails.
    pub fn derive(&self, chain: ChainType) -> Result<WalletRecord> {
        let wallet =
            Wallet::generate(DEFAULT_WORD_COUNT).map_err(|e| Error::derivation(chain, e))?;
        self.derive_from(&wallet, chain)
    }

    /// Generate a new wallet for the chain named by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChain`] if `id` is not a supported chain.
    pub fn derive_str(&self, id: &str) -> Result<WalletRecord> {
        self.derive(id.parse()?)
    }

    /// Derive the `chain` record for an existing wallet.
    ///
    /// The result depends only on the mnemonic, the chain and the derivation
    /// style.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Derivation`] if the chain crate fails.
    pub fn derive_from(&self, wallet: &Wallet, chain: ChainType) -> Result<WalletRecord> {
        let keys = match chain {
            ChainType::Ethereum | ChainType::BinanceSmartChain => {
                derive_evm(wallet).map_err(|e| Error::derivation(chain, e))
            }
            ChainType::Solana => {
                self.derive_svm(wallet).map_err(|e| Error::derivation(chain, e))
            }
            ChainType::Bitcoin => derive_btc(wallet).map_err(|e| Error::derivation(chain, e)),
            ChainType::Tron => self.derive_tron(wallet).map_err(|e| Error::derivation(chain, e)),
            ChainType::Cosmos => derive_cosmos(wallet).map_err(|e| Error::derivation(chain, e)),
        }?;

        debug!(%chain, address = %keys.address, "derived wallet");

        Ok(WalletRecord {
            chain,
            mnemonic: Zeroizing::new(wallet.mnemonic().to_string()),
            private_key: keys.private_key,
            address: keys.address,
        })
    }

    #[allow(deprecated)]
    fn derive_svm(&self, wallet: &Wallet) -> minted_svm::Result<Keys> {
        let style = if self.legacy_seed_prefix {
            minted_svm::DerivationStyle::SeedPrefix
        } else {
            minted_svm::DerivationStyle::Standard
        };
        let derived = minted_svm::Deriver::new(wallet).derive_with(style)?;
        Ok(Keys {
            private_key: derived.keypair_hex,
            address: derived.address,
        })
    }

    #[allow(deprecated)]
    fn derive_tron(&self, wallet: &Wallet) -> minted_tron::Result<Keys> {
        let style = if self.legacy_seed_prefix {
            minted_tron::DerivationStyle::SeedPrefix
        } else {
            minted_tron::DerivationStyle::Standard
        };
        let derived = minted_tron::Deriver::new(wallet).derive_with(style)?;
        Ok(Keys {
            private_key: derived.private_key_hex,
            address: derived.address,
        })
    }
}

impl Derive for WalletDeriver {
    fn derive(&self, chain: ChainType) -> Result<WalletRecord> {
        Self::derive(self, chain)
    }
}

fn derive_evm(wallet: &Wallet) -> minted_evm::Result<Keys> {
    let derived = minted_evm::Deriver::new(wallet).derive()?;
    Ok(Keys {
        private_key: derived.private_key_hex,
        address: derived.address,
    })
}

fn derive_btc(wallet: &Wallet) -> minted_btc::Result<Keys> {
    let derived = minted_btc::Deriver::new(wallet).derive()?;
    Ok(Keys {
        private_key: derived.private_key_wif,
        address: derived.address,
    })
}

fn derive_cosmos(wallet: &Wallet) -> minted_cosmos::Result<Keys> {
    let derived = minted_cosmos::Deriver::new(wallet).derive()?;
    Ok(Keys {
        private_key: derived.private_key_hex,
        address: derived.address,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn test_wallet() -> Wallet {
        Wallet::from_mnemonic(TEST_MNEMONIC).unwrap()
    }

    #[test]
    fn test_known_vectors() {
        let wallet = test_wallet();
        let deriver = WalletDeriver::new();

        let eth = deriver.derive_from(&wallet, ChainType::Ethereum).unwrap();
        assert_eq!(eth.address, "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
        assert_eq!(
            *eth.private_key,
            "0x1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
        );

        let btc = deriver.derive_from(&wallet, ChainType::Bitcoin).unwrap();
        assert_eq!(btc.address, "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA");
        assert_eq!(
            *btc.private_key,
            "L4p2b9VAf8k5aUahF1JCJUzZkgNEAqLfq8DDdQiyAprQAKSbu8hf"
        );

        let sol = deriver.derive_from(&wallet, ChainType::Solana).unwrap();
        assert_eq!(sol.address, "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");

        let tron = deriver.derive_from(&wallet, ChainType::Tron).unwrap();
        assert_eq!(tron.address, "TUEZSdKsoDHQMeZwihtdoBiN46zxhGWYdH");

        let cosmos = deriver.derive_from(&wallet, ChainType::Cosmos).unwrap();
        assert_eq!(cosmos.address, "cosmos19rl4cm2hmr8afy4kldpxz3fka4jguq0auqdal4");
    }

    #[test]
    fn test_bsc_shares_ethereum_keys() {
        let wallet = test_wallet();
        let deriver = WalletDeriver::new();

        let eth = deriver.derive_from(&wallet, ChainType::Ethereum).unwrap();
        let bsc = deriver.derive_from(&wallet, ChainType::BinanceSmartChain).unwrap();
        assert_eq!(eth.address, bsc.address);
        assert_eq!(*eth.private_key, *bsc.private_key);
        assert_eq!(bsc.chain, ChainType::BinanceSmartChain);
    }

    #[test]
    fn test_record_carries_mnemonic() {
        let wallet = test_wallet();
        let record = WalletDeriver::new()
            .derive_from(&wallet, ChainType::Tron)
            .unwrap();
        assert_eq!(record.mnemonic.as_str(), TEST_MNEMONIC);
    }

    #[test]
    fn test_private_key_formats() {
        let wallet = test_wallet();
        let deriver = WalletDeriver::new();

        let sol = deriver.derive_from(&wallet, ChainType::Solana).unwrap();
        assert_eq!(sol.private_key.len(), 128);

        let btc = deriver.derive_from(&wallet, ChainType::Bitcoin).unwrap();
        assert!(btc.private_key.starts_with('K') || btc.private_key.starts_with('L'));

        let tron = deriver.derive_from(&wallet, ChainType::Tron).unwrap();
        assert_eq!(tron.private_key.len(), 64);

        let cosmos = deriver.derive_from(&wallet, ChainType::Cosmos).unwrap();
        assert_eq!(cosmos.private_key.len(), 64);
    }

    #[test]
    fn test_legacy_seed_prefix_changes_solana_and_tron() {
        let wallet = test_wallet();
        let standard = WalletDeriver::new();
        let legacy = WalletDeriver::new().with_legacy_seed_prefix(true);
        assert!(legacy.legacy_seed_prefix());

        for chain in [ChainType::Solana, ChainType::Tron] {
            let a = standard.derive_from(&wallet, chain).unwrap();
            let b = legacy.derive_from(&wallet, chain).unwrap();
            assert_ne!(a.address, b.address, "{chain}");
        }

        let a = standard.derive_from(&wallet, ChainType::Ethereum).unwrap();
        let b = legacy.derive_from(&wallet, ChainType::Ethereum).unwrap();
        assert_eq!(a.address, b.address);
    }

    #[test]
    fn test_derive_str_unsupported() {
        let result = WalletDeriver::new().derive_str("xyz");
        assert!(matches!(result, Err(Error::UnsupportedChain(_))));
    }
}
