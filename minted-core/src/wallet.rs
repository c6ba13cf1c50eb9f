//! Mnemonic-backed wallet seed shared by every chain deriver.

use core::fmt;

use bip39::{Language, Mnemonic};
use zeroize::Zeroizing;

use crate::Error;

/// Word count of a 128-bit entropy mnemonic.
pub const DEFAULT_WORD_COUNT: usize = 12;

/// A BIP39 wallet from which chain-specific keys are derived.
///
/// The wallet holds the English mnemonic phrase and the 64-byte seed
/// computed from it with an empty passphrase. Both are wiped on drop.
#[derive(Clone)]
pub struct Wallet {
    /// BIP39 mnemonic phrase.
    mnemonic: Zeroizing<String>,
    /// Seed derived from the mnemonic.
    seed: Zeroizing<[u8; 64]>,
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("mnemonic", &"[REDACTED]")
            .field("seed", &"[REDACTED]")
            .finish()
    }
}

impl Wallet {
    /// Generate a new wallet with a random mnemonic.
    ///
    /// Entropy comes from the operating system's CSPRNG.
    ///
    /// # Arguments
    ///
    /// * `word_count` - Number of words (12, 15, 18, 21, or 24)
    ///
    /// # Errors
    ///
    /// Returns an error if the word count is invalid.
    pub fn generate(word_count: usize) -> Result<Self, Error> {
        if !matches!(word_count, 12 | 15 | 18 | 21 | 24) {
            return Err(Error::InvalidWordCount(word_count));
        }

        let mnemonic = Mnemonic::generate_in(Language::English, word_count)?;
        Ok(Self::from_parsed(&mnemonic))
    }

    /// Create a wallet from an existing mnemonic phrase.
    ///
    /// Used to re-run derivation deterministically for a known phrase.
    ///
    /// # Errors
    ///
    /// Returns an error if the phrase is not a checksum-valid English mnemonic.
    pub fn from_mnemonic(phrase: &str) -> Result<Self, Error> {
        let mnemonic = Mnemonic::parse_in_normalized(Language::English, phrase)?;
        Ok(Self::from_parsed(&mnemonic))
    }

    fn from_parsed(mnemonic: &Mnemonic) -> Self {
        Self {
            mnemonic: Zeroizing::new(mnemonic.to_string()),
            seed: Zeroizing::new(mnemonic.to_seed_normalized("")),
        }
    }

    /// Get the mnemonic phrase.
    ///
    /// **Security Warning**: Handle this value carefully as it can
    /// reconstruct all derived keys.
    #[inline]
    #[must_use]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Get the seed bytes for key derivation.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> &[u8; 64] {
        &self.seed
    }

    /// Get the word count of the mnemonic.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.mnemonic.split_whitespace().count()
    }
}
