//! Tron key derivation styles.

/// How the Tron private key is obtained from the wallet seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DerivationStyle {
    /// BIP-44 path `m/44'/195'/0'/0/0` used by TronLink, Trust and Ledger.
    #[default]
    Standard,

    /// Uses the first 32 bytes of the BIP39 seed as the secp256k1 key.
    ///
    /// TronLink will not recover this account from the mnemonic. Only use
    /// it to reproduce keys exported by older versions of this tool.
    #[deprecated(
        note = "Use Standard for new wallets. SeedPrefix only reproduces keys from older exports."
    )]
    SeedPrefix,
}

impl DerivationStyle {
    /// Derivation path for this style, if it uses one.
    #[must_use]
    #[allow(deprecated)]
    pub const fn path(self) -> Option<&'static str> {
        match self {
            Self::Standard => Some("m/44'/195'/0'/0/0"),
            Self::SeedPrefix => None,
        }
    }
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(DerivationStyle::Standard.path(), Some("m/44'/195'/0'/0/0"));
        assert_eq!(DerivationStyle::SeedPrefix.path(), None);
    }
}
