//! Solana key derivation styles.

/// How the Solana keypair is obtained from the wallet seed.
///
/// # Path Specifications
///
/// - **Standard (Phantom/Backpack)**: SLIP-0010 `m/44'/501'/0'/0'`
/// - **Seed prefix**: first 32 bytes of the BIP39 seed, no derivation path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DerivationStyle {
    /// SLIP-0010 ed25519 path used by Phantom, Backpack and Solflare.
    #[default]
    Standard,

    /// Uses the first 32 bytes of the BIP39 seed as the ed25519 secret.
    ///
    /// Wallet software does not derive keys this way, so the address will not
    /// match what Phantom shows for the same mnemonic. Only use it to
    /// reproduce keys exported by older versions of this tool.
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
            Self::Standard => Some("m/44'/501'/0'/0'"),
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
        assert_eq!(DerivationStyle::Standard.path(), Some("m/44'/501'/0'/0'"));
        assert_eq!(DerivationStyle::SeedPrefix.path(), None);
    }

    #[test]
    fn test_default() {
        assert_eq!(DerivationStyle::default(), DerivationStyle::Standard);
    }
}
