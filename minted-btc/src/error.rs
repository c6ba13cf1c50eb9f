//! Error types for Bitcoin wallet derivation.

use core::fmt;

/// Errors that can occur during Bitcoin key derivation.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// BIP32 derivation error.
    Bip32(bitcoin::bip32::Error),
    /// Invalid derivation path.
    InvalidDerivationPath(String),
    /// Derived key could not be turned into a compressed public key.
    PublicKey(bitcoin::key::UncompressedPublicKeyError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bip32(e) => write!(f, "BIP32 derivation error: {e}"),
            Self::InvalidDerivationPath(p) => write!(f, "invalid derivation path: {p}"),
            Self::PublicKey(e) => write!(f, "public key error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bip32(e) => Some(e),
            Self::PublicKey(e) => Some(e),
            Self::InvalidDerivationPath(_) => None,
        }
    }
}

impl From<bitcoin::bip32::Error> for Error {
    fn from(err: bitcoin::bip32::Error) -> Self {
        Self::Bip32(err)
    }
}

impl From<bitcoin::key::UncompressedPublicKeyError> for Error {
    fn from(err: bitcoin::key::UncompressedPublicKeyError) -> Self {
        Self::PublicKey(err)
    }
}
