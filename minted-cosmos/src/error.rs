//! Error types for Cosmos wallet derivation.

use core::fmt;

/// Errors that can occur during Cosmos key derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Invalid Bech32 human-readable prefix.
    InvalidHrp(String),
    /// Invalid derivation path.
    InvalidPath(String),
    /// Key derivation error with details.
    Derivation(String),
    /// Bech32 encoding failed.
    Encoding(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHrp(hrp) => write!(f, "invalid bech32 prefix: {hrp}"),
            Self::InvalidPath(path) => write!(f, "invalid derivation path: {path}"),
            Self::Derivation(msg) => write!(f, "key derivation error: {msg}"),
            Self::Encoding(msg) => write!(f, "bech32 encoding error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
