//! Error types for Tron wallet derivation.

use core::fmt;

/// Errors that can occur during Tron key derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Invalid private key (zero or above the curve order).
    InvalidPrivateKey,
    /// Invalid derivation path.
    InvalidPath(String),
    /// Key derivation error with details.
    Derivation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrivateKey => write!(f, "invalid private key"),
            Self::InvalidPath(path) => write!(f, "invalid derivation path: {path}"),
            Self::Derivation(msg) => write!(f, "key derivation error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
