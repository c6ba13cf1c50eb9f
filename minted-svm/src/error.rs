//! Error types for Solana wallet derivation.

use core::fmt;

/// Errors that can occur during Solana key derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Key derivation failed with details.
    Derivation(String),
    /// Invalid SLIP-0010 path.
    InvalidPath(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Derivation(msg) => write!(f, "derivation error: {msg}"),
            Self::InvalidPath(path) => write!(f, "invalid derivation path: {path}"),
        }
    }
}

impl std::error::Error for Error {}
