//! Error types for wallet generation and export.

use core::fmt;

use rust_xlsxwriter::XlsxError;

use crate::ChainType;

/// Boxed error from a chain crate.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while generating or exporting wallets.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Chain identifier is not one of the supported ids.
    UnsupportedChain(String),
    /// Mnemonic generation or chain-specific derivation failed.
    Derivation {
        /// Chain being derived.
        chain: ChainType,
        /// Underlying chain crate error.
        source: BoxError,
    },
    /// Batch to export holds no records.
    NothingToExport(ChainType),
    /// Workbook could not be written.
    Export(XlsxError),
    /// Output directory could not be created.
    Io(std::io::Error),
}

impl Error {
    pub(crate) fn derivation(chain: ChainType, source: impl Into<BoxError>) -> Self {
        Self::Derivation {
            chain,
            source: source.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedChain(id) => write!(
                f,
                "unsupported chain \"{id}\", choose one of: {}",
                ChainType::id_list()
            ),
            Self::Derivation { chain, source } => {
                write!(f, "failed to derive {chain} wallet: {source}")
            }
            Self::NothingToExport(chain) => write!(f, "no {chain} wallets to export"),
            Self::Export(e) => write!(f, "failed to write workbook: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Derivation { source, .. } => Some(&**source),
            Self::Export(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::UnsupportedChain(_) | Self::NothingToExport(_) => None,
        }
    }
}

impl From<XlsxError> for Error {
    fn from(err: XlsxError) -> Self {
        Self::Export(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// A convenient Result type alias for minted operations.
pub type Result<T> = core::result::Result<T, Error>;
