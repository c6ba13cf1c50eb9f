//! Solana wallet derivation for minted.
//!
//! Derives the first Phantom-compatible account from a
//! [`minted_core::Wallet`] using SLIP-0010 ed25519 derivation.
//!
//! # Usage
//!
//! ```
//! use minted_core::Wallet;
//! use minted_svm::Deriver;
//!
//! let wallet = Wallet::generate(12).unwrap();
//! let addr = Deriver::new(&wallet).derive().unwrap();
//! assert_eq!(addr.keypair_hex.len(), 128);
//! ```

mod derivation_style;
mod deriver;
mod error;
mod slip10;

pub use derivation_style::DerivationStyle;
pub use deriver::{DerivedAddress, Deriver};
pub use error::Error;

/// A convenient Result type alias for minted-svm operations.
pub type Result<T> = core::result::Result<T, Error>;
