//! Bitcoin wallet derivation for minted.
//!
//! Derives the first BIP-44 legacy account (`m/44'/0'/0'/0/0`) from a
//! [`minted_core::Wallet`] and reports it as a P2PKH address with a WIF
//! private key.
//!
//! # Usage
//!
//! ```
//! use minted_btc::Deriver;
//! use minted_core::Wallet;
//!
//! let wallet = Wallet::generate(12).unwrap();
//! let addr = Deriver::new(&wallet).derive().unwrap();
//! assert!(addr.address.starts_with('1'));
//! ```

mod deriver;
mod error;

pub use deriver::{DERIVATION_PATH, DerivedAddress, Deriver};
pub use error::Error;

/// A convenient Result type alias for minted-btc operations.
pub type Result<T> = core::result::Result<T, Error>;
