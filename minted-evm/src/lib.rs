//! Ethereum wallet derivation for minted.
//!
//! Derives the first `MetaMask`-compatible account (`m/44'/60'/0'/0/0`) from a
//! [`minted_core::Wallet`]. Binance Smart Chain shares the same key and
//! address format, so both chains use this crate.
//!
//! # Usage
//!
//! ```
//! use minted_core::Wallet;
//! use minted_evm::Deriver;
//!
//! let wallet = Wallet::from_mnemonic(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//! ).unwrap();
//!
//! let addr = Deriver::new(&wallet).derive().unwrap();
//! assert_eq!(addr.address, "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
//! ```

mod address;
mod deriver;
mod error;

pub use address::{public_key_to_address, to_checksum_address};
pub use deriver::{DERIVATION_PATH, DerivedAddress, Deriver};
pub use error::Error;

/// A convenient Result type alias for minted-evm operations.
pub type Result<T> = core::result::Result<T, Error>;
