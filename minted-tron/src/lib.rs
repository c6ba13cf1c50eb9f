//! Tron wallet derivation for minted.
//!
//! Tron uses the same secp256k1 keys and Keccak-256 account hash as
//! Ethereum, but addresses carry a `0x41` version byte and are
//! Base58Check encoded, so they always start with `T`.
//!
//! # Usage
//!
//! ```
//! use minted_core::Wallet;
//! use minted_tron::Deriver;
//!
//! let wallet = Wallet::generate(12).unwrap();
//! let addr = Deriver::new(&wallet).derive().unwrap();
//! assert!(addr.address.starts_with('T'));
//! ```

mod address;
mod derivation_style;
mod deriver;
mod error;

pub use address::{ADDRESS_VERSION, public_key_to_address};
pub use derivation_style::DerivationStyle;
pub use deriver::{DerivedAddress, Deriver};
pub use error::Error;

/// A convenient Result type alias for minted-tron operations.
pub type Result<T> = core::result::Result<T, Error>;
