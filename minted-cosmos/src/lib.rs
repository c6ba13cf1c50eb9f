//! Cosmos Hub wallet derivation for minted.
//!
//! Keys follow SLIP-0010 secp256k1 derivation, which for this curve is the
//! same computation as BIP-32, at `m/44'/118'/0'/0/0`. Addresses are the
//! Bech32 encoding of `RIPEMD160(SHA256(compressed pubkey))`.
//!
//! # Usage
//!
//! ```
//! use minted_core::Wallet;
//! use minted_cosmos::Deriver;
//!
//! let wallet = Wallet::from_mnemonic(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//! ).unwrap();
//!
//! let addr = Deriver::new(&wallet).derive().unwrap();
//! assert_eq!(addr.address, "cosmos19rl4cm2hmr8afy4kldpxz3fka4jguq0auqdal4");
//! ```

mod deriver;
mod error;

pub use deriver::{DEFAULT_HRP, DERIVATION_PATH, DerivedAddress, Deriver, public_key_to_address};
pub use error::Error;

/// A convenient Result type alias for minted-cosmos operations.
pub type Result<T> = core::result::Result<T, Error>;
