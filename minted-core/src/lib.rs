//! Core wallet types for the minted wallet generator.
//!
//! This crate provides the [`Wallet`] type that holds a freshly generated
//! BIP39 mnemonic and its seed, plus the hashing and Base58Check helpers
//! shared by the chain crates.
//!
//! # Example
//!
//! ```
//! use minted_core::Wallet;
//!
//! // Generate a new 12-word wallet
//! let wallet = Wallet::generate(12)?;
//! assert_eq!(wallet.word_count(), 12);
//!
//! // Every chain crate derives from the same 64-byte seed
//! let seed = wallet.seed();
//! assert_eq!(seed.len(), 64);
//! # Ok::<(), minted_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod encoding;
mod error;
pub mod hash;
mod wallet;

pub use error::{Error, Result};
pub use wallet::{DEFAULT_WORD_COUNT, Wallet};
