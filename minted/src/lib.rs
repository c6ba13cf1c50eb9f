//! # minted
//!
//! Generates fresh BIP39 wallets for Ethereum, Binance Smart Chain, Solana,
//! Bitcoin, Tron and Cosmos, and exports batches of them to `.xlsx`
//! workbooks.
//!
//! The per-chain derivation lives in the `minted-*` chain crates. This crate
//! dispatches on [`ChainType`] and adds batching and export on top.
//!
//! # Example
//!
//! ```
//! use minted::{BatchGenerator, ChainType, WalletDeriver};
//!
//! let record = WalletDeriver::new().derive_str("eth")?;
//! assert!(record.address.starts_with("0x"));
//!
//! let batch = BatchGenerator::new(WalletDeriver::new()).generate(ChainType::Bitcoin, 3);
//! assert_eq!(batch.len(), 3);
//! # Ok::<(), minted::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod batch;
mod chain;
mod deriver;
mod error;
mod export;
mod record;

pub use batch::{Batch, BatchGenerator};
pub use chain::ChainType;
pub use deriver::{Derive, WalletDeriver};
pub use error::{Error, Result};
pub use export::{COLUMNS, Exporter};
pub use minted_core::Wallet;
pub use record::WalletRecord;
