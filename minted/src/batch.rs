//! Batch generation of wallet records for one chain.

use tracing::{info, warn};

use crate::{ChainType, Derive, WalletDeriver, WalletRecord};

/// Ordered records generated for a single chain.
#[derive(Debug, Clone)]
pub struct Batch {
    chain: ChainType,
    records: Vec<WalletRecord>,
    failures: usize,
}

impl Batch {
    /// Create an empty batch for `chain`.
    #[must_use]
    pub const fn new(chain: ChainType) -> Self {
        Self {
            chain,
            records: Vec::new(),
            failures: 0,
        }
    }

    /// Chain every record in the batch belongs to.
    #[inline]
    #[must_use]
    pub const fn chain(&self) -> ChainType {
        self.chain
    }

    /// Records in generation order.
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[WalletRecord] {
        &self.records
    }

    /// Number of wallets that failed to derive and were skipped.
    #[inline]
    #[must_use]
    pub const fn failures(&self) -> usize {
        self.failures
    }

    /// Number of records in the batch.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the batch holds no records.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a WalletRecord;
    type IntoIter = core::slice::Iter<'a, WalletRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Runs a [`Derive`] implementation repeatedly to fill a [`Batch`].
#[derive(Debug, Clone, Default)]
pub struct BatchGenerator<D = WalletDeriver> {
    deriver: D,
}

impl<D: Derive> BatchGenerator<D> {
    /// Create a generator backed by `deriver`.
    #[must_use]
    pub const fn new(deriver: D) -> Self {
        Self { deriver }
    }

    /// Get the underlying deriver.
    #[inline]
    #[must_use]
    pub const fn deriver(&self) -> &D {
        &self.deriver
    }

    /// Generate `count` wallets for `chain`.
    ///
    /// A wallet that fails to derive is logged and skipped, so the batch may
    /// hold fewer than `count` records.
    pub fn generate(&self, chain: ChainType, count: usize) -> Batch {
        info!(%chain, count, "generating batch");

        let mut batch = Batch::new(chain);

        for index in 0..count {
            match self.deriver.derive(chain) {
                Ok(record) => batch.records.push(record),
                Err(err) => {
                    warn!(index, %chain, error = %err, "skipping wallet");
                    batch.failures += 1;
                }
            }
        }

        info!(%chain, generated = batch.len(), failed = batch.failures, "batch complete");
        batch
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::{Error, Result};

    /// Fails every other call.
    struct FlakyDeriver {
        calls: Cell<usize>,
    }

    impl Derive for FlakyDeriver {
        fn derive(&self, chain: ChainType) -> Result<WalletRecord> {
            let n = self.calls.get();
            self.calls.set(n + 1);
            if n % 2 == 1 {
                return Err(Error::UnsupportedChain(format!("call {n}")));
            }
            WalletDeriver::new().derive(chain)
        }
    }

    #[test]
    fn test_generate_count() {
        let batch = BatchGenerator::new(WalletDeriver::new()).generate(ChainType::Ethereum, 5);

        assert_eq!(batch.chain(), ChainType::Ethereum);
        assert_eq!(batch.len(), 5);
        assert_eq!(batch.failures(), 0);
        assert!((&batch).into_iter().all(|r| r.chain == ChainType::Ethereum));
    }

    #[test]
    fn test_generate_zero() {
        let batch = BatchGenerator::<WalletDeriver>::default().generate(ChainType::Solana, 0);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_failures_are_skipped() {
        let generator = BatchGenerator::new(FlakyDeriver {
            calls: Cell::new(0),
        });
        let batch = generator.generate(ChainType::Cosmos, 5);

        assert_eq!(batch.len(), 3);
        assert_eq!(batch.failures(), 2);
        assert_eq!(generator.deriver().calls.get(), 5);
    }

    #[test]
    fn test_empty_batch() {
        let batch = Batch::new(ChainType::Tron);
        assert!(batch.is_empty());
        assert_eq!(batch.records().len(), 0);
    }
}
