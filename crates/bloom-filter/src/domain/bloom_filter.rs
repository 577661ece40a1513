//! Core Bloom Filter implementation
//!
//! INVARIANTS:
//! - size = trunc(-n*ln(p) / ln(2)^2) >= 1, fixed at construction
//! - hash_count = trunc((size/n) * ln(2)) >= 1, fixed at construction
//! - No false negatives: after add(x), query(x) is PossiblyPresent

use bitvec::prelude::*;
use tracing::{debug, warn};

use super::config::BloomConfig;
use super::hash_functions::hash_positions;
use super::membership::Membership;
use super::parameters::{derive_parameters, BloomFilterParams};
use crate::error::FilterError;

/// Bloom filter for probabilistic membership testing
///
/// A fixed-size bit array plus `hash_count` seeded MurmurHash3 rounds. Its
/// shape is derived once from the expected item count and the target false
/// positive probability, and never changes: bits only go from clear to set.
///
/// Not internally synchronized. `add` needs `&mut self`, so concurrent writers
/// must go through an external lock.
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilter {
    /// Bit array storing the filter state
    bits: BitVec<u64, Lsb0>,
    /// Derived shape (m, k)
    params: BloomFilterParams,
    /// Expected number of items the filter was sized for
    n_items: i64,
    /// Target false positive probability the filter was sized for
    fp_prob: f64,
}

impl BloomFilter {
    /// Create a Bloom filter sized for `n_items` at `fp_prob`
    ///
    /// # Arguments
    /// * `n_items` - Expected number of items to be added (n)
    /// * `fp_prob` - Target false positive probability, in (0, 1)
    ///
    /// # Errors
    /// `FilterError::InvalidParameters` if `n_items <= 0`, `fp_prob` is not
    /// strictly between 0 and 1, or the derived size or hash count is 0.
    /// Nothing is allocated on failure.
    pub fn new(n_items: i64, fp_prob: f64) -> Result<Self, FilterError> {
        let params = derive_parameters(n_items, fp_prob).inspect_err(|e| {
            warn!(n_items, fp_prob, error = %e, "Rejected bloom filter parameters");
        })?;

        debug!(
            n_items,
            fp_prob,
            size_bits = params.size_bits,
            hash_count = params.hash_count,
            expected_fpr = params.expected_fpr,
            "Bloom filter constructed"
        );

        Ok(Self {
            bits: bitvec![u64, Lsb0; 0; params.size_bits],
            params,
            n_items,
            fp_prob,
        })
    }

    /// Create a Bloom filter from a configuration
    pub fn from_config(config: &BloomConfig) -> Result<Self, FilterError> {
        Self::new(config.n_items, config.fp_prob)
    }

    /// Add an item to the filter
    ///
    /// After this, `query(item)` is guaranteed to be `PossiblyPresent`.
    /// Adding the same item again sets the same bits.
    pub fn add(&mut self, item: &[u8]) {
        for pos in hash_positions(item, self.params.hash_count, self.params.size_bits) {
            self.bits.set(pos, true);
        }
    }

    /// Test whether an item might be in the filter
    ///
    /// Returns:
    /// - `PossiblyPresent` if every bit for the item is set (could be a false positive)
    /// - `DefinitelyAbsent` as soon as one bit is clear (never a false negative)
    pub fn query(&self, item: &[u8]) -> Membership {
        hash_positions(item, self.params.hash_count, self.params.size_bits)
            .all(|pos| self.bits[pos])
            .into()
    }

    /// Get the filter size in bits
    pub fn size(&self) -> usize {
        self.params.size_bits
    }

    /// Same as [`BloomFilter::size`]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Get the number of hash rounds
    pub fn hash_count(&self) -> usize {
        self.params.hash_count
    }

    /// Expected item count the filter was sized for
    pub fn n_items(&self) -> i64 {
        self.n_items
    }

    /// Target false positive probability the filter was sized for
    pub fn fp_prob(&self) -> f64 {
        self.fp_prob
    }

    /// Derived shape of this filter
    pub fn params(&self) -> BloomFilterParams {
        self.params
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits currently set
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.size() as f64
    }

    /// Estimate the current false positive rate from the bits actually set
    ///
    /// Formula: FPR ≈ fill_ratio^k
    pub fn estimated_fpr(&self) -> f64 {
        self.fill_ratio().powi(self.hash_count() as i32)
    }
}
