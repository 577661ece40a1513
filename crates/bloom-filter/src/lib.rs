//! # Bloom Filter
//!
//! Probabilistic set membership: a fixed-size bit array plus a family of
//! seeded MurmurHash3 rounds. Queries answer "definitely absent" or "possibly
//! present", with a bounded false positive rate and no false negatives.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: Core probabilistic data structure
//!   - `Membership`: Query answer
//!   - `BloomConfig` / `BloomConfigBuilder`: Validated sizing inputs
//!   - `parameters`: Bit-array size and hash-count derivation
//!   - `hash_functions`: Seeded hash family
//!
//! ## Invariants
//!
//! - m = trunc(-n*ln(p) / ln(2)^2) >= 1 and k = trunc((m/n) * ln(2)) >= 1
//! - m and k never change after construction
//! - No false negatives: if added, `query()` MUST return `PossiblyPresent`
//!
//! ## Usage Example
//!
//! ```
//! use bloom_filter::{BloomFilter, Membership};
//!
//! let mut filter = BloomFilter::new(1000, 0.05)?;
//! filter.add(b"0xABCD");
//!
//! assert_eq!(filter.query(b"0xABCD"), Membership::PossiblyPresent);
//! # Ok::<(), bloom_filter::FilterError>(())
//! ```
//!
//! ## Concurrency
//!
//! The filter is a single-owner structure. `add` takes `&mut self`; share
//! it across threads behind a lock if concurrent inserts are needed.

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{BloomConfig, BloomConfigBuilder, BloomFilter, BloomFilterParams, Membership};
pub use error::FilterError;
