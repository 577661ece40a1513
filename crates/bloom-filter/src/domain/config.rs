//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_filter::{BloomConfigBuilder, BloomFilter};
//!
//! let config = BloomConfigBuilder::new()
//!     .n_items(500)
//!     .fp_prob(0.01)
//!     .build()
//!     .expect("Valid config");
//!
//! let filter = BloomFilter::from_config(&config).expect("Valid filter");
//! assert_eq!(filter.n_items(), 500);
//! ```

use serde::{Deserialize, Serialize};

use super::parameters::{derive_parameters, BloomFilterParams};
use crate::error::FilterError;

/// Inputs a Bloom filter is sized from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloomConfig {
    /// Number of items expected to be added
    pub n_items: i64,
    /// Target false positive probability, in (0, 1)
    pub fp_prob: f64,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            n_items: 1000,
            fp_prob: 0.05,
        }
    }
}

impl BloomConfig {
    /// Create a new configuration with validation
    pub fn new(n_items: i64, fp_prob: f64) -> Result<Self, FilterError> {
        let config = Self { n_items, fp_prob };
        config.validate()?;
        Ok(config)
    }

    /// Validate that these inputs derive a usable filter shape
    pub fn validate(&self) -> Result<(), FilterError> {
        self.params().map(|_| ())
    }

    /// Derive the filter shape for this configuration
    pub fn params(&self) -> Result<BloomFilterParams, FilterError> {
        derive_parameters(self.n_items, self.fp_prob)
    }

    /// Builder-style method to set the expected item count
    pub fn with_n_items(mut self, n_items: i64) -> Self {
        self.n_items = n_items;
        self
    }

    /// Builder-style method to set the target FPR
    pub fn with_fp_prob(mut self, fp_prob: f64) -> Self {
        self.fp_prob = fp_prob;
        self
    }
}

/// Builder for BloomConfig with validation
#[derive(Default)]
pub struct BloomConfigBuilder {
    n_items: Option<i64>,
    fp_prob: Option<f64>,
}

impl BloomConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expected number of items
    pub fn n_items(mut self, n_items: i64) -> Self {
        self.n_items = Some(n_items);
        self
    }

    /// Set the target false positive probability
    pub fn fp_prob(mut self, fp_prob: f64) -> Self {
        self.fp_prob = Some(fp_prob);
        self
    }

    /// Build the BloomConfig, validating all parameters
    pub fn build(self) -> Result<BloomConfig, FilterError> {
        let defaults = BloomConfig::default();

        BloomConfig::new(
            self.n_items.unwrap_or(defaults.n_items),
            self.fp_prob.unwrap_or(defaults.fp_prob),
        )
    }
}
