//! Domain Layer - Pure logic
//!
//! This layer contains:
//! - Core Bloom filter implementation
//! - Seeded hash family
//! - Parameter derivation
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod membership;
pub mod parameters;

pub use bloom_filter::BloomFilter;
pub use config::{BloomConfig, BloomConfigBuilder};
pub use membership::Membership;
pub use parameters::{calculate_fpr, derive_parameters, BloomFilterParams};
