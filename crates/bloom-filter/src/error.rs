//! Error types for the Bloom filter

use thiserror::Error;

/// Errors that can occur while constructing a Bloom filter
///
/// `add` and `query` are total over a constructed filter, so every error is
/// raised eagerly at construction or configuration time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),
}

impl FilterError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        FilterError::InvalidParameters(reason.into())
    }
}
