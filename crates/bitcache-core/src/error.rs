//! Error types for the Bitcache core.

use thiserror::Error;

/// Errors raised while constructing or using identifiers and content blocks.
///
/// I/O failures during streamed digesting are not wrapped here; those paths
/// return [`std::io::Result`] so the caller sees the original error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// The requested hash algorithm is not available.
    #[error("unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A byte sequence or hex string does not match the algorithm's width.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A textual form contains characters outside its alphabet.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// An integer does not fit in the identifier's fixed width.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Content was requested from an identifier-only block.
    #[error("content block {0} carries no content")]
    MissingContent(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<hex::FromHexError> for IdError {
    fn from(e: hex::FromHexError) -> Self {
        IdError::InvalidEncoding(e.to_string())
    }
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, IdError>;
