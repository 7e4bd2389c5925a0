//! Error types for the Bitcache facade.

use bitcache_core::IdError;
use thiserror::Error;

/// Errors that can occur while identifying named sources.
#[derive(Debug, Error)]
pub enum BitcacheError {
    /// Identifier or configuration error from the core.
    #[error(transparent)]
    Id(#[from] IdError),

    /// Reading a source failed.
    #[error("{source_name}: {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    /// A configuration file could not be loaded.
    #[error("config {path}: {reason}")]
    Config { path: String, reason: String },
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, BitcacheError>;
