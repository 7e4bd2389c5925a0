//! Identifier configuration.

use serde::{Deserialize, Serialize};
use std::io;

use crate::algorithm::Algorithm;
use crate::error::{IdError, Result};
use crate::id::{Identifier, DEFAULT_CHUNK_SIZE};

/// Which algorithm to identify content with, and how to stream it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierConfig {
    /// Digest algorithm.
    pub algorithm: Algorithm,
    /// Read size used when digesting streams.
    pub chunk_size: usize,
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Sha1,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl IdentifierConfig {
    /// A config for `algorithm` with the default chunk size.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Set the streaming read size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Reject values no digest call could honor.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(IdError::InvalidConfig(
                "chunk_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Digest `data` with the configured algorithm.
    pub fn identify(&self, data: &[u8]) -> Identifier {
        Identifier::digest(self.algorithm, data)
    }

    /// Digest a stream with the configured algorithm and chunk size.
    pub fn identify_reader<R: io::Read>(&self, reader: R) -> io::Result<Identifier> {
        Identifier::digest_reader_with_chunk_size(self.algorithm, reader, self.chunk_size)
    }
}
