//! # Bitcache
//!
//! Content addressing for Bitcache: every piece of content is named by the
//! cryptographic digest of its bytes.
//!
//! ## Overview
//!
//! - **Identifiers**: fixed-width digests with hex, integer and
//!   Base62/Base94 forms and constant-time equality
//! - **Digest engine**: reusable per-algorithm hashing, streamed in chunks
//! - **Content blocks**: payloads whose identifier is computed once, lazily
//! - **`bit-id`**: a command-line tool that identifies files or stdin
//!
//! ## Usage
//!
//! ```rust
//! use bitcache::{Algorithm, ContentBlock, Identifier};
//!
//! let block = ContentBlock::new(Algorithm::Sha1, "abc");
//! let expected = Identifier::from_hex(
//!     Algorithm::Sha1,
//!     "a9993e364706816aba3e25717850c26c9cd0d89d",
//! )
//! .unwrap();
//! assert_eq!(block.identifier(), &expected);
//! ```
//!
//! ## Re-exports
//!
//! `bitcache::core` is the `bitcache-core` crate; its main types are also
//! re-exported at the top level.

pub mod cli;
pub mod error;
pub mod identify;

pub use bitcache_core as core;

pub use error::{BitcacheError, Result};
pub use identify::{identify_reader, identify_source, load_config, render, Identified, Source};

pub use bitcache_core::{
    hex_digest, Algorithm, BlockMetadata, ContentBlock, DigestEngine, Encoding, IdError,
    Identifier, IdentifierConfig, Identify, DEFAULT_CHUNK_SIZE,
};
