//! # Bitcache Core
//!
//! The identifier layer of Bitcache: content is addressed by its
//! cryptographic digest.
//!
//! This crate performs no I/O of its own beyond reading the streams and
//! files it is asked to identify.
//!
//! ## Key Types
//!
//! - [`Algorithm`] - Named digest algorithm (SHA-1 by configuration default)
//! - [`DigestEngine`] - Reusable reset/update/finalize wrapper
//! - [`Identifier`] - Fixed-width content address with constant-time equality
//! - [`ContentBlock`] - Payload plus lazily computed identifier
//! - [`Encoding`] - Base16/Base62/Base94 renderings of identifier values
//!
//! ## Usage
//!
//! ```rust
//! use bitcache_core::{Algorithm, Identifier};
//!
//! let id = Identifier::digest(Algorithm::Sha1, b"abc");
//! assert_eq!(id.to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
//!
//! let parsed = Identifier::from_hex(Algorithm::Sha1, &id.to_hex()).unwrap();
//! assert_eq!(parsed, id);
//! ```

pub mod algorithm;
pub mod block;
pub mod config;
pub mod digest;
pub mod encoding;
pub mod error;
pub mod id;

pub use algorithm::{Algorithm, MAX_DIGEST_LENGTH};
pub use block::{BlockMetadata, ContentBlock, Identify, OCTET_STREAM};
pub use config::IdentifierConfig;
pub use digest::DigestEngine;
pub use encoding::Encoding;
pub use error::{IdError, Result};
pub use id::{hex_digest, Identifier, DEFAULT_CHUNK_SIZE};
