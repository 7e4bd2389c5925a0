//! # Bitcache Testkit
//!
//! Testing utilities for Bitcache.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Published digests for every supported algorithm
//! - **Generators**: Proptest strategies for identifiers and content
//! - **Fixtures**: Test doubles for the digest seam and for I/O
//!
//! ## Golden Vectors
//!
//! ```rust
//! use bitcache_testkit::vectors::{all_vectors, identify_vector};
//!
//! for vector in all_vectors() {
//!     assert_eq!(identify_vector(&vector).to_hex(), vector.expected_hex);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use bitcache_testkit::generators::IdentifyParams;
//!
//! proptest! {
//!     #[test]
//!     fn identifier_is_deterministic(params: IdentifyParams) {
//!         let a = Identifier::digest(params.algorithm, &params.content);
//!         let b = Identifier::digest(params.algorithm, &params.content);
//!         prop_assert_eq!(a, b);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use bitcache_core::ContentBlock;
//! use bitcache_testkit::fixtures::CountingHasher;
//!
//! let hasher = CountingHasher::default();
//! let block = ContentBlock::new(&hasher, "payload");
//! block.identifier();
//! block.identifier();
//! assert_eq!(hasher.calls(), 1);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{one_mib, pseudo_random_bytes, CountingHasher, TrickleReader};
pub use generators::IdentifyParams;
pub use vectors::{all_vectors, identify_vector, verify_all_vectors, GoldenVector};
