//! Digest algorithm registry.
//!
//! Algorithms are selected by name at construction time ("SHA-1",
//! "sha256", "BLAKE3", ...). There is no process-wide default: callers pass
//! an [`Algorithm`] (or an [`IdentifierConfig`](crate::IdentifierConfig))
//! explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{IdError, Result};

/// The largest digest produced by any supported algorithm, in bytes.
pub const MAX_DIGEST_LENGTH: usize = 64;

/// A supported cryptographic hash algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Blake3,
}

impl Algorithm {
    /// Every supported algorithm, in registry order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Blake3,
    ];

    /// Resolve an algorithm by name.
    ///
    /// Matching ignores ASCII case, dashes and underscores, so `"SHA-1"`,
    /// `"sha1"` and `"Sha_1"` all resolve to [`Algorithm::Sha1`].
    pub fn from_name(name: &str) -> Result<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match normalized.as_str() {
            "MD5" => Ok(Algorithm::Md5),
            "SHA1" => Ok(Algorithm::Sha1),
            "SHA224" => Ok(Algorithm::Sha224),
            "SHA256" => Ok(Algorithm::Sha256),
            "SHA384" => Ok(Algorithm::Sha384),
            "SHA512" => Ok(Algorithm::Sha512),
            "BLAKE3" => Ok(Algorithm::Blake3),
            _ => Err(IdError::UnsupportedAlgorithm(name.to_string())),
        }
    }

    /// The canonical name of this algorithm.
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha224 => "SHA-224",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha384 => "SHA-384",
            Algorithm::Sha512 => "SHA-512",
            Algorithm::Blake3 => "BLAKE3",
        }
    }

    /// Digest output length in bytes.
    pub const fn digest_length(&self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha224 => 28,
            Algorithm::Sha256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
            Algorithm::Blake3 => 32,
        }
    }

    /// Length of the hex form of a digest, in characters.
    pub const fn hex_length(&self) -> usize {
        self.digest_length() * 2
    }

    /// The first registered algorithm producing digests of `len` bytes.
    ///
    /// SHA-256 and BLAKE3 share a width; SHA-256 wins.
    pub fn for_digest_length(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.digest_length() == len)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for Algorithm {
    type Error = IdError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_name(&s)
    }
}

impl From<Algorithm> for String {
    fn from(a: Algorithm) -> Self {
        a.name().to_string()
    }
}
