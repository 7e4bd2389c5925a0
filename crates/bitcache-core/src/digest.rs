//! The digest engine: a reusable wrapper around one hash algorithm.
//!
//! Every finalized digest is returned in a freshly allocated buffer. Two
//! results taken from the same engine never alias each other, so callers may
//! hold on to any number of them.

use bytes::Bytes;
use sha2::Digest;
use std::fmt;
use std::io;

use crate::algorithm::Algorithm;
use crate::error::Result;

/// Running hash state for one of the supported algorithms.
#[derive(Clone)]
enum HashState {
    Md5(md5::Md5),
    Sha1(sha1::Sha1),
    Sha224(sha2::Sha224),
    Sha256(sha2::Sha256),
    Sha384(sha2::Sha384),
    Sha512(sha2::Sha512),
    Blake3(Box<blake3::Hasher>),
}

impl HashState {
    fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Md5 => HashState::Md5(md5::Md5::new()),
            Algorithm::Sha1 => HashState::Sha1(sha1::Sha1::new()),
            Algorithm::Sha224 => HashState::Sha224(sha2::Sha224::new()),
            Algorithm::Sha256 => HashState::Sha256(sha2::Sha256::new()),
            Algorithm::Sha384 => HashState::Sha384(sha2::Sha384::new()),
            Algorithm::Sha512 => HashState::Sha512(sha2::Sha512::new()),
            Algorithm::Blake3 => HashState::Blake3(Box::new(blake3::Hasher::new())),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            HashState::Md5(h) => Digest::update(h, data),
            HashState::Sha1(h) => Digest::update(h, data),
            HashState::Sha224(h) => Digest::update(h, data),
            HashState::Sha256(h) => Digest::update(h, data),
            HashState::Sha384(h) => Digest::update(h, data),
            HashState::Sha512(h) => Digest::update(h, data),
            HashState::Blake3(h) => {
                h.update(data);
            }
        }
    }

    fn reset(&mut self) {
        match self {
            HashState::Md5(h) => Digest::reset(h),
            HashState::Sha1(h) => Digest::reset(h),
            HashState::Sha224(h) => Digest::reset(h),
            HashState::Sha256(h) => Digest::reset(h),
            HashState::Sha384(h) => Digest::reset(h),
            HashState::Sha512(h) => Digest::reset(h),
            HashState::Blake3(h) => {
                h.reset();
            }
        }
    }

    /// Finalize into a new buffer and leave the state ready for reuse.
    fn finalize_reset(&mut self) -> Vec<u8> {
        match self {
            HashState::Md5(h) => h.finalize_reset().to_vec(),
            HashState::Sha1(h) => h.finalize_reset().to_vec(),
            HashState::Sha224(h) => h.finalize_reset().to_vec(),
            HashState::Sha256(h) => h.finalize_reset().to_vec(),
            HashState::Sha384(h) => h.finalize_reset().to_vec(),
            HashState::Sha512(h) => h.finalize_reset().to_vec(),
            HashState::Blake3(h) => {
                let out = h.finalize().as_bytes().to_vec();
                h.reset();
                out
            }
        }
    }
}

/// A stateful digest engine bound to one algorithm.
///
/// Create once per algorithm and reuse across many digests. All
/// state-changing calls take `&mut self`; share an engine across threads
/// only behind a lock, or give each thread its own.
#[derive(Clone)]
pub struct DigestEngine {
    algorithm: Algorithm,
    state: HashState,
}

impl DigestEngine {
    /// Create an engine for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        tracing::trace!(algorithm = %algorithm, "creating digest engine");
        Self {
            algorithm,
            state: HashState::new(algorithm),
        }
    }

    /// Create an engine for the algorithm called `name`.
    ///
    /// Fails with [`IdError::UnsupportedAlgorithm`](crate::IdError::UnsupportedAlgorithm)
    /// when the name is not recognized.
    pub fn create(name: &str) -> Result<Self> {
        Ok(Self::new(Algorithm::from_name(name)?))
    }

    /// The algorithm this engine computes.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Length of every digest this engine produces, in bytes.
    pub fn output_length(&self) -> usize {
        self.algorithm.digest_length()
    }

    /// Discard any input fed since the last finalize.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Feed more input.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Finish the current digest and reset for the next one.
    pub fn finalize(&mut self) -> Bytes {
        let out = self.state.finalize_reset();
        debug_assert_eq!(out.len(), self.output_length());
        Bytes::from(out)
    }

    /// Reset, feed `data`, and finalize in one call.
    pub fn digest(&mut self, data: &[u8]) -> Bytes {
        self.reset();
        self.update(data);
        self.finalize()
    }
}

impl fmt::Debug for DigestEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigestEngine({})", self.algorithm)
    }
}

impl io::Write for DigestEngine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1_abc() {
        let mut engine = DigestEngine::create("SHA-1").unwrap();
        let digest = engine.digest(b"abc");
        assert_eq!(
            hex::encode(&digest),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn test_known_empty_digests() {
        let cases = [
            (Algorithm::Md5, "d41d8cd98f00b204e9800998ecf8427e"),
            (Algorithm::Sha1, "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
            (
                Algorithm::Sha256,
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            ),
            (
                Algorithm::Blake3,
                "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262",
            ),
        ];
        for (algorithm, expected) in cases {
            let mut engine = DigestEngine::new(algorithm);
            assert_eq!(hex::encode(engine.digest(b"")), expected, "{algorithm}");
        }
    }

    #[test]
    fn test_output_length_matches_algorithm() {
        for algorithm in Algorithm::ALL {
            let mut engine = DigestEngine::new(algorithm);
            assert_eq!(engine.digest(b"x").len(), algorithm.digest_length());
            assert_eq!(engine.output_length(), algorithm.digest_length());
        }
    }

    #[test]
    fn test_digest_resets_between_calls() {
        let mut engine = DigestEngine::new(Algorithm::Sha256);
        engine.update(b"stale input");
        let first = engine.digest(b"hello");
        let second = engine.digest(b"hello");
        assert_eq!(first, second);
    }

    #[test]
    fn test_results_do_not_alias() {
        let mut engine = DigestEngine::new(Algorithm::Sha1);
        let a = engine.digest(b"first");
        let b = engine.digest(b"second");
        assert_ne!(a, b);
        assert_eq!(a, DigestEngine::new(Algorithm::Sha1).digest(b"first"));
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let mut engine = DigestEngine::new(Algorithm::Sha512);
        engine.update(b"hello ");
        engine.update(b"world");
        let incremental = engine.finalize();
        assert_eq!(incremental, engine.digest(b"hello world"));
    }

    #[test]
    fn test_write_impl() {
        use std::io::Write;

        let mut engine = DigestEngine::new(Algorithm::Md5);
        engine.write_all(b"abc").unwrap();
        let written = engine.finalize();
        assert_eq!(hex::encode(written), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_unsupported_algorithm() {
        assert!(DigestEngine::create("CRC32").is_err());
    }
}
