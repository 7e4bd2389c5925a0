//! Test fixtures and helpers.
//!
//! Test doubles for the seams of the core: a call-counting [`Identify`]
//! implementation and readers with awkward behavior.

use std::io::{self, Read};
use std::sync::atomic::{AtomicUsize, Ordering};

use bitcache_core::{Algorithm, Identifier, Identify};
use rand::{rngs::StdRng, RngCore, SeedableRng};

/// An [`Identify`] double that counts its calls.
#[derive(Debug)]
pub struct CountingHasher {
    algorithm: Algorithm,
    calls: AtomicUsize,
}

impl CountingHasher {
    /// Count calls while digesting with `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many identifiers have been computed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for CountingHasher {
    fn default() -> Self {
        Self::new(Algorithm::Sha1)
    }
}

impl Identify for CountingHasher {
    fn identify(&self, content: &[u8]) -> Identifier {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Identifier::digest(self.algorithm, content)
    }
}

/// Deterministic pseudo-random bytes.
pub fn pseudo_random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    StdRng::seed_from_u64(seed).fill_bytes(&mut data);
    data
}

/// One mebibyte of deterministic pseudo-random bytes.
pub fn one_mib(seed: u64) -> Vec<u8> {
    pseudo_random_bytes(seed, 1 << 20)
}

/// A reader that hands out at most `max_read` bytes per call and reports
/// `Interrupted` before every other read.
pub struct TrickleReader<'a> {
    data: &'a [u8],
    max_read: usize,
    interrupt_next: bool,
}

impl<'a> TrickleReader<'a> {
    pub fn new(data: &'a [u8], max_read: usize) -> Self {
        Self {
            data,
            max_read: max_read.max(1),
            interrupt_next: true,
        }
    }
}

impl Read for TrickleReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt_next {
            self.interrupt_next = false;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        self.interrupt_next = true;
        let n = buf.len().min(self.max_read).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}
