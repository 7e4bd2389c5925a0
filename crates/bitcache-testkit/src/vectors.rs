//! Golden test vectors for deterministic verification.
//!
//! Published digests (FIPS 180 / RFC 1321 / the BLAKE3 reference) for short
//! messages. Every algorithm in the registry has at least one vector.

use bitcache_core::{Algorithm, Identifier};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Algorithm under test.
    pub algorithm: Algorithm,
    /// Message bytes.
    pub input: &'static [u8],
    /// Expected identifier (hex).
    pub expected_hex: &'static str,
}

const NIST_448: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "SHA-1 abc",
            algorithm: Algorithm::Sha1,
            input: b"abc",
            expected_hex: "a9993e364706816aba3e25717850c26c9cd0d89d",
        },
        GoldenVector {
            name: "SHA-1 empty",
            algorithm: Algorithm::Sha1,
            input: b"",
            expected_hex: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        },
        GoldenVector {
            name: "SHA-1 448-bit message",
            algorithm: Algorithm::Sha1,
            input: NIST_448,
            expected_hex: "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
        },
        GoldenVector {
            name: "MD5 abc",
            algorithm: Algorithm::Md5,
            input: b"abc",
            expected_hex: "900150983cd24fb0d6963f7d28e17f72",
        },
        GoldenVector {
            name: "MD5 empty",
            algorithm: Algorithm::Md5,
            input: b"",
            expected_hex: "d41d8cd98f00b204e9800998ecf8427e",
        },
        GoldenVector {
            name: "SHA-224 abc",
            algorithm: Algorithm::Sha224,
            input: b"abc",
            expected_hex: "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
        },
        GoldenVector {
            name: "SHA-256 abc",
            algorithm: Algorithm::Sha256,
            input: b"abc",
            expected_hex: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        },
        GoldenVector {
            name: "SHA-256 448-bit message",
            algorithm: Algorithm::Sha256,
            input: NIST_448,
            expected_hex: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
        },
        GoldenVector {
            name: "SHA-384 abc",
            algorithm: Algorithm::Sha384,
            input: b"abc",
            expected_hex: "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
                           8086072ba1e7cc2358baeca134c825a7",
        },
        GoldenVector {
            name: "SHA-512 abc",
            algorithm: Algorithm::Sha512,
            input: b"abc",
            expected_hex: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
                           2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        },
        GoldenVector {
            name: "BLAKE3 abc",
            algorithm: Algorithm::Blake3,
            input: b"abc",
            expected_hex: "6437b3ac38465133ffb63b75273a8db548c558465d79db03fd359c6cd5bd9d85",
        },
        GoldenVector {
            name: "BLAKE3 empty",
            algorithm: Algorithm::Blake3,
            input: b"",
            expected_hex: "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262",
        },
    ]
}

/// Identify the vector's input with its algorithm.
pub fn identify_vector(vector: &GoldenVector) -> Identifier {
    Identifier::digest(vector.algorithm, vector.input)
}

/// Check every vector; returns `(name, matches, actual_hex)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let hex = identify_vector(v).to_hex();
            let matches = hex == v.expected_hex;
            (v.name.to_string(), matches, hex)
        })
        .collect()
}
