//! Content identifiers.
//!
//! An [`Identifier`] is the digest of some content, used as that content's
//! address. It holds exactly `algorithm.digest_length()` bytes and nothing
//! else; the algorithm is a construction-time parameter.

use bytes::{Buf, Bytes};
use num_bigint::BigUint;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::{self, Read};
use std::path::Path;
use subtle::ConstantTimeEq;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::algorithm::Algorithm;
use crate::digest::DigestEngine;
use crate::encoding::Encoding;
use crate::error::{IdError, Result};

/// Read size used when digesting streams.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// An immutable, fixed-width content identifier.
///
/// Equality runs in constant time over the digest bytes. Cloning is cheap:
/// the bytes are reference counted.
#[derive(Clone)]
pub struct Identifier(Bytes);

impl Identifier {
    /// Wrap a digest of the algorithm's exact width.
    pub fn from_bytes(algorithm: Algorithm, bytes: impl Into<Bytes>) -> Result<Self> {
        let bytes = bytes.into();
        let expected = algorithm.digest_length();
        if bytes.len() != expected {
            return Err(IdError::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes))
    }

    /// Parse a hex digest of the algorithm's exact width, in either case.
    pub fn from_hex(algorithm: Algorithm, s: &str) -> Result<Self> {
        let expected = algorithm.hex_length();
        let actual = s.chars().count();
        if actual != expected {
            return Err(IdError::InvalidLength { expected, actual });
        }
        Ok(Self(Bytes::from(hex::decode(s)?)))
    }

    /// Parse a hex digest, inferring the algorithm from its length.
    ///
    /// A length no algorithm produces fails with [`IdError::InvalidLength`],
    /// naming the closest supported width.
    pub fn parse(s: &str) -> Result<Self> {
        let len = s.chars().count();
        let inferred = (len % 2 == 0)
            .then(|| Algorithm::for_digest_length(len / 2))
            .flatten();
        match inferred {
            Some(algorithm) => Self::from_hex(algorithm, s),
            None => Err(IdError::InvalidLength {
                expected: Algorithm::ALL
                    .iter()
                    .map(Algorithm::hex_length)
                    .min_by_key(|width| width.abs_diff(len))
                    .unwrap_or(0),
                actual: len,
            }),
        }
    }

    /// Build an identifier from its integer value.
    ///
    /// The value is zero-padded to the algorithm's width. Values needing
    /// more than `8 * digest_length` bits fail with [`IdError::InvalidValue`].
    pub fn from_integer(algorithm: Algorithm, value: impl Into<BigUint>) -> Result<Self> {
        let value = value.into();
        let max_bits = (algorithm.digest_length() * 8) as u64;
        if value.bits() > max_bits {
            return Err(IdError::InvalidValue(format!(
                "{} bits exceed the {max_bits}-bit {algorithm} width",
                value.bits()
            )));
        }
        let width = algorithm.hex_length();
        Self::from_hex(algorithm, &format!("{value:0width$x}"))
    }

    /// Decode a string produced by [`Identifier::encode`].
    pub fn decode(algorithm: Algorithm, encoding: Encoding, s: &str) -> Result<Self> {
        Self::from_integer(algorithm, encoding.decode(s)?)
    }

    /// The all-zero identifier.
    pub fn zero(algorithm: Algorithm) -> Self {
        Self::filled(algorithm, 0)
    }

    /// An identifier with every byte set to `value`.
    pub fn filled(algorithm: Algorithm, value: u8) -> Self {
        Self(Bytes::from(vec![value; algorithm.digest_length()]))
    }

    /// Digest an in-memory byte sequence.
    pub fn digest(algorithm: Algorithm, data: &[u8]) -> Self {
        Self(DigestEngine::new(algorithm).digest(data))
    }

    /// Digest the remaining contents of a buffer, consuming it.
    pub fn digest_buf(algorithm: Algorithm, mut buf: impl Buf) -> Self {
        let mut engine = DigestEngine::new(algorithm);
        while buf.has_remaining() {
            let chunk = buf.chunk();
            let n = chunk.len();
            engine.update(chunk);
            buf.advance(n);
        }
        Self(engine.finalize())
    }

    /// Digest a readable stream until end of input.
    ///
    /// The stream is read in [`DEFAULT_CHUNK_SIZE`] pieces; its length need
    /// not be known. Read errors other than `Interrupted` are returned as-is.
    pub fn digest_reader<R: Read>(algorithm: Algorithm, reader: R) -> io::Result<Self> {
        Self::digest_reader_with_chunk_size(algorithm, reader, DEFAULT_CHUNK_SIZE)
    }

    /// Like [`Identifier::digest_reader`] with an explicit read size.
    pub fn digest_reader_with_chunk_size<R: Read>(
        algorithm: Algorithm,
        mut reader: R,
        chunk_size: usize,
    ) -> io::Result<Self> {
        let mut engine = DigestEngine::new(algorithm);
        let mut buf = vec![0u8; chunk_size.max(1)];
        let mut total = 0u64;
        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    engine.update(&buf[..n]);
                    total += n as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        tracing::debug!(algorithm = %algorithm, bytes = total, "digested stream");
        Ok(Self(engine.finalize()))
    }

    /// Digest the contents of a file.
    pub fn digest_file(algorithm: Algorithm, path: impl AsRef<Path>) -> io::Result<Self> {
        Self::digest_reader(algorithm, File::open(path)?)
    }

    /// Digest an asynchronous stream until end of input.
    pub async fn digest_async_reader<R: AsyncRead + Unpin>(
        algorithm: Algorithm,
        mut reader: R,
    ) -> io::Result<Self> {
        let mut engine = DigestEngine::new(algorithm);
        let mut buf = vec![0u8; DEFAULT_CHUNK_SIZE];
        let mut total = 0u64;
        loop {
            let n = reader.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            engine.update(&buf[..n]);
            total += n as u64;
        }
        tracing::debug!(algorithm = %algorithm, bytes = total, "digested async stream");
        Ok(Self(engine.finalize()))
    }

    /// Width of this identifier in bytes.
    pub fn digest_length(&self) -> usize {
        self.0.len()
    }

    /// The canonical binary form.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// A shared handle to the binary form.
    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }

    /// Lower-case hex, two characters per byte.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Big-endian unsigned integer value.
    pub fn to_big_uint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    /// Render the integer value in `encoding`.
    ///
    /// Base16 output here is unpadded; use [`Identifier::to_hex`] for the
    /// fixed-width canonical form.
    pub fn encode(&self, encoding: Encoding) -> String {
        encoding.encode(&self.to_big_uint())
    }

    /// True when every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

/// Digest `data` and return the hex form directly.
pub fn hex_digest(algorithm: Algorithm, data: &[u8]) -> String {
    Identifier::digest(algorithm, data).to_hex()
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_ref().ct_eq(other.0.as_ref()).into()
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(&self.0);
    }
}

impl PartialOrd for Identifier {
    /// Byte-wise order; identifiers of different widths are incomparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.0.len() != other.0.len() {
            return None;
        }
        Some(self.0.as_ref().cmp(other.0.as_ref()))
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Identifier {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

struct IdentifierVisitor;

impl IdentifierVisitor {
    fn from_raw<E: de::Error>(bytes: Vec<u8>) -> std::result::Result<Identifier, E> {
        let algorithm = Algorithm::for_digest_length(bytes.len()).ok_or_else(|| {
            E::custom(format!("no algorithm yields {}-byte digests", bytes.len()))
        })?;
        Identifier::from_bytes(algorithm, bytes).map_err(E::custom)
    }
}

impl<'de> Visitor<'de> for IdentifierVisitor {
    type Value = Identifier;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex digest string or digest bytes")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Identifier, E> {
        Identifier::parse(v).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> std::result::Result<Identifier, E> {
        Self::from_raw(v.to_vec())
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> std::result::Result<Identifier, E> {
        Self::from_raw(v)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Identifier, A::Error> {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        Self::from_raw(bytes)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(IdentifierVisitor)
        } else {
            deserializer.deserialize_bytes(IdentifierVisitor)
        }
    }
}
