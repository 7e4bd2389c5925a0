//! Proptest generators for property-based testing.

use proptest::prelude::*;

use bitcache_core::{Algorithm, Identifier};

/// Generate any supported algorithm.
pub fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

/// Generate raw digest bytes of the algorithm's width.
pub fn digest_bytes(algorithm: Algorithm) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), algorithm.digest_length())
}

/// Generate an identifier for `algorithm` from arbitrary bytes.
pub fn identifier(algorithm: Algorithm) -> impl Strategy<Value = Identifier> {
    digest_bytes(algorithm).prop_map(move |bytes| {
        Identifier::from_bytes(algorithm, bytes).expect("generated at digest width")
    })
}

/// Generate a lower-case hex string of the algorithm's width.
pub fn hex_string(algorithm: Algorithm) -> impl Strategy<Value = String> {
    digest_bytes(algorithm).prop_map(hex::encode)
}

/// Generate content bytes of at most `max_len`.
pub fn content(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// An algorithm with content to identify.
#[derive(Debug, Clone)]
pub struct IdentifyParams {
    pub algorithm: Algorithm,
    pub content: Vec<u8>,
    pub chunk_size: usize,
}

impl Arbitrary for IdentifyParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (algorithm(), content(8192), 1usize..=5000)
            .prop_map(|(algorithm, content, chunk_size)| IdentifyParams {
                algorithm,
                content,
                chunk_size,
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcache_core::Encoding;

    proptest! {
        #[test]
        fn test_stream_and_slice_agree(params: IdentifyParams) {
            let whole = Identifier::digest(params.algorithm, &params.content);
            let streamed = Identifier::digest_reader_with_chunk_size(
                params.algorithm,
                &params.content[..],
                params.chunk_size,
            )
            .unwrap();
            prop_assert_eq!(whole, streamed);
        }

        #[test]
        fn test_hex_roundtrip_any_algorithm(
            (algorithm, hex) in algorithm().prop_flat_map(|a| (Just(a), hex_string(a)))
        ) {
            let id = Identifier::from_hex(algorithm, &hex).unwrap();
            prop_assert_eq!(id.to_hex(), hex);
        }

        #[test]
        fn test_equality_across_paths(id in identifier(Algorithm::Sha1)) {
            let via_hex = Identifier::from_hex(Algorithm::Sha1, &id.to_hex()).unwrap();
            let via_int = Identifier::from_integer(Algorithm::Sha1, id.to_big_uint()).unwrap();
            prop_assert_eq!(&id, &via_hex);
            prop_assert_eq!(&via_hex, &via_int);
            prop_assert_eq!(&id, &via_int);
        }

        #[test]
        fn test_base62_roundtrip(id in identifier(Algorithm::Sha256)) {
            let text = id.encode(Encoding::Base62);
            let back = Identifier::decode(Algorithm::Sha256, Encoding::Base62, &text).unwrap();
            prop_assert_eq!(back, id);
        }

        #[test]
        fn test_distinct_content_distinct_ids(a in content(256), b in content(256)) {
            prop_assume!(a != b);
            prop_assert_ne!(
                Identifier::digest(Algorithm::Sha1, &a),
                Identifier::digest(Algorithm::Sha1, &b)
            );
        }
    }
}
