//! Golden and end-to-end tests for the identifier layer.
//!
//! Every implementation of Bitcache must produce the same identifiers for
//! the same bytes; these vectors pin that down.

use std::ffi::OsStr;
use std::io::Write;

use bitcache::cli::{run, Cli};
use bitcache::{Algorithm, ContentBlock, Encoding, IdError, Identifier};
use bitcache_testkit::{all_vectors, identify_vector, one_mib, CountingHasher};
use clap::Parser;

const ABC_SHA1: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";

fn parse(args: &[&OsStr]) -> Cli {
    Cli::try_parse_from(std::iter::once(OsStr::new("bit-id")).chain(args.iter().copied())).unwrap()
}

#[test]
fn golden_vectors_match() {
    for vector in all_vectors() {
        let id = identify_vector(&vector);
        assert_eq!(id.to_hex(), vector.expected_hex, "{}", vector.name);
        assert_eq!(id.digest_length(), vector.algorithm.digest_length());
    }
}

#[test]
fn golden_vectors_survive_every_path() {
    for vector in all_vectors() {
        let digested = identify_vector(&vector);
        let parsed = Identifier::from_hex(vector.algorithm, vector.expected_hex).unwrap();
        let wrapped = Identifier::from_bytes(vector.algorithm, parsed.to_bytes()).unwrap();
        let numeric = Identifier::from_integer(vector.algorithm, digested.to_big_uint()).unwrap();
        let streamed = Identifier::digest_reader(vector.algorithm, vector.input).unwrap();

        for other in [&parsed, &wrapped, &numeric, &streamed] {
            assert_eq!(&digested, other, "{}", vector.name);
            assert_eq!(other, &digested, "{}", vector.name);
        }
    }
}

#[test]
fn abc_through_a_content_block() {
    let hasher = CountingHasher::new(Algorithm::Sha1);
    let block = ContentBlock::new(&hasher, "abc");

    assert_eq!(block.identifier().to_hex(), ABC_SHA1);
    assert_eq!(block.identifier().to_hex(), ABC_SHA1);
    assert_eq!(hasher.calls(), 1);
    assert_eq!(block.size().unwrap(), 3);
}

#[test]
fn identifier_only_block_has_no_content() {
    let id = Identifier::from_hex(Algorithm::Sha1, ABC_SHA1).unwrap();
    let block = ContentBlock::identified(Algorithm::Sha1, id);
    assert!(matches!(block.content(), Err(IdError::MissingContent(_))));
}

#[test]
fn streaming_one_mib_matches_whole_buffer() {
    let data = one_mib(42);
    let whole = Identifier::digest(Algorithm::Sha1, &data);
    let streamed = Identifier::digest_reader(Algorithm::Sha1, &data[..]).unwrap();
    assert_eq!(whole, streamed);
}

#[test]
fn cli_identifies_files() {
    let mut a = tempfile::NamedTempFile::new().unwrap();
    a.write_all(b"abc").unwrap();
    let b = tempfile::NamedTempFile::new().unwrap();

    let cli = parse(&[a.path().as_os_str(), b.path().as_os_str()]);
    let mut out = Vec::new();
    assert!(run(&cli, &mut out).unwrap());

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("{ABC_SHA1}  {}", a.path().display()));
    assert!(lines[1].starts_with("da39a3ee5e6b4b0d3255bfef95601890afd80709  "));
}

#[test]
fn cli_json_with_base62() {
    let mut a = tempfile::NamedTempFile::new().unwrap();
    a.write_all(b"abc").unwrap();

    let cli = parse(&[
        OsStr::new("--json"),
        OsStr::new("-e"),
        OsStr::new("base62"),
        a.path().as_os_str(),
    ]);
    let mut out = Vec::new();
    assert!(run(&cli, &mut out).unwrap());

    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let entry = &parsed[0];
    assert_eq!(entry["id"], ABC_SHA1);
    assert_eq!(entry["size"], 3);

    let encoded = entry["encoded"].as_str().unwrap();
    let back = Identifier::decode(Algorithm::Sha1, Encoding::Base62, encoded).unwrap();
    assert_eq!(back.to_hex(), ABC_SHA1);
}

#[test]
fn cli_reports_missing_files_but_continues() {
    let mut a = tempfile::NamedTempFile::new().unwrap();
    a.write_all(b"abc").unwrap();

    let cli = parse(&[OsStr::new("/nonexistent/bitcache-input"), a.path().as_os_str()]);
    let mut out = Vec::new();
    assert!(!run(&cli, &mut out).unwrap());
    assert!(String::from_utf8(out).unwrap().starts_with(ABC_SHA1));
}
