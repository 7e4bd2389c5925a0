//! Identifying named byte sources: files and standard input.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use bitcache_core::{Encoding, Identifier, IdentifierConfig};
use serde::Serialize;

use crate::error::{BitcacheError, Result};

/// Where to read content from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input.
    Stdin,
    /// A file on disk.
    Path(PathBuf),
}

impl Source {
    /// Interpret a command-line operand; `-` means standard input.
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            Source::Stdin
        } else {
            Source::Path(arg.to_path_buf())
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("-"),
            Source::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

/// The outcome of identifying one source.
#[derive(Debug, Clone, Serialize)]
pub struct Identified {
    /// The source as given.
    pub source: String,
    /// Canonical identifier.
    pub id: Identifier,
    /// The identifier rendered in the requested encoding.
    pub encoded: String,
    /// Bytes read.
    pub size: u64,
}

/// Counts bytes as they pass through.
struct Counted<R> {
    inner: R,
    count: u64,
}

impl<R: Read> Read for Counted<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count += n as u64;
        Ok(n)
    }
}

/// Render an identifier; Base16 keeps the fixed-width canonical hex.
pub fn render(id: &Identifier, encoding: Encoding) -> String {
    match encoding {
        Encoding::Base16 => id.to_hex(),
        other => id.encode(other),
    }
}

/// Identify everything `reader` yields.
pub fn identify_reader<R: Read>(
    config: &IdentifierConfig,
    encoding: Encoding,
    name: &str,
    reader: R,
) -> Result<Identified> {
    let mut counted = Counted {
        inner: reader,
        count: 0,
    };
    let id = config
        .identify_reader(&mut counted)
        .map_err(|error| BitcacheError::Io {
            source_name: name.to_string(),
            error,
        })?;
    tracing::debug!(source = name, id = %id, size = counted.count, "identified");
    Ok(Identified {
        source: name.to_string(),
        encoded: render(&id, encoding),
        id,
        size: counted.count,
    })
}

/// Identify one source.
pub fn identify_source(
    config: &IdentifierConfig,
    encoding: Encoding,
    source: &Source,
) -> Result<Identified> {
    let name = source.to_string();
    match source {
        Source::Stdin => identify_reader(config, encoding, &name, io::stdin().lock()),
        Source::Path(path) => {
            let file = File::open(path).map_err(|error| BitcacheError::Io {
                source_name: name.clone(),
                error,
            })?;
            identify_reader(config, encoding, &name, file)
        }
    }
}

/// Load an [`IdentifierConfig`] from a JSON file.
pub fn load_config(path: &Path) -> Result<IdentifierConfig> {
    let text = std::fs::read_to_string(path).map_err(|e| BitcacheError::Config {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let config: IdentifierConfig =
        serde_json::from_str(&text).map_err(|e| BitcacheError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcache_core::Algorithm;
    use std::io::Write;

    #[test]
    fn test_dash_is_stdin() {
        assert_eq!(Source::from_arg(Path::new("-")), Source::Stdin);
        assert_eq!(
            Source::from_arg(Path::new("a.txt")),
            Source::Path(PathBuf::from("a.txt"))
        );
    }

    #[test]
    fn test_identify_reader_counts_bytes() {
        let config = IdentifierConfig::default();
        let out = identify_reader(&config, Encoding::Base16, "mem", &b"abc"[..]).unwrap();
        assert_eq!(out.encoded, "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(out.size, 3);
        assert_eq!(out.source, "mem");
    }

    #[test]
    fn test_render_base16_keeps_width() {
        let id = Identifier::from_integer(Algorithm::Sha1, 1u8).unwrap();
        assert_eq!(render(&id, Encoding::Base16).len(), 40);
        assert_eq!(render(&id, Encoding::Base62), "1");
    }

    #[test]
    fn test_missing_file_names_source() {
        let source = Source::Path(PathBuf::from("/nonexistent/bitcache-input"));
        let err = identify_source(&IdentifierConfig::default(), Encoding::Base16, &source)
            .unwrap_err();
        match err {
            BitcacheError::Io { source_name, error } => {
                assert_eq!(source_name, "/nonexistent/bitcache-input");
                assert_eq!(error.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"algorithm": "SHA-256", "chunk_size": 512}}"#).unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.algorithm, Algorithm::Sha256);
        assert_eq!(config.chunk_size, 512);
    }

    #[test]
    fn test_load_config_rejects_zero_chunk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"chunk_size": 0}}"#).unwrap();
        assert!(matches!(
            load_config(file.path()),
            Err(BitcacheError::Id(_))
        ));
    }
}
