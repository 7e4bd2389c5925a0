//! The `bit-id` command: identify a byte stream or file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use bitcache_core::{Algorithm, Encoding, IdentifierConfig};
use clap::Parser;

use crate::identify::{identify_source, load_config, Identified, Source};

/// Identify a byte stream or file.
///
/// Prints one `<identifier>  <source>` line per input. With no inputs, or
/// with `-`, standard input is read.
#[derive(Parser, Debug)]
#[command(name = "bit-id", version, about, long_about = None)]
pub struct Cli {
    /// Files to identify.
    pub files: Vec<PathBuf>,

    /// Digest algorithm (e.g. SHA-1, SHA-256, BLAKE3).
    #[arg(short, long, env = "BITCACHE_ALGORITHM")]
    pub algorithm: Option<Algorithm>,

    /// Read size used when streaming input.
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// JSON configuration file; flags override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output encoding: base16, base62 or base94.
    #[arg(short, long, default_value = "base16")]
    pub encoding: Encoding,

    /// Print results as a JSON array.
    #[arg(long)]
    pub json: bool,

    /// Enable debug output for troubleshooting.
    #[arg(short, long)]
    pub debug: bool,

    /// Enable verbose output. May be given more than once.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The log filter directive implied by `--debug` and `-v`.
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            return "debug";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Merge the config file (if any) with command-line overrides.
    pub fn identifier_config(&self) -> anyhow::Result<IdentifierConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => IdentifierConfig::default(),
        };
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(chunk_size) = self.chunk_size {
            config.chunk_size = chunk_size;
        }
        config.validate()?;
        Ok(config)
    }

    fn sources(&self) -> Vec<Source> {
        if self.files.is_empty() {
            vec![Source::Stdin]
        } else {
            self.files.iter().map(|f| Source::from_arg(f)).collect()
        }
    }
}

/// Run the command, writing results to `out`.
///
/// Every source is attempted; failures are logged and reported through the
/// returned flag, which is `true` only if all sources were identified.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<bool> {
    let config = cli.identifier_config()?;
    tracing::info!(algorithm = %config.algorithm, encoding = %cli.encoding, "identifying");

    let mut results: Vec<Identified> = Vec::new();
    let mut all_ok = true;
    for source in cli.sources() {
        match identify_source(&config, cli.encoding, &source) {
            Ok(identified) => {
                if !cli.json {
                    writeln!(out, "{}  {}", identified.encoded, identified.source)?;
                }
                results.push(identified);
            }
            Err(e) => {
                tracing::error!("{e}");
                all_ok = false;
            }
        }
    }

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &results).context("writing JSON output")?;
        writeln!(out)?;
    }
    Ok(all_ok)
}
