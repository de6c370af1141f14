//! Reads a file holding one SQLite JSONB blob and prints it as JSON.

use std::path::PathBuf;

use clap::Parser;
use sqlite_jsonb::limits::MAX_DEPTH;
use sqlite_jsonb::{DecodeError, DecodeOptions, decode_with_options};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jsonb-decode", about = "Decode a SQLite JSONB blob to JSON", version)]
struct Cli {
    /// File containing the raw JSONB bytes.
    path: PathBuf,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,

    /// Fail if bytes remain after the decoded value.
    #[arg(long)]
    strict: bool,

    /// Maximum array/object nesting depth.
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: usize,
}

impl Cli {
    fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            max_depth: self.max_depth,
            reject_trailing_bytes: self.strict,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("decoding: {0}")]
    Decode(#[from] DecodeError),

    #[error("serializing: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let data = std::fs::read(&cli.path).map_err(|source| CliError::Read {
        path: cli.path.clone(),
        source,
    })?;
    debug!(path = %cli.path.display(), len = data.len(), "read input");

    let json = render(&data, &cli.decode_options(), cli.pretty)?;
    println!("{json}");
    Ok(())
}

/// Decodes `data` and renders it as JSON text.
fn render(data: &[u8], options: &DecodeOptions, pretty: bool) -> Result<String, CliError> {
    let value = decode_with_options(data, options)?;
    let json = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
