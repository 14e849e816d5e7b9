//! The command-line shell around the uqpack library: encode a JSON payload,
//! print the frame, then decode it back as a round-trip check. The library
//! itself never logs; size statistics are emitted here at debug level
//! (enable with `RUST_LOG=debug`).

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::debug;
use serde_json::Value;

use uqpack::{decode_json, encode_json, CompressionKind, EncodeOptions};

#[derive(Parser)]
#[command(name = "uqpack", version, about = "Pack JSON into a compact, URL-safe string")]
struct Cli {
    /// The JSON payload to encode
    json: String,

    /// Compression to apply
    #[arg(value_enum, default_value_t = CompressionArg::Lz4)]
    compression: CompressionArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CompressionArg {
    None,
    Lz4,
    Zstd,
    Brotli,
}

impl std::fmt::Display for CompressionArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CompressionArg::None => "none",
            CompressionArg::Lz4 => "lz4",
            CompressionArg::Zstd => "zstd",
            CompressionArg::Brotli => "brotli",
        };
        f.write_str(name)
    }
}

impl From<CompressionArg> for CompressionKind {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => CompressionKind::None,
            CompressionArg::Lz4 => CompressionKind::Lz4,
            CompressionArg::Zstd => CompressionKind::Zstd,
            CompressionArg::Brotli => CompressionKind::Brotli,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(&cli.json)?;

    let options = EncodeOptions {
        compression: cli.compression.into(),
        ..EncodeOptions::default()
    };
    let encoded = encode_json(&value, &options)?;

    let json_len = cli.json.len();
    debug!(
        "encoded {} bytes of JSON into {} URL characters ({:.1}%) using {}",
        json_len,
        encoded.len(),
        100.0 * encoded.len() as f64 / json_len.max(1) as f64,
        cli.compression
    );
    println!("Encoded string: {encoded}");

    let decoded = decode_json(&encoded)?;
    println!("Decoded data: {decoded}");

    Ok(())
}
