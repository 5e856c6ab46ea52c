//! A small command-line wrapper around the library's hashing facade.
//!
//! `<prog> 256|384|512 [-k] <path>`: exit 0 with `<hex_digest>  <path>` on
//! stdout; exit 1 on a usage error; exit 2 on any filesystem failure.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use fips202::{hash_buffer, Mode};

#[derive(Parser)]
#[command(name = "sha3sum", disable_version_flag = true)]
struct Cli {
    /// Digest size in bits: 256, 384, or 512.
    size: String,

    /// Use the original Keccak padding (0x01) instead of FIPS 202 SHA-3 (0x06).
    #[arg(short = 'k')]
    keccak: bool,

    /// File to hash.
    path: PathBuf,
}

fn usage() {
    eprintln!("To call: sha3sum 256|384|512 [-k] file_path.");
}

fn run(bits: u32, mode: Mode, path: &PathBuf) -> anyhow::Result<()> {
    log::debug!("hashing {} bits={bits} mode={mode:?}", path.display());

    let data = std::fs::read(path)
        .with_context(|| format!("cannot read file '{}'", path.display()))?;

    let digest_bytes = (bits / 8) as usize;
    let mut digest = vec![0u8; digest_bytes];
    hash_buffer(bits, mode, &data, &mut digest)
        .expect("bits and buffer length were validated against the canonical digest sizes above");

    println!("{}  {}", hex::encode(&digest), path.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            usage();
            return ExitCode::from(1);
        }
    };

    let bits: u32 = match cli.size.parse() {
        Ok(256) => 256,
        Ok(384) => 384,
        Ok(512) => 512,
        _ => {
            usage();
            return ExitCode::from(1);
        }
    };
    let mode = if cli.keccak { Mode::Keccak } else { Mode::Sha3 };

    match run(bits, mode, &cli.path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            eprintln!("{err:#}");
            ExitCode::from(2)
        }
    }
}
