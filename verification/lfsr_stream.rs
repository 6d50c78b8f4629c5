//! # `PractRand` Stream Generator
//!
//! Streams raw LFSR output for statistical testing.
//!
//! This binary seeds the round-constant LFSR exactly as table generation does
//! and writes successive 64-bit words (little-endian) to stdout until the
//! reader goes away or the byte limit is reached.
//!
//! ```text
//! lfsr_stream | RNG_test stdin64
//! ```

use anyhow::{anyhow, Result};
use clap::Parser;
use poseidon2_rc::GrainLfsr;
use std::io::{self, Write};

/// Command-line options for the stream generator.
#[derive(Parser)]
#[command(name = "lfsr_stream")]
#[command(about = "Raw LFSR byte stream for statistical test suites", long_about = None)]
struct Args {
    /// Preset whose seed drives the stream
    #[arg(long, default_value = "poseidon2_goldilocks_t12")]
    preset: String,

    /// Arbitrary seed string (SHA-256 seeded) instead of a preset
    #[arg(long, conflicts_with = "preset")]
    seed: Option<String>,

    /// Stop after this many bytes (unbounded by default)
    #[arg(long)]
    bytes: Option<u64>,
}

/// Entry point for the LFSR stream generator.
fn main() -> Result<()> {
    let args = Args::parse();

    let seed = match &args.seed {
        Some(seed) => seed.as_bytes().to_vec(),
        None => poseidon2_rc::preset(&args.preset)
            .ok_or_else(|| anyhow!("Unknown preset: {}", args.preset))?
            .config()?
            .seed_material(),
    };
    let mut lfsr = GrainLfsr::from_seed(&seed);

    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());
    let mut written: u64 = 0;

    loop {
        let word = lfsr.next_u64().to_le_bytes();

        // Trim the final word to honour the byte limit
        let take = match args.bytes {
            Some(limit) if written >= limit => break,
            Some(limit) => usize::try_from(limit - written).map_or(word.len(), |n| n.min(word.len())),
            None => word.len(),
        };

        if handle.write_all(&word[..take]).is_err() {
            break;
        }
        written += take as u64;
    }

    // A closed pipe on flush is the normal way for the reader to stop us.
    let _ = handle.flush();
    Ok(())
}
