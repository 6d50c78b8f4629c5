//! Poseidon2 Round-Constant CLI
//!
//! Generates round-constant artifacts and checks existing ones.

mod commands;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_artifacts, generate, list_presets, GenerateArgs};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "poseidon2-rc")]
#[command(about = "Deterministic Poseidon2 round-constant generator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate constant tables and write them as JSON artifacts
    Generate(GenerateArgs),
    /// Verify artifacts by re-deriving them (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
    /// List built-in parameter sets
    Presets,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Commands::Generate(args) => generate(args)?,
        Commands::Check { files } => check_artifacts(files)?,
        Commands::Presets => list_presets(),
    }

    Ok(())
}
