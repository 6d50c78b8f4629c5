//! Check Command
//!
//! Verify artifacts by re-deriving each table from its echoed config
//! (like sha256sum -c).

use anyhow::{bail, Context, Result};
use poseidon2_rc::ConstantTable;
use rayon::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

// =============================================================================
// CHECK
// =============================================================================

/// Verify every artifact; fails if any does not match.
pub fn check_artifacts(files: &[PathBuf]) -> Result<()> {
    // Checked in parallel, reported in argument order.
    let outcomes: Vec<Result<bool>> = files.par_iter().map(|path| check_file(path)).collect();

    let total = files.len();
    let mut failed = 0;

    for (path, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Ok(true) => println!("{}: OK", path.display()),
            Ok(false) => {
                println!("{}: FAILED", path.display());
                failed += 1;
            }
            Err(e) => {
                println!("{}: FAILED ({e:#})", path.display());
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} artifacts verified");
    } else {
        bail!("{failed} of {total} artifacts did NOT match");
    }

    Ok(())
}

/// `Ok(true)` if the artifact equals a fresh build of its own config.
fn check_file(path: &Path) -> Result<bool> {
    let file =
        File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    let table: ConstantTable =
        serde_json::from_reader(BufReader::new(file)).context("Malformed artifact")?;

    if !table.is_well_formed() {
        debug!(label = %table.label, "artifact shape or range invalid");
        return Ok(false);
    }

    Ok(poseidon2_rc::verify_table(&table)?)
}
