//! CLI Commands
//!
//! All poseidon2-rc CLI commands organized as separate modules.

mod check;
mod generate;

pub use check::check_artifacts;
pub use generate::{generate, list_presets, GenerateArgs};
