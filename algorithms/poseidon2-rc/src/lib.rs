//! # Poseidon2 Round Constants
//!
//! Deterministic derivation of the round-constant matrix consumed by a
//! Poseidon2 permutation over a given prime field and state width.
//!
//! Constants are drawn from a 256-bit Fibonacci LFSR seeded with the SHA-256
//! digest of a domain-separated description of the parameter set. Output is
//! bit-exact reproducible: the same `PermutationConfig` always yields the same
//! `ConstantTable`.

//! # Usage
//! ```rust
//! use poseidon2_rc::{build_table, PermutationConfig};
//!
//! let config = PermutationConfig::new(
//!     "goldilocks",
//!     "0xFFFFFFFF00000001",
//!     12,
//!     8,
//!     26,
//!     "poseidon2_goldilocks_t12",
//! )?;
//!
//! let table = build_table(&config)?;
//! assert_eq!(table.total_rounds, 34);
//! assert_eq!(table.round_constants[0][0], "0xdf1a9d6908a569a1");
//! # Ok::<(), poseidon2_rc::ConfigError>(())
//! ```
//!
//! # Sampling bias
//!
//! Field elements are sampled as `word mod p` over a 64-bit LFSR word. This
//! is biased toward small residues whenever `p` does not divide `2^64`, and is
//! kept that way for compatibility with existing constant sets. Callers that
//! need uniform sampling opt in with [`SamplingMode::Rejection`], which yields
//! a different (incompatible) table.

// =============================================================================
// MODULES
// =============================================================================

mod builder;
pub mod lfsr;
mod presets;
mod prime;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use builder::{
    build_table, build_table_with, build_tables, build_tables_with, format_element, parse_element,
    verify_table, ConstantTableBuilder, SamplingMode,
};
pub use lfsr::{GrainLfsr, Register, SeedDigest, Sha256Digest};
pub use presets::{preset, presets, Preset, GOLDILOCKS_T12, PRESETS};
pub use prime::Prime;
pub use types::{ConfigError, ConstantTable, PermutationConfig, SEED_DOMAIN};
