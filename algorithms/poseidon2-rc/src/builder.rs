//! Constant Table Builder
//!
//! Fills the `total_rounds x t` matrix row-major from one LFSR per config.

use crate::lfsr::{GrainLfsr, SeedDigest, Sha256Digest, WORD_BITS};
use crate::prime::Prime;
use crate::types::{ConfigError, ConstantTable, PermutationConfig};
use tracing::{debug, debug_span, warn};

#[cfg(feature = "multithread")]
use rayon::prelude::*;

// =============================================================================
// SAMPLING MODE
// =============================================================================

/// How a 64-bit LFSR word becomes a field element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SamplingMode {
    /// `word mod p`. The reference construction; biased toward small residues.
    #[default]
    Reduction,
    /// Redraw until `word` is below the largest multiple of `p` that fits in
    /// 64 bits, then reduce. Uniform, but NOT compatible with reference
    /// constants.
    Rejection,
}

impl SamplingMode {
    /// Stable lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reduction => "reduction",
            Self::Rejection => "rejection",
        }
    }

    /// Draw one field element from `lfsr`.
    pub fn sample(self, lfsr: &mut GrainLfsr, prime: &Prime) -> u64 {
        match self {
            Self::Reduction => lfsr.next_field_element(prime),
            Self::Rejection => {
                let bound = prime.rejection_bound();
                loop {
                    let word = lfsr.next_u64();
                    if bound.is_none_or(|bound| word < bound) {
                        return prime.reduce(word);
                    }
                }
            }
        }
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Builds the constant table for one config.
///
/// # Example
/// ```rust
/// use poseidon2_rc::{ConstantTableBuilder, PermutationConfig, SamplingMode};
///
/// let config = PermutationConfig::new("babybear", "2013265921", 16, 8, 13, "bb16")?;
/// let table = ConstantTableBuilder::new(&config)
///     .sampling(SamplingMode::Rejection)
///     .build()?;
/// assert_eq!(table.rows(), 21);
/// # Ok::<(), poseidon2_rc::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConstantTableBuilder<'a> {
    config: &'a PermutationConfig,
    mode: SamplingMode,
}

impl<'a> ConstantTableBuilder<'a> {
    /// Builder in reference (`Reduction`) mode.
    pub const fn new(config: &'a PermutationConfig) -> Self {
        Self {
            config,
            mode: SamplingMode::Reduction,
        }
    }

    /// Select the sampling mode.
    #[must_use]
    pub const fn sampling(mut self, mode: SamplingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build with the SHA-256 seed digest.
    ///
    /// # Errors
    /// Returns `ConfigError` if the config is invalid.
    pub fn build(&self) -> Result<ConstantTable, ConfigError> {
        self.build_with_digest(&Sha256Digest)
    }

    /// Build with a caller-supplied seed digest.
    ///
    /// # Errors
    /// Returns `ConfigError` if the config is invalid. Validation happens
    /// before the generator is seeded.
    pub fn build_with_digest<D: SeedDigest + ?Sized>(
        &self,
        digest: &D,
    ) -> Result<ConstantTable, ConfigError> {
        let config = self.config;
        config.validate()?;

        let total_rounds = config
            .total_rounds()
            .ok_or(ConfigError::RoundsOverflow)?;
        let _span = debug_span!(
            "build_table",
            label = %config.label,
            t = config.t,
            rounds = total_rounds,
            sampling = self.mode.name(),
        )
        .entered();

        if config.prime.bits() > WORD_BITS {
            warn!(
                label = %config.label,
                prime_bits = config.prime.bits(),
                "prime is wider than {WORD_BITS} bits; elements cover only [0, 2^{WORD_BITS})"
            );
        }

        let mut lfsr = GrainLfsr::from_seed_with(digest, &config.seed_material());
        debug!(seed = %lfsr.register(), "lfsr seeded");

        // Sizes come from untrusted configs; grow instead of preallocating.
        let mut round_constants = Vec::new();
        for _ in 0..total_rounds {
            let mut row = Vec::new();
            for _ in 0..config.t {
                row.push(format_element(self.mode.sample(&mut lfsr, &config.prime)));
            }
            round_constants.push(row);
        }

        Ok(ConstantTable {
            field: config.field.clone(),
            prime: config.prime.clone(),
            t: config.t,
            rounds_f: config.rounds_f,
            rounds_p: config.rounds_p,
            total_rounds,
            label: config.label.clone(),
            round_constants,
        })
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Build the reference table for `config`.
///
/// # Errors
/// Returns `ConfigError` if the config is invalid.
pub fn build_table(config: &PermutationConfig) -> Result<ConstantTable, ConfigError> {
    ConstantTableBuilder::new(config).build()
}

/// Build the table for `config` with an explicit sampling mode.
///
/// # Errors
/// Returns `ConfigError` if the config is invalid.
pub fn build_table_with(
    config: &PermutationConfig,
    mode: SamplingMode,
) -> Result<ConstantTable, ConfigError> {
    ConstantTableBuilder::new(config).sampling(mode).build()
}

/// Build reference tables for every config, in input order.
///
/// # Errors
/// Returns the first `ConfigError` encountered.
pub fn build_tables(configs: &[PermutationConfig]) -> Result<Vec<ConstantTable>, ConfigError> {
    build_tables_with(configs, SamplingMode::Reduction)
}

/// Build tables for every config with an explicit sampling mode.
///
/// Configs are independent; with the `multithread` feature they are built in
/// parallel. Output order always matches input order.
///
/// # Errors
/// Returns a `ConfigError` if any config is invalid.
pub fn build_tables_with(
    configs: &[PermutationConfig],
    mode: SamplingMode,
) -> Result<Vec<ConstantTable>, ConfigError> {
    #[cfg(feature = "multithread")]
    let configs = configs.par_iter();
    #[cfg(not(feature = "multithread"))]
    let configs = configs.iter();

    configs
        .map(|config| build_table_with(config, mode))
        .collect()
}

/// Re-derive `table` from its echoed config and compare.
///
/// Only reference-mode tables verify.
///
/// # Errors
/// Returns `ConfigError` if the echoed config is invalid.
pub fn verify_table(table: &ConstantTable) -> Result<bool, ConfigError> {
    let expected = build_table(&table.config())?;
    Ok(expected == *table)
}

// =============================================================================
// FORMATTING
// =============================================================================

/// `0x` followed by 16 lowercase, zero-padded hex digits.
pub fn format_element(value: u64) -> String {
    format!("0x{value:016x}")
}

/// Inverse of [`format_element`]. Strict: rejects any other shape.
pub fn parse_element(hex: &str) -> Option<u64> {
    let digits = hex.strip_prefix("0x")?;
    if digits.len() != 16
        || !digits
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_format_is_fixed_width() {
        assert_eq!(format_element(0), "0x0000000000000000");
        assert_eq!(format_element(0xabc), "0x0000000000000abc");
        assert_eq!(format_element(u64::MAX), "0xffffffffffffffff");
    }

    #[test]
    fn element_parse_is_strict() {
        assert_eq!(parse_element("0x04352662e2727e37"), Some(0x0435_2662_e272_7e37));
        assert_eq!(parse_element("0x4352662e2727e37"), None);
        assert_eq!(parse_element("0x04352662E2727E37"), None);
        assert_eq!(parse_element("04352662e2727e37"), None);
        assert_eq!(parse_element("0x+4352662e2727e37"), None);
    }

    #[test]
    fn sampling_names() {
        assert_eq!(SamplingMode::default(), SamplingMode::Reduction);
        assert_eq!(SamplingMode::Reduction.name(), "reduction");
        assert_eq!(SamplingMode::Rejection.name(), "rejection");
    }
}
