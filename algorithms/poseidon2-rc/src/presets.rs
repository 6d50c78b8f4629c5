//! Built-in parameter sets.

use crate::types::{ConfigError, PermutationConfig};

/// A static parameter set. Turned into a validated config on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Field identifier.
    pub field: &'static str,
    /// Prime literal exactly as it enters the seed.
    pub prime: &'static str,
    /// State width.
    pub t: usize,
    /// Full rounds.
    pub rounds_f: usize,
    /// Partial rounds.
    pub rounds_p: usize,
    /// Output name.
    pub label: &'static str,
}

impl Preset {
    /// Validated config for this preset.
    ///
    /// # Errors
    /// Returns `ConfigError` if the preset is malformed.
    pub fn config(&self) -> Result<PermutationConfig, ConfigError> {
        PermutationConfig::new(
            self.field,
            self.prime,
            self.t,
            self.rounds_f,
            self.rounds_p,
            self.label,
        )
    }
}

/// Goldilocks (`p = 2^64 - 2^32 + 1`), width 12.
pub const GOLDILOCKS_T12: Preset = Preset {
    field: "goldilocks",
    prime: "0xFFFFFFFF00000001",
    t: 12,
    rounds_f: 8,
    rounds_p: 26,
    label: "poseidon2_goldilocks_t12",
};

/// Every built-in preset, in generation order.
pub const PRESETS: &[Preset] = &[GOLDILOCKS_T12];

/// All presets as validated configs.
///
/// # Errors
/// Returns `ConfigError` if any preset is malformed.
pub fn presets() -> Result<Vec<PermutationConfig>, ConfigError> {
    PRESETS.iter().map(Preset::config).collect()
}

/// Look up a preset by label.
pub fn preset(label: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.label == label)
}
