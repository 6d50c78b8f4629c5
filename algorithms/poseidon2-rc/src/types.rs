//! Shared types: permutation parameters, generated tables and errors.

use crate::prime::Prime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Leading tag of every seed string.
pub const SEED_DOMAIN: &str = "Poseidon2";

// =============================================================================
// PERMUTATION CONFIG
// =============================================================================

/// Parameter set of one Poseidon2 instance.
///
/// Serializes with the keys `field`, `prime`, `t`, `roundsF`, `roundsP`,
/// `label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermutationConfig {
    /// Field identifier, e.g. `goldilocks`.
    pub field: String,
    /// Field modulus, literal preserved.
    pub prime: Prime,
    /// State width (field elements per row).
    pub t: usize,
    /// Number of full rounds.
    #[serde(rename = "roundsF")]
    pub rounds_f: usize,
    /// Number of partial rounds.
    #[serde(rename = "roundsP")]
    pub rounds_p: usize,
    /// Output name. Not part of the seed.
    pub label: String,
}

impl PermutationConfig {
    /// Create and validate a config.
    ///
    /// # Errors
    /// Returns `ConfigError` if the prime literal is invalid, `t == 0`, or
    /// `rounds_f + rounds_p` is zero or overflows.
    pub fn new(
        field: impl Into<String>,
        prime: &str,
        t: usize,
        rounds_f: usize,
        rounds_p: usize,
        label: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            field: field.into(),
            prime: Prime::parse(prime)?,
            t,
            rounds_f,
            rounds_p,
            label: label.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the shape invariants. The prime is valid by construction.
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroWidth`, `ConfigError::ZeroRounds` or
    /// `ConfigError::RoundsOverflow`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.t == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        match self.total_rounds() {
            None => Err(ConfigError::RoundsOverflow),
            Some(0) => Err(ConfigError::ZeroRounds),
            Some(_) => Ok(()),
        }
    }

    /// `rounds_f + rounds_p`, or `None` if the sum overflows `usize`.
    pub const fn total_rounds(&self) -> Option<usize> {
        self.rounds_f.checked_add(self.rounds_p)
    }

    /// Seed bytes: `Poseidon2|<field>|t=<t>|p=<prime literal>`.
    pub fn seed_material(&self) -> Vec<u8> {
        format!(
            "{SEED_DOMAIN}|{}|t={}|p={}",
            self.field,
            self.t,
            self.prime.literal()
        )
        .into_bytes()
    }
}

// =============================================================================
// CONSTANT TABLE
// =============================================================================

/// Round-constant matrix for one config, plus the echoed parameters.
///
/// `round_constants[round][index]` is `0x` followed by 16 lowercase hex
/// digits, always below `prime`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantTable {
    /// Field identifier.
    pub field: String,
    /// Field modulus, literal preserved.
    pub prime: Prime,
    /// State width.
    pub t: usize,
    /// Number of full rounds.
    #[serde(rename = "roundsF")]
    pub rounds_f: usize,
    /// Number of partial rounds.
    #[serde(rename = "roundsP")]
    pub rounds_p: usize,
    /// `rounds_f + rounds_p`; also the number of rows.
    #[serde(rename = "totalRounds")]
    pub total_rounds: usize,
    /// Output name.
    pub label: String,
    /// Row-major matrix, `total_rounds` rows of `t` entries.
    #[serde(rename = "roundConstants")]
    pub round_constants: Vec<Vec<String>>,
}

impl ConstantTable {
    /// Recover the config this table claims to have been built from.
    pub fn config(&self) -> PermutationConfig {
        PermutationConfig {
            field: self.field.clone(),
            prime: self.prime.clone(),
            t: self.t,
            rounds_f: self.rounds_f,
            rounds_p: self.rounds_p,
            label: self.label.clone(),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.round_constants.len()
    }

    /// Hex string at `(round, index)`.
    pub fn get(&self, round: usize, index: usize) -> Option<&str> {
        self.round_constants
            .get(round)
            .and_then(|row| row.get(index))
            .map(String::as_str)
    }

    /// Numeric value at `(round, index)`.
    pub fn element(&self, round: usize, index: usize) -> Option<u64> {
        self.get(round, index).and_then(crate::parse_element)
    }

    /// `true` if the matrix is `total_rounds x t` and every entry is a
    /// well-formed element below `prime`.
    pub fn is_well_formed(&self) -> bool {
        Some(self.total_rounds) == self.rounds_f.checked_add(self.rounds_p)
            && self.rows() == self.total_rounds
            && self.round_constants.iter().all(|row| {
                row.len() == self.t
                    && row.iter().all(|hex| {
                        crate::parse_element(hex).is_some_and(|value| self.prime.contains(value))
                    })
            })
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Rejected configuration. Raised before any generator state exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `t` was zero.
    #[error("state width t must be positive")]
    ZeroWidth,
    /// `roundsF + roundsP` was zero.
    #[error("total rounds (roundsF + roundsP) must be positive")]
    ZeroRounds,
    /// `roundsF + roundsP` does not fit in `usize`.
    #[error("total rounds (roundsF + roundsP) overflows")]
    RoundsOverflow,
    /// Prime literal was the empty string.
    #[error("prime literal is empty")]
    EmptyPrime,
    /// Prime literal was not a non-negative integer.
    #[error("prime literal '{0}' is not a non-negative integer")]
    InvalidPrimeLiteral(String),
    /// Prime literal does not fit in 256 bits.
    #[error("prime literal '{0}' is wider than 256 bits")]
    PrimeTooWide(String),
    /// Prime was 0 or 1.
    #[error("prime '{0}' must be greater than 1")]
    PrimeTooSmall(String),
}
