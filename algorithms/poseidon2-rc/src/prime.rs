//! Prime Modulus
//!
//! A field modulus kept in two forms: the exact literal it was written as
//! (which feeds the seed) and its numeric value as 256-bit little-endian limbs.

use crate::types::ConfigError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Number of 64-bit limbs backing a prime value.
const LIMBS: usize = 4;

// =============================================================================
// PRIME
// =============================================================================

/// Field modulus `p` with its literal representation preserved verbatim.
///
/// Accepts `0x`/`0X`-prefixed hexadecimal or plain decimal literals of up to
/// 256 bits. Two primes with the same value but different literals (e.g.
/// `0xFFFFFFFF00000001` and `0xffffffff00000001`) are distinct, because the
/// literal is part of the seed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Prime {
    literal: String,
    limbs: [u64; LIMBS],
}

impl Prime {
    /// Parse a prime literal.
    ///
    /// Primality is not checked.
    ///
    /// # Errors
    /// Returns `ConfigError` if the literal is empty, not a non-negative
    /// integer, wider than 256 bits, or not greater than 1.
    pub fn parse(literal: &str) -> Result<Self, ConfigError> {
        if literal.is_empty() {
            return Err(ConfigError::EmptyPrime);
        }

        let limbs = match literal
            .strip_prefix("0x")
            .or_else(|| literal.strip_prefix("0X"))
        {
            Some(digits) => parse_limbs(digits, 16, literal)?,
            None => parse_limbs(literal, 10, literal)?,
        };

        if limbs[1..].iter().all(|&limb| limb == 0) && limbs[0] <= 1 {
            return Err(ConfigError::PrimeTooSmall(literal.to_owned()));
        }

        Ok(Self {
            literal: literal.to_owned(),
            limbs,
        })
    }

    /// The literal exactly as supplied.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u32 {
        let mut bits = 256;
        for &limb in self.limbs.iter().rev() {
            if limb != 0 {
                return bits - limb.leading_zeros();
            }
            bits -= 64;
        }
        0
    }

    /// The modulus as a `u64`, if it fits.
    pub fn as_u64(&self) -> Option<u64> {
        if self.limbs[1..].iter().all(|&limb| limb == 0) {
            Some(self.limbs[0])
        } else {
            None
        }
    }

    /// `true` if `value` is a canonical field element (`value < p`).
    pub fn contains(&self, value: u64) -> bool {
        self.as_u64().is_none_or(|p| value < p)
    }

    /// Reduce a 64-bit word modulo `p`.
    ///
    /// For moduli wider than 64 bits every word is already below `p` and is
    /// returned unchanged.
    pub fn reduce(&self, word: u64) -> u64 {
        self.as_u64().map_or(word, |p| word % p)
    }

    /// Exclusive upper bound for unbiased rejection sampling of 64-bit words.
    ///
    /// This is the largest multiple of `p` not exceeding `2^64`. Returns `None`
    /// when every word is acceptable (`p` divides `2^64`, or `p > 2^64`).
    pub fn rejection_bound(&self) -> Option<u64> {
        let p = self.as_u64()?;
        // 2^64 mod p, computed without leaving u64.
        let rem = ((u64::MAX % p) + 1) % p;
        if rem == 0 {
            None
        } else {
            Some(u64::MAX - rem + 1)
        }
    }
}

/// Accumulate `digits` in `radix` into little-endian limbs.
#[allow(clippy::cast_possible_truncation)]
fn parse_limbs(digits: &str, radix: u32, literal: &str) -> Result<[u64; LIMBS], ConfigError> {
    if digits.is_empty() {
        return Err(ConfigError::InvalidPrimeLiteral(literal.to_owned()));
    }

    let mut limbs = [0u64; LIMBS];
    for c in digits.chars() {
        let digit = c
            .to_digit(radix)
            .ok_or_else(|| ConfigError::InvalidPrimeLiteral(literal.to_owned()))?;

        let mut carry = u128::from(digit);
        for limb in &mut limbs {
            let acc = u128::from(*limb) * u128::from(radix) + carry;
            *limb = acc as u64;
            carry = acc >> 64;
        }

        if carry != 0 {
            return Err(ConfigError::PrimeTooWide(literal.to_owned()));
        }
    }

    Ok(limbs)
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl FromStr for Prime {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Prime {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Prime> for String {
    fn from(prime: Prime) -> Self {
        prime.literal
    }
}

impl fmt::Display for Prime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}
