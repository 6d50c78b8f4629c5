//! Grain-style LFSR
//!
//! A 256-bit Fibonacci shift register with taps at bits 0, 2, 5, 10 and 255
//! (bit 0 least significant). Each step outputs the current bit 0, shifts the
//! register right by one and inserts the XOR of the taps at bit 255.
//!
//! The tap set, the shift direction, the output-before-shift order and the
//! seeding rule together define the constant stream. Changing any of them
//! changes every downstream constant.

use crate::prime::Prime;
use core::fmt;
use sha2::{Digest, Sha256};

/// Register width in bits.
pub const REGISTER_BITS: usize = 256;

/// Feedback tap positions.
pub const TAPS: [usize; 5] = [0, 2, 5, 10, 255];

/// Bits drawn per field element.
pub const WORD_BITS: u32 = 64;

const LIMBS: usize = REGISTER_BITS / 64;

// =============================================================================
// REGISTER
// =============================================================================

/// 256-bit register stored as little-endian `u64` limbs.
///
/// There is no storage above bit 255, so the value is masked to 256 bits by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Register([u64; LIMBS]);

impl Register {
    /// All-zero register (a fixed point of the feedback function).
    pub const ZERO: Self = Self([0; LIMBS]);
    /// Register holding the value 1.
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// Build from limbs, limb 0 least significant.
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        Self(limbs)
    }

    /// Interpret 32 bytes as a big-endian 256-bit integer.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u64; LIMBS];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.rchunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(word);
        }
        Self(limbs)
    }

    /// Big-endian byte representation.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (chunk, limb) in bytes.rchunks_exact_mut(8).zip(self.0) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    /// Limbs, limb 0 least significant.
    pub const fn limbs(&self) -> [u64; LIMBS] {
        self.0
    }

    /// Bit at `index` (0 = least significant).
    ///
    /// # Panics
    /// Panics if `index >= 256`.
    pub const fn bit(&self, index: usize) -> bool {
        (self.0[index / 64] >> (index % 64)) & 1 == 1
    }

    /// `true` if every bit is clear.
    pub const fn is_zero(&self) -> bool {
        self.0[0] == 0 && self.0[1] == 0 && self.0[2] == 0 && self.0[3] == 0
    }

    /// Logical right shift by one, with `top` entering at bit 255.
    fn shift_in(&mut self, top: bool) {
        for i in 0..LIMBS - 1 {
            self.0[i] = (self.0[i] >> 1) | (self.0[i + 1] << 63);
        }
        self.0[LIMBS - 1] = (self.0[LIMBS - 1] >> 1) | (u64::from(top) << 63);
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_be_bytes()))
    }
}

// =============================================================================
// SEED DIGEST
// =============================================================================

/// 256-bit digest used to turn seed bytes into an initial register.
pub trait SeedDigest {
    /// Digest `input` to 32 bytes.
    fn digest(&self, input: &[u8]) -> [u8; 32];
}

/// SHA-256, the reference seed digest.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Digest;

impl SeedDigest for Sha256Digest {
    fn digest(&self, input: &[u8]) -> [u8; 32] {
        Sha256::digest(input).into()
    }
}

// =============================================================================
// GENERATOR
// =============================================================================

/// Deterministic bit stream over a 256-bit register.
///
/// Every call mutates the register; there is no other state. The stream is
/// unbounded, and the type doubles as an infinite `Iterator<Item = bool>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrainLfsr {
    register: Register,
}

impl GrainLfsr {
    /// Seed from `seed` via SHA-256.
    pub fn from_seed(seed: &[u8]) -> Self {
        Self::from_seed_with(&Sha256Digest, seed)
    }

    /// Seed from `seed` via an arbitrary digest.
    pub fn from_seed_with<D: SeedDigest + ?Sized>(digest: &D, seed: &[u8]) -> Self {
        Self::from_register(Register::from_be_bytes(&digest.digest(seed)))
    }

    /// Start from an explicit register. Zero is remapped to one.
    pub const fn from_register(register: Register) -> Self {
        let register = if register.is_zero() {
            Register::ONE
        } else {
            register
        };
        Self { register }
    }

    /// Current register contents.
    pub const fn register(&self) -> Register {
        self.register
    }

    /// Advance one step and return bit 0 as it was before the shift.
    #[inline]
    pub fn next_bit(&mut self) -> bool {
        let out = self.register.bit(0);
        let feedback = TAPS
            .iter()
            .fold(false, |acc, &tap| acc ^ self.register.bit(tap));
        self.register.shift_in(feedback);
        out
    }

    /// Pack `width` bits into a word, first bit at position 0.
    ///
    /// # Panics
    /// Panics if `width > 64`.
    pub fn next_word(&mut self, width: u32) -> u64 {
        assert!(width <= u64::BITS, "word width {width} exceeds 64 bits");
        let mut word = 0u64;
        for i in 0..width {
            word |= u64::from(self.next_bit()) << i;
        }
        word
    }

    /// Next full 64-bit word.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.next_word(WORD_BITS)
    }

    /// One field element: a 64-bit word reduced modulo `prime`.
    ///
    /// Plain reduction, biased toward small residues unless `prime` divides
    /// `2^64`. See [`crate::SamplingMode`].
    pub fn next_field_element(&mut self, prime: &Prime) -> u64 {
        prime.reduce(self.next_u64())
    }
}

impl Iterator for GrainLfsr {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        Some(self.next_bit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
