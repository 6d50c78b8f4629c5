//! Generator for round-constant test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! Covers raw LFSR words from fixed registers and the first/last rows of
//! tables for several fields, in both sampling modes.
#![allow(clippy::unwrap_used)]
use poseidon2_rc::{build_table_with, GrainLfsr, PermutationConfig, Register, SamplingMode};
use serde_json::{json, Value};

const BN254: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

fn lfsr_vector(name: &str, register: Register) -> Value {
    let mut lfsr = GrainLfsr::from_register(register);
    let words: Vec<String> = (0..8)
        .map(|_| format!("0x{:016x}", lfsr.next_u64()))
        .collect();
    json!({
        "name": name,
        "register": register.to_string(),
        "words": words
    })
}

fn table_vector(
    name: &str,
    field: &str,
    prime: &str,
    (t, rounds_f, rounds_p): (usize, usize, usize),
    mode: SamplingMode,
) -> Value {
    let config = PermutationConfig::new(field, prime, t, rounds_f, rounds_p, name).unwrap();
    let table = build_table_with(&config, mode).unwrap();
    json!({
        "name": name,
        "field": field,
        "prime": prime,
        "t": t,
        "roundsF": rounds_f,
        "roundsP": rounds_p,
        "first_row": table.round_constants.first(),
        "last_row": table.round_constants.last()
    })
}

fn main() {
    // =========================================================================
    // 1. LFSR WORDS
    // =========================================================================

    let lfsr = vec![
        // Single low bit: the first 256 bits replay it, then feedback takes over
        lfsr_vector("one", Register::ONE),
        // Dense pattern touching every limb and every tap
        lfsr_vector(
            "pattern",
            Register::from_limbs([
                0x8796_a5b4_c3d2_e1f0,
                0x0f1e_2d3c_4b5a_6978,
                0xfedc_ba98_7654_3210,
                0x0123_4567_89ab_cdef,
            ]),
        ),
        // Only the top tap set
        lfsr_vector("top_bit", Register::from_limbs([0, 0, 0, 1 << 63])),
        // Zero is remapped to one
        lfsr_vector("zero_remapped", Register::ZERO),
    ];

    // =========================================================================
    // 2. REFERENCE TABLES
    // =========================================================================

    let reduction = SamplingMode::Reduction;
    let tables = vec![
        table_vector("goldilocks_t12", "goldilocks", "0xFFFFFFFF00000001", (12, 8, 26), reduction),
        table_vector("goldilocks_t8", "goldilocks", "0xFFFFFFFF00000001", (8, 8, 22), reduction),
        table_vector("babybear_t16", "babybear", "2013265921", (16, 8, 13), reduction),
        table_vector("mersenne31_t16", "mersenne31", "0x7fffffff", (16, 8, 14), reduction),
        // Wider than 64 bits: elements are raw words
        table_vector("bn254_t3", "bn254", BN254, (3, 8, 56), reduction),
    ];

    // =========================================================================
    // 3. REJECTION SAMPLING
    // =========================================================================

    let rejection = SamplingMode::Rejection;
    let rejected = vec![
        table_vector("goldilocks_t12", "goldilocks", "0xFFFFFFFF00000001", (12, 8, 26), rejection),
        table_vector("babybear_t16", "babybear", "2013265921", (16, 8, 13), rejection),
    ];

    let output = json!({ "lfsr": lfsr, "tables": tables, "rejection": rejected });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
