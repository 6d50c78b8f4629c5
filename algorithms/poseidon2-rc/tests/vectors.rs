//! Reference Test Vectors
//!
//! Verifies the generator against the canonical JSON vectors and the recorded
//! goldilocks artifact.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use poseidon2_rc::{
    build_table, build_table_with, ConstantTable, GrainLfsr, PermutationConfig, Register,
    SamplingMode, GOLDILOCKS_T12,
};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Deserialize)]
struct LfsrVector {
    name: String,
    register: String,
    words: Vec<String>,
}

#[derive(Deserialize)]
struct TableVector {
    name: String,
    field: String,
    prime: String,
    t: usize,
    #[serde(rename = "roundsF")]
    rounds_f: usize,
    #[serde(rename = "roundsP")]
    rounds_p: usize,
    first_row: Vec<String>,
    last_row: Vec<String>,
}

#[derive(Deserialize)]
struct TestVectors {
    lfsr: Vec<LfsrVector>,
    tables: Vec<TableVector>,
    rejection: Vec<TableVector>,
}

fn load_vectors() -> TestVectors {
    let file = File::open("tests/test_vectors.json").expect("Failed to open test_vectors.json");
    serde_json::from_reader(BufReader::new(file)).expect("Failed to parse JSON")
}

fn register_from_hex(hex_str: &str) -> Register {
    let bytes: [u8; 32] = hex::decode(hex_str.trim_start_matches("0x"))
        .expect("register hex")
        .try_into()
        .expect("register must be 32 bytes");
    Register::from_be_bytes(&bytes)
}

fn config_of(vector: &TableVector) -> PermutationConfig {
    PermutationConfig::new(
        vector.field.as_str(),
        &vector.prime,
        vector.t,
        vector.rounds_f,
        vector.rounds_p,
        vector.name.as_str(),
    )
    .expect("vector config must be valid")
}

// =============================================================================
// LFSR WORDS
// =============================================================================

#[test]
fn test_lfsr_word_vectors() {
    for vector in load_vectors().lfsr {
        let mut lfsr = GrainLfsr::from_register(register_from_hex(&vector.register));
        let words: Vec<String> = (0..vector.words.len())
            .map(|_| format!("0x{:016x}", lfsr.next_u64()))
            .collect();
        assert_eq!(words, vector.words, "LFSR vector mismatched: {}", vector.name);
    }
}

// =============================================================================
// TABLE ROWS
// =============================================================================

#[test]
fn test_reference_table_vectors() {
    println!("\n=== Verifying Reference Tables ===");
    for vector in load_vectors().tables {
        let table = build_table(&config_of(&vector)).unwrap();

        assert_eq!(table.rows(), vector.rounds_f + vector.rounds_p);
        assert_eq!(table.round_constants[0], vector.first_row, "{}", vector.name);
        assert_eq!(
            table.round_constants.last().unwrap(),
            &vector.last_row,
            "{}",
            vector.name
        );
        println!("✅ {:<16} | {}", vector.name, table.round_constants[0][0]);
    }
}

#[test]
fn test_rejection_table_vectors() {
    for vector in load_vectors().rejection {
        let table = build_table_with(&config_of(&vector), SamplingMode::Rejection).unwrap();

        assert_eq!(table.round_constants[0], vector.first_row, "{}", vector.name);
        assert_eq!(
            table.round_constants.last().unwrap(),
            &vector.last_row,
            "{}",
            vector.name
        );
    }
}

#[test]
fn test_goldilocks_first_row() {
    let table = build_table(&GOLDILOCKS_T12.config().unwrap()).unwrap();

    assert_eq!(
        table.round_constants[0],
        [
            "0xdf1a9d6908a569a1",
            "0xd60336620e6733d4",
            "0xd3ad8f882f5bd967",
            "0xb845423d1ea61a3d",
            "0x96f1182ac87910b5",
            "0x3c422183fcfa352e",
            "0x426526d37d541d01",
            "0x3257e7511594fca3",
            "0x04352662e2727e37",
            "0xe9aa9822d44bcd3f",
            "0x9feab5087b13a565",
            "0xb98bec3dfbf7ff30",
        ]
    );
}

// =============================================================================
// RECORDED ARTIFACT
// =============================================================================

#[test]
fn test_goldilocks_artifact_matches() {
    let recorded = std::fs::read_to_string("tests/data/poseidon2_goldilocks_t12.json")
        .expect("Failed to read recorded artifact");
    let expected: ConstantTable = serde_json::from_str(&recorded).unwrap();

    let table = build_table(&GOLDILOCKS_T12.config().unwrap()).unwrap();
    assert_eq!(table, expected);
    assert_eq!(table.rows(), 34);
    assert!(table.round_constants.iter().all(|row| row.len() == 12));

    // Byte-identical pretty JSON, 2-space indent.
    let rendered = serde_json::to_string_pretty(&table).unwrap();
    assert_eq!(rendered, recorded.trim_end());
}
