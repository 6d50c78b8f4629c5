//! Config Serialization Tests
//!
//! JSON shape of configs and tables, and literal preservation of primes.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use poseidon2_rc::{build_table, preset, ConstantTable, PermutationConfig, GOLDILOCKS_T12};
use serde_json::{json, Value};

#[test]
fn test_config_json_keys() {
    let config: PermutationConfig = serde_json::from_value(json!({
        "field": "goldilocks",
        "prime": "0xFFFFFFFF00000001",
        "t": 12,
        "roundsF": 8,
        "roundsP": 26,
        "label": "poseidon2_goldilocks_t12"
    }))
    .unwrap();

    assert_eq!(config, GOLDILOCKS_T12.config().unwrap());
    assert_eq!(config.total_rounds(), Some(34));
}

#[test]
fn test_prime_literal_preserved() {
    let config: PermutationConfig = serde_json::from_value(json!({
        "field": "goldilocks",
        "prime": "0XfFfFfFfF00000001",
        "t": 12,
        "roundsF": 8,
        "roundsP": 26,
        "label": "mixed_case"
    }))
    .unwrap();

    assert_eq!(config.prime.literal(), "0XfFfFfFfF00000001");
    let encoded = serde_json::to_value(&config).unwrap();
    assert_eq!(encoded["prime"], "0XfFfFfFfF00000001");
    assert!(config
        .seed_material()
        .ends_with(b"|p=0XfFfFfFfF00000001"));
}

#[test]
fn test_invalid_prime_rejected_on_load() {
    let result: Result<PermutationConfig, _> = serde_json::from_value(json!({
        "field": "f",
        "prime": "not-a-number",
        "t": 3,
        "roundsF": 1,
        "roundsP": 1,
        "label": "bad"
    }));
    let message = result.unwrap_err().to_string();
    assert!(message.contains("not a non-negative integer"), "{message}");

    let numeric: Result<PermutationConfig, _> = serde_json::from_value(json!({
        "field": "f",
        "prime": 7,
        "t": 3,
        "roundsF": 1,
        "roundsP": 1,
        "label": "bad"
    }));
    assert!(numeric.is_err(), "prime must be a string literal");
}

#[test]
fn test_table_json_shape() {
    let table = build_table(&GOLDILOCKS_T12.config().unwrap()).unwrap();
    let value = serde_json::to_value(&table).unwrap();

    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    for key in [
        "field",
        "prime",
        "t",
        "roundsF",
        "roundsP",
        "totalRounds",
        "label",
        "roundConstants",
    ] {
        assert!(keys.contains(&key), "missing key {key}");
    }
    assert_eq!(keys.len(), 8);

    assert_eq!(value["totalRounds"], 34);
    assert_eq!(value["prime"], "0xFFFFFFFF00000001");
    let rows = value["roundConstants"].as_array().unwrap();
    assert_eq!(rows.len(), 34);
    assert!(rows
        .iter()
        .all(|row| matches!(row, Value::Array(entries) if entries.len() == 12)));

    let decoded: ConstantTable = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, table);
}

#[test]
fn test_preset_lookup() {
    let goldilocks = preset("poseidon2_goldilocks_t12").unwrap();
    assert_eq!(goldilocks.prime, "0xFFFFFFFF00000001");
    assert!(preset("missing").is_none());
}
