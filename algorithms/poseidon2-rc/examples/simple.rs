//! Poseidon2 Round Constants Basic Example
//!
//! Minimal usage: `let table = poseidon2_rc::build_table(&config)?;`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() -> Result<(), poseidon2_rc::ConfigError> {
    let config = poseidon2_rc::GOLDILOCKS_T12.config()?;
    let table = poseidon2_rc::build_table(&config)?;

    println!("Field: {} (p = {})", table.field, table.prime);
    println!("Shape: {} rounds x {} elements", table.total_rounds, table.t);
    println!("RC[0][0]: {}", table.round_constants[0][0]);
    Ok(())
}
