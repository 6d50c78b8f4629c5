//! Generate Command
//!
//! Builds constant tables from a config file and/or presets and persists each
//! one as `<out-dir>/<label>.json`.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, ValueEnum};
use poseidon2_rc::{ConstantTable, PermutationConfig, SamplingMode, PRESETS};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Sampling {
    /// Reference construction: `word mod p` (biased, compatible)
    Reduction,
    /// Rejection sampling (uniform, NOT compatible with reference constants)
    Rejection,
}

impl From<Sampling> for SamplingMode {
    fn from(sampling: Sampling) -> Self {
        match sampling {
            Sampling::Reduction => Self::Reduction,
            Sampling::Rejection => Self::Rejection,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// JSON file holding one config object or an array of them
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Built-in preset to generate (repeatable). All presets if no config is given.
    #[arg(short, long = "preset", value_name = "LABEL")]
    pub(crate) presets: Vec<String>,

    /// Directory receiving `<label>.json` artifacts
    #[arg(short, long, value_name = "DIR", default_value = "artifacts")]
    pub(crate) out_dir: PathBuf,

    /// Field-element sampling mode
    #[arg(short, long, value_enum, default_value_t = Sampling::Reduction)]
    pub(crate) sampling: Sampling,

    /// Print a JSON array of tables to stdout instead of writing files
    #[arg(long)]
    pub(crate) stdout: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigFile {
    Many(Vec<PermutationConfig>),
    One(PermutationConfig),
}

// =============================================================================
// GENERATE
// =============================================================================

/// Build every selected config and persist the resulting tables.
pub fn generate(args: &GenerateArgs) -> Result<()> {
    let configs = load_configs(args.config.as_deref(), &args.presets)?;
    let mode = SamplingMode::from(args.sampling);

    if mode == SamplingMode::Rejection {
        warn!("rejection sampling selected; tables will NOT match reference constants");
    }

    let tables = poseidon2_rc::build_tables_with(&configs, mode)
        .context("Failed to build constant tables")?;

    if args.stdout {
        println!("{}", render_tables(&tables)?);
        return Ok(());
    }

    for path in write_artifacts(&args.out_dir, &tables)? {
        debug!(path = %path.display(), "artifact written");
    }

    Ok(())
}

/// Collect configs from `config_file` and `preset_labels`, falling back to
/// every preset when both are empty.
pub(crate) fn load_configs(
    config_file: Option<&Path>,
    preset_labels: &[String],
) -> Result<Vec<PermutationConfig>> {
    let mut configs = Vec::new();

    if let Some(path) = config_file {
        let file = File::open(path)
            .with_context(|| format!("Failed to open config: {}", path.display()))?;
        let loaded: ConfigFile = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        match loaded {
            ConfigFile::Many(many) => configs.extend(many),
            ConfigFile::One(one) => configs.push(one),
        }
    }

    for label in preset_labels {
        let preset =
            poseidon2_rc::preset(label).ok_or_else(|| anyhow!("Unknown preset: {label}"))?;
        configs.push(preset.config()?);
    }

    if config_file.is_none() && preset_labels.is_empty() {
        configs = poseidon2_rc::presets()?;
    }

    if configs.is_empty() {
        bail!("No configurations to generate");
    }

    let mut labels = HashSet::new();
    for config in &configs {
        config
            .validate()
            .with_context(|| format!("Invalid config '{}'", config.label))?;
        if !is_plain_label(&config.label) {
            bail!("Label must be a plain file name: {:?}", config.label);
        }
        if !labels.insert(config.label.as_str()) {
            bail!("Duplicate label: {}", config.label);
        }
    }

    Ok(configs)
}

/// `true` if `label` names a file directly inside the output directory.
fn is_plain_label(label: &str) -> bool {
    !label.is_empty()
        && label != "."
        && label != ".."
        && !label.contains(['/', '\\', '\0'])
        && !Path::new(label).is_absolute()
}

/// JSON array of every table, as printed by `--stdout`.
fn render_tables(tables: &[ConstantTable]) -> Result<String> {
    serde_json::to_string_pretty(tables).context("Failed to serialize tables")
}

/// Write each table to `<out_dir>/<label>.json`, creating `out_dir` if needed.
pub(crate) fn write_artifacts(out_dir: &Path, tables: &[ConstantTable]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create: {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(tables.len());
    for table in tables {
        let path = out_dir.join(format!("{}.json", table.label));
        let json = serde_json::to_string_pretty(table)?;
        fs::write(&path, json).with_context(|| format!("Failed to write: {}", path.display()))?;

        info!("Generated constants for {} -> {}", table.label, path.display());
        written.push(path);
    }

    Ok(written)
}

// =============================================================================
// PRESETS
// =============================================================================

/// Print the built-in parameter sets.
pub fn list_presets() {
    for line in preset_lines() {
        println!("{line}");
    }
}

fn preset_lines() -> Vec<String> {
    PRESETS
        .iter()
        .map(|preset| {
            format!(
                "{}  field={} p={} t={} roundsF={} roundsP={}",
                preset.label, preset.field, preset.prime, preset.t, preset.rounds_f, preset.rounds_p
            )
        })
        .collect()
}
