//! TOML job deserialisation.

use serde::Deserialize;

use thicklens_core::prescription::Prescription;

/// Top-level job file: a single `[lens]` table of known values.
///
/// Keys are the canonical variable names (`n1`, `nL`, `CT`, ...); anything
/// outside the fixed set is rejected at parse time.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    pub lens: Prescription,
}

/// Load and parse a TOML job file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: JobConfig = toml::from_str(&content)?;
    Ok(config)
}
