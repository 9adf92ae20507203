//! Offline normalization of type records.
//!
//! Reads a dump of the metadata service's type list and prints the types
//! the frontend would receive from `GET {root}/types`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use qb_core::types::normalize_types;
use qb_core::{decode, TypeEntity};

#[derive(Args)]
pub struct NormalizeArgs {
    /// JSON file holding an array of type records, or `{"data": [...]}`
    pub file: PathBuf,
}

pub fn execute(args: NormalizeArgs) -> Result<()> {
    let types = normalize_file(&args.file)?;
    println!("{}", serde_json::to_string_pretty(&types)?);
    Ok(())
}

fn normalize_file(path: &Path) -> Result<Vec<TypeEntity>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let body: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let records = decode::type_records(&body)?;
    let types = normalize_types(records);
    tracing::info!(records = records.len(), types = types.len(), "Normalized type records");

    Ok(types)
}
