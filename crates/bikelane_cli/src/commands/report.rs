//! Report command implementation.

use super::{render, OutputFormat};
use crate::error::{CliError, CliResult};
use bikelane_core::{Kilometers, RegistryConfig, SegmentRegistry};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// One entry of the input file.
#[derive(Debug, Deserialize)]
pub struct SegmentInput {
    /// Segment name.
    pub name: String,
    /// Length in kilometers.
    pub length: Kilometers,
    /// Status to apply after adding. Defaults to the registry default.
    #[serde(default)]
    pub status: Option<String>,
}

/// Options for the report command.
#[derive(Debug)]
pub struct ReportOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Fixed decimals for lengths.
    pub precision: Option<usize>,
    /// Report title override.
    pub title: Option<String>,
}

/// Runs the report command.
pub fn run(input: &Path, options: &ReportOptions) -> CliResult<()> {
    let registry = load_registry(input, options)?;
    info!(segments = registry.len(), path = %input.display(), "segments loaded");
    print!("{}", render(&registry.report(), options.format)?);
    Ok(())
}

/// Builds a registry from a JSON segment list, in file order.
pub fn load_registry(input: &Path, options: &ReportOptions) -> CliResult<SegmentRegistry> {
    let raw = fs::read_to_string(input).map_err(|source| CliError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let entries: Vec<SegmentInput> = serde_json::from_str(&raw)?;

    let mut config = RegistryConfig::new().length_precision(options.precision);
    if let Some(title) = &options.title {
        config = config.report_title(title.as_str());
    }

    let mut registry = SegmentRegistry::with_config(config);
    for entry in entries {
        registry.add_segment(entry.name.as_str(), entry.length)?;
        if let Some(status) = entry.status {
            registry.update_status(&entry.name, status)?;
        }
    }
    Ok(registry)
}
