use anyhow::{Context, Result};
use internals_core::services::{export_to_path, ExportSummary, RowFormat};
use serde::Serialize;

use crate::commands::{load_export_config, load_snapshot, ExportConfig};
use crate::{resolve_path, export_digest};

/// Arguments of the `export` command.
#[derive(Debug, Clone, Default)]
pub struct ExportRequest {
    /// Snapshot file to export.
    pub snapshot: String,
    /// Destination path; overrides the config file.
    pub output: Option<String>,
    pub format: Option<RowFormat>,
    /// Optional JSON/YAML export config.
    pub config: Option<String>,
    pub no_atomic: bool,
    pub json: bool,
}

/// Report printed after a successful export.
#[derive(Debug, Serialize)]
pub struct ExportReport {
    pub snapshot: String,
    #[serde(flatten)]
    pub summary: ExportSummary,
    pub sha256: String,
}

/// Export a snapshot to CSV and print a report.
pub fn export_command(request: &ExportRequest) -> Result<ExportReport> {
    let config = match &request.config {
        Some(path) => load_export_config(&resolve_path(path)?)?,
        None => ExportConfig::default(),
    }
    .with_overrides(request.output.clone(), request.format, request.no_atomic);

    let snapshot_path = resolve_path(&request.snapshot)?;
    let snapshot = load_snapshot(&snapshot_path)?;
    let output_path = resolve_path(&config.output)?;

    let summary = export_to_path(&snapshot, &output_path, &config.options())
        .with_context(|| format!("Failed to export to {}", output_path.display()))?;
    let sha256 = export_digest(&output_path)?;

    let report = ExportReport { snapshot: snapshot_path.display().to_string(), summary, sha256 };

    if request.json {
        let serialized = serde_json::to_string_pretty(&report)
            .context("Failed to serialize export report to JSON")?;
        println!("{}", serialized);
    } else {
        let counts = &report.summary.records;
        println!("Exported runtime internals:");
        println!("  Snapshot: {}", report.snapshot);
        println!("  Output: {}", output_path.display());
        println!("  Format: {}", report.summary.format);
        println!("  Rows written: {}", report.summary.rows_written);
        println!(
            "  Records: {} functions, {} classes, {} methods, {} members, {} variables, {} constants",
            counts.functions,
            counts.classes,
            counts.methods,
            counts.properties,
            counts.variables,
            counts.constants
        );
        println!("  SHA-256: {}", report.sha256);
    }

    Ok(report)
}
