use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use internals_core::services::{ExportOptions, RowFormat, DEFAULT_OUTPUT_FILE};
use serde::{Deserialize, Serialize};

use crate::is_yaml_path;

fn default_output() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

fn default_atomic() -> bool {
    true
}

/// Export settings, optionally loaded from a JSON or YAML file.
///
/// Command-line flags override whatever the file sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Destination CSV path.
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub format: RowFormat,
    /// Publish the file only once the export is complete.
    #[serde(default = "default_atomic")]
    pub atomic: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { output: default_output(), format: RowFormat::Full, atomic: true }
    }
}

impl ExportConfig {
    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(
        mut self,
        output: Option<String>,
        format: Option<RowFormat>,
        no_atomic: bool,
    ) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(format) = format {
            self.format = format;
        }
        if no_atomic {
            self.atomic = false;
        }
        self
    }

    pub fn options(&self) -> ExportOptions {
        ExportOptions { format: self.format, atomic: self.atomic }
    }
}

/// Load an export config file; YAML for `.yaml`/`.yml`, JSON otherwise.
pub fn load_export_config(path: &Path) -> Result<ExportConfig> {
    let body = fs::read(path)
        .with_context(|| format!("Failed to read export config at {}", path.display()))?;
    let config = if is_yaml_path(path) {
        serde_yaml::from_slice(&body).context("Failed to parse export config YAML")?
    } else {
        serde_json::from_slice(&body).context("Failed to parse export config JSON")?
    };
    Ok(config)
}
