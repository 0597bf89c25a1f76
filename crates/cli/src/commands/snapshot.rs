use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use internals_core::reflect::RuntimeSnapshot;

use crate::is_yaml_path;

/// Load a runtime snapshot; YAML for `.yaml`/`.yml`, JSON otherwise.
pub fn load_snapshot(path: &Path) -> Result<RuntimeSnapshot> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot at {}", path.display()))?;
    if !is_yaml_path(path) {
        return RuntimeSnapshot::from_json_str(&body).context("Failed to parse snapshot JSON");
    }
    let snapshot: RuntimeSnapshot =
        serde_yaml::from_str(&body).context("Failed to parse snapshot YAML")?;
    snapshot.validate().context("Failed to parse snapshot YAML")?;
    Ok(snapshot)
}
