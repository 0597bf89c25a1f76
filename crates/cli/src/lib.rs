pub mod commands;

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `internals_core=trace`).
pub const LOG_ENV: &str = "INTERNALS_LOG";

/// Install a stderr `tracing` subscriber when `INTERNALS_LOG` is set.
///
/// Logging stays off otherwise so stdout carries only command output.
pub fn init_logging() {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(io::stderr)
            .try_init();
        tracing::debug!("tracing initialized");
    }
}

/// Resolve a user-supplied path against the current working directory.
///
/// The path does not need to exist yet (export destinations usually don't).
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let path = Path::new(path);
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().context("Failed to get current directory")?;
    Ok(cwd.join(path))
}

/// Whether a file should be decoded as YAML rather than JSON, judged by extension.
pub fn is_yaml_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()).as_deref(),
        Some("yaml") | Some("yml")
    )
}

/// Hex SHA-256 of a finished export, streamed through the hasher.
pub fn export_digest(path: &Path) -> Result<String> {
    let mut file = fs::File::open(path)
        .with_context(|| format!("Failed to open {} for hashing", path.display()))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)
        .with_context(|| format!("Failed to hash {}", path.display()))?;
    Ok(format!("{:x}", hasher.finalize()))
}
