use anyhow::{Context, Result};
use internals_core::reflect::SnapshotCounts;

use crate::commands::load_snapshot;
use crate::resolve_path;

/// Print symbol counts for a snapshot without exporting it.
pub fn summary_command(snapshot: &str, json: bool) -> Result<SnapshotCounts> {
    let path = resolve_path(snapshot)?;
    let counts = load_snapshot(&path)?.counts();

    if json {
        let serialized = serde_json::to_string_pretty(&counts)
            .context("Failed to serialize snapshot summary to JSON")?;
        println!("{}", serialized);
        return Ok(counts);
    }

    println!("Snapshot: {}", path.display());
    println!("  Functions: {}", counts.functions);
    println!("  Classes: {}", counts.classes);
    println!("  Interfaces: {}", counts.interfaces);
    println!("  Traits: {}", counts.traits);
    println!("  Methods: {}", counts.methods);
    println!("  Properties: {}", counts.properties);
    println!("  Variables: {}", counts.variables);
    println!("  Constants: {}", counts.constants);

    Ok(counts)
}
