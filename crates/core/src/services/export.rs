use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::{ExportError, ExportResult};
use crate::model::Record;
use crate::reflect::Reflector;
use crate::services::enumerator::enumerate;
use crate::services::rows::{rows, RowFormat};
use crate::services::writer::RecordWriter;

/// Default destination file name.
pub const DEFAULT_OUTPUT_FILE: &str = "php.internals.csv";

/// Options controlling a file export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub format: RowFormat,
    /// Write to a temporary file next to the destination and rename it into
    /// place only once every row is written.
    pub atomic: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { format: RowFormat::Full, atomic: true }
    }
}

/// Per-kind tally of enumerated records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCounts {
    pub functions: usize,
    pub classes: usize,
    pub methods: usize,
    pub properties: usize,
    pub variables: usize,
    pub constants: usize,
}

impl RecordCounts {
    pub fn add(&mut self, record: &Record) {
        match record {
            Record::Function(_) => self.functions += 1,
            Record::Class(_) => self.classes += 1,
            Record::Method(_) => self.methods += 1,
            Record::Property(_) => self.properties += 1,
            Record::Variable(_) => self.variables += 1,
            Record::Constant(_) => self.constants += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.functions
            + self.classes
            + self.methods
            + self.properties
            + self.variables
            + self.constants
    }
}

/// Outcome of a completed export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    pub format: RowFormat,
    pub records: RecordCounts,
    pub rows_written: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub started_at: String,
    pub finished_at: String,
}

/// Enumerate `reflector` and write every row to `writer`.
///
/// Returns the summary and the writer, flushed. On error nothing is
/// guaranteed about what already reached the writer.
pub fn export_to_writer<R, W>(
    reflector: R,
    writer: W,
    format: RowFormat,
) -> ExportResult<(ExportSummary, W)>
where
    R: Reflector,
    W: Write,
{
    let started_at = Utc::now().to_rfc3339();
    let mut counts = RecordCounts::default();
    let mut out = RecordWriter::new(writer);

    {
        let records = enumerate(reflector).inspect(|record| {
            if let Ok(record) = record {
                counts.add(record);
            }
        });
        for row in rows(records, format) {
            out.write_row(row?)?;
        }
    }

    let rows_written = out.rows_written();
    let writer = out.finish()?;
    let summary = ExportSummary {
        format,
        records: counts,
        rows_written,
        output: None,
        started_at,
        finished_at: Utc::now().to_rfc3339(),
    };
    Ok((summary, writer))
}

/// Export to a file at `path`.
///
/// With `options.atomic` the destination only ever holds a complete export:
/// rows go to a temporary file in the same directory, which is synced and
/// renamed over `path` on success and deleted on failure. Without it the
/// destination is written in place and a failed export leaves it truncated.
pub fn export_to_path<R: Reflector>(
    reflector: R,
    path: &Path,
    options: &ExportOptions,
) -> ExportResult<ExportSummary> {
    let mut summary = if options.atomic {
        export_atomic(reflector, path, options.format)?
    } else {
        warn!(path = %path.display(), "writing export in place; a failure leaves a partial file");
        let file = File::create(path)?;
        let (summary, file) = export_to_writer(reflector, file, options.format)?;
        file.sync_all()?;
        summary
    };

    summary.output = Some(path.display().to_string());
    info!(
        path = %path.display(),
        format = %summary.format,
        rows = summary.rows_written,
        "export finished"
    );
    Ok(summary)
}

fn export_atomic<R: Reflector>(
    reflector: R,
    path: &Path,
    format: RowFormat,
) -> ExportResult<ExportSummary> {
    let dir = parent_dir(path);
    let temp = NamedTempFile::new_in(&dir)?;
    debug!(temp = %temp.path().display(), "writing export to temporary file");

    let (summary, temp) = export_to_writer(reflector, temp, format)?;
    temp.as_file().sync_all()?;
    temp.persist(path)
        .map_err(|e| ExportError::Persist { path: path.to_path_buf(), source: e })?;
    Ok(summary)
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
