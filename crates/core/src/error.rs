use std::path::PathBuf;

use thiserror::Error;

/// Error type for enumeration and export.
///
/// Every variant is fatal: the export stops at the first error and nothing is
/// retried.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A reflection query against the runtime failed.
    #[error("Reflection failed for {symbol}: {message}")]
    Reflection { symbol: String, message: String },

    /// A symbol listed by the runtime could not be resolved when reflected.
    #[error("Symbol vanished during enumeration: {0}")]
    SymbolVanished(String),

    /// A runtime snapshot could not be decoded.
    #[error("Invalid runtime snapshot: {0}")]
    Snapshot(String),

    /// A runtime value could not be flattened to JSON text.
    #[error("Failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The finished temporary file could not be moved over the destination.
    #[error("Failed to publish export to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

/// Convenience result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

impl ExportError {
    pub fn reflection(symbol: impl Into<String>, message: impl Into<String>) -> Self {
        ExportError::Reflection { symbol: symbol.into(), message: message.into() }
    }
}
