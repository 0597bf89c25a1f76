//! Enumeration and export pipeline: reflector -> records -> rows -> CSV.

pub mod enumerator;
pub mod export;
pub mod rows;
pub mod writer;

pub use enumerator::{collect_records, enumerate, Records};
pub use export::{
    export_to_path, export_to_writer, ExportOptions, ExportSummary, RecordCounts,
    DEFAULT_OUTPUT_FILE,
};
pub use rows::{rows, RowFormat, Rows};
pub use writer::RecordWriter;
