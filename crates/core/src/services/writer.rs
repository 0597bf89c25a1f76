use std::io::Write;

use crate::error::ExportResult;
use crate::model::Record;

/// CSV row writer.
///
/// Rows have different widths per kind, so the underlying writer is flexible.
/// Fields are quoted only when they contain a delimiter, quote or line break,
/// embedded quotes are doubled, and every row ends with `\n`. No header row.
pub struct RecordWriter<W: Write> {
    inner: csv::Writer<W>,
    rows: usize,
}

/// Builder shared by every writer so all rows follow one quoting rule.
pub fn csv_writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'));
    builder
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { inner: csv_writer_builder().from_writer(writer), rows: 0 }
    }

    /// Append one row. Fields are written in the given order.
    pub fn write_row<I, T>(&mut self, fields: I) -> ExportResult<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.inner.write_record(fields)?;
        self.rows += 1;
        Ok(())
    }

    pub fn write_record(&mut self, record: &Record) -> ExportResult<()> {
        self.write_row(record.fields()?)
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flush buffered rows and hand back the underlying writer.
    pub fn finish(self) -> ExportResult<W> {
        let mut inner = self.inner;
        inner.flush()?;
        inner.into_inner().map_err(|e| e.into_error().into())
    }
}
