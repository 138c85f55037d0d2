use crate::domain::{SoldPropertyRow, SOLD_PROPERTY_FIELDS};
use crate::errors::OutputError;
use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Append-only destination for extracted rows.
pub trait RowSink {
    fn append(&mut self, row: &SoldPropertyRow) -> Result<(), OutputError>;

    fn flush(&mut self) -> Result<(), OutputError> {
        Ok(())
    }
}

impl RowSink for Vec<SoldPropertyRow> {
    fn append(&mut self, row: &SoldPropertyRow) -> Result<(), OutputError> {
        self.push(row.clone());
        Ok(())
    }
}

/// CSV table of sold properties. The header is written on creation, so an
/// empty run still produces a file with the full schema.
///
/// Buffered rows are flushed when the writer is dropped; call
/// [`SoldCsv::finish`] to see flush errors.
pub struct SoldCsv<W: Write> {
    writer: Writer<W>,
}

impl SoldCsv<File> {
    /// Creates or truncates `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, OutputError> {
        let file = File::create(path)?;
        Self::from_writer(file)
    }
}

impl<W: Write> SoldCsv<W> {
    pub fn from_writer(inner: W) -> Result<Self, OutputError> {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(SOLD_PROPERTY_FIELDS)?;

        Ok(Self { writer })
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(mut self) -> Result<W, OutputError> {
        self.writer.flush()?;
        self.writer
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> RowSink for SoldCsv<W> {
    fn append(&mut self, row: &SoldPropertyRow) -> Result<(), OutputError> {
        self.writer.serialize(row)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), OutputError> {
        self.writer.flush()?;
        Ok(())
    }
}
