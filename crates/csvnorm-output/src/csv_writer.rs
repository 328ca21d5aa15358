use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use thiserror::Error;
use tracing::debug;

use csvnorm_model::NormalizedRow;

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "normalized.csv";

/// Errors raised while writing normalized output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output file {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write csv output")]
    Csv(#[from] csv::Error),

    #[error("failed to flush output")]
    Io(#[from] std::io::Error),
}

/// CSV sink for the header and normalized rows.
///
/// Fields are quoted only when they need it (delimiter, quote, or line
/// break inside), with embedded quotes doubled. Records end with `\r\n`.
pub struct RowWriter<W: Write> {
    writer: Writer<W>,
    rows_written: usize,
}

impl<W: Write> RowWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = WriterBuilder::new()
            .delimiter(b',')
            .quote(b'"')
            .double_quote(true)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::CRLF)
            .flexible(true)
            .from_writer(sink);
        Self {
            writer,
            rows_written: 0,
        }
    }

    /// Write the header row exactly as given.
    pub fn write_header(&mut self, header: &[String]) -> Result<(), OutputError> {
        self.writer.write_record(header)?;
        Ok(())
    }

    pub fn write_row(&mut self, row: &NormalizedRow) -> Result<(), OutputError> {
        self.writer.write_record(row.as_slice())?;
        self.rows_written += 1;
        Ok(())
    }

    /// Number of normalized rows written (the header is not counted).
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn flush(&mut self) -> Result<(), OutputError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush everything and hand back the underlying sink.
    pub fn finish(mut self) -> Result<W, OutputError> {
        self.writer.flush()?;
        debug!(rows_written = self.rows_written, "output flushed");
        self.writer
            .into_inner()
            .map_err(|error| OutputError::Io(error.into_error()))
    }
}

/// Create (or truncate) `path` and wrap it in a buffered [`RowWriter`].
pub fn create_output_file(path: &Path) -> Result<RowWriter<BufWriter<File>>, OutputError> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(RowWriter::new(BufWriter::new(file)))
}
