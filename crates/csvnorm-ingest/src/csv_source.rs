use std::borrow::Cow;
use std::io::Read;

use csv::{ByteRecord, Reader, ReaderBuilder};
use thiserror::Error;
use tracing::warn;

use csvnorm_model::RawRow;

/// Errors raised while reading the input stream itself.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input contained no records, so there is no header to pass through.
    #[error("input is empty: expected a header row")]
    MissingHeader,

    #[error("failed to read csv input")]
    Csv(#[from] csv::Error),
}

/// Comma-delimited input with its header row already consumed.
///
/// Iterating yields one [`RawRow`] per data record. Fields are kept exactly
/// as the CSV layer unquoted them; nothing is trimmed.
pub struct CsvSource<R> {
    reader: Reader<R>,
    header: Vec<String>,
    record: ByteRecord,
    rows_read: usize,
}

impl<R: Read> CsvSource<R> {
    /// Wrap a reader and consume its first record as the header.
    pub fn new(input: R) -> Result<Self, IngestError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quote(b'"')
            .double_quote(true)
            .from_reader(input);
        let mut record = ByteRecord::new();
        if !reader.read_byte_record(&mut record)? {
            return Err(IngestError::MissingHeader);
        }
        let mut header = decode_record(&record, record_line(&record));
        if let Some(first) = header.first_mut() {
            if let Some(stripped) = first.strip_prefix('\u{feff}') {
                *first = stripped.to_string();
            }
        }
        Ok(Self {
            reader,
            header,
            record,
            rows_read: 0,
        })
    }

    /// The header row, verbatim.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Number of data rows yielded so far.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }
}

impl<R: Read> Iterator for CsvSource<R> {
    type Item = Result<RawRow, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_byte_record(&mut self.record) {
            Ok(true) => {
                let line = record_line(&self.record);
                self.rows_read += 1;
                Some(Ok(RawRow::new(line, decode_record(&self.record, line))))
            }
            Ok(false) => None,
            Err(error) => Some(Err(error.into())),
        }
    }
}

fn record_line(record: &ByteRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

/// Decode every field as UTF-8, replacing invalid sequences with U+FFFD.
fn decode_record(record: &ByteRecord, line: u64) -> Vec<String> {
    let mut lossy = false;
    let fields = record
        .iter()
        .map(|bytes| match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(text) => text.to_string(),
            Cow::Owned(text) => {
                lossy = true;
                text
            }
        })
        .collect();
    if lossy {
        warn!(line, "replaced invalid UTF-8 in input with U+FFFD");
    }
    fields
}
