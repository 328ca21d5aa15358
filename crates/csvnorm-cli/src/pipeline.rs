//! The normalization pipeline: header, then parse, normalize and write for
//! every data row.

use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, info_span, trace, warn};

use csvnorm_ingest::{CsvSource, IngestError, parse_record};
use csvnorm_model::{
    ErrorPolicy, HeaderMode, NormalizationOptions, NormalizedRow, OutputField, ProcessingOptions,
    RawRow, RowError,
};
use csvnorm_normalization::normalize_record;
use csvnorm_output::{OutputError, RowWriter, create_output_file};

use crate::logging::redact_value;
use crate::types::{RunSummary, SkippedRow};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Output(#[from] OutputError),

    /// A row failed a rule under [`ErrorPolicy::Abort`].
    #[error("row {row} (line {line}): {rule} rule failed", rule = .source.rule())]
    Row {
        row: usize,
        line: u64,
        #[source]
        source: RowError,
    },
}

/// Normalize `input` into `output`.
///
/// Rows written before a failure stay written: the sink is flushed on every
/// exit path once the header has been read.
pub fn normalize_stream<R: Read, W: Write>(
    input: R,
    output: W,
    options: &ProcessingOptions,
) -> Result<RunSummary, PipelineError> {
    let source = CsvSource::new(input)?;
    run(source, RowWriter::new(output), options)
}

/// Normalize `input` into a file at `path`, created or truncated.
///
/// The input header is read before the file is touched, so empty input
/// leaves no file behind.
pub fn normalize_to_file<R: Read>(
    input: R,
    path: &Path,
    options: &ProcessingOptions,
) -> Result<RunSummary, PipelineError> {
    let source = CsvSource::new(input)?;
    let writer = create_output_file(path)?;
    run(source, writer, options)
}

fn run<R: Read, W: Write>(
    mut source: CsvSource<R>,
    mut writer: RowWriter<W>,
    options: &ProcessingOptions,
) -> Result<RunSummary, PipelineError> {
    let span = info_span!(
        "normalize",
        error_policy = ?options.error_policy,
        header_mode = ?options.header_mode,
        duration_format = ?options.normalization.duration_format
    );
    let _guard = span.enter();
    let start = Instant::now();

    let outcome = write_rows(&mut source, &mut writer, options);
    let flushed = writer.flush();
    let summary = outcome?;
    flushed?;

    info!(
        rows_read = summary.rows_read,
        rows_written = summary.rows_written,
        rows_skipped = summary.skipped.len(),
        duration_ms = start.elapsed().as_millis(),
        "normalization complete"
    );
    Ok(summary)
}

fn write_rows<R: Read, W: Write>(
    source: &mut CsvSource<R>,
    writer: &mut RowWriter<W>,
    options: &ProcessingOptions,
) -> Result<RunSummary, PipelineError> {
    let mut summary = RunSummary::default();
    if options.header_mode == HeaderMode::Passthrough {
        writer.write_header(source.header())?;
        summary.header_written = true;
    }

    for (index, raw) in source.by_ref().enumerate() {
        let raw = raw?;
        let row = index + 1;
        match normalize_row(&raw, &options.normalization) {
            Ok(normalized) => {
                writer.write_row(&normalized)?;
                summary.rows_written += 1;
                debug!(row, line = raw.line, "row normalized");
                trace!(
                    row,
                    full_name = redact_value(normalized.get(OutputField::FullName)),
                    "row values"
                );
            }
            Err(error) => match options.error_policy {
                ErrorPolicy::Abort => {
                    return Err(PipelineError::Row {
                        row,
                        line: raw.line,
                        source: error,
                    });
                }
                ErrorPolicy::SkipRow => {
                    warn!(
                        row,
                        line = raw.line,
                        rule = error.rule(),
                        value = redact_value(error.value().unwrap_or_default()),
                        "skipping row that failed normalization"
                    );
                    summary.skipped.push(SkippedRow {
                        row,
                        line: raw.line,
                        error,
                    });
                }
            },
        }
    }
    summary.rows_read = source.rows_read();
    Ok(summary)
}

/// Record Parser followed by the field rules.
fn normalize_row(raw: &RawRow, options: &NormalizationOptions) -> Result<NormalizedRow, RowError> {
    let record = parse_record(raw)?;
    normalize_record(&record, options)
}
