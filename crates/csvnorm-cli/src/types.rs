use csvnorm_model::RowError;

/// Outcome of one pipeline run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Data rows read from the input (the header is not counted).
    pub rows_read: usize,
    pub rows_written: usize,
    /// Rows left out under [`ErrorPolicy::SkipRow`](csvnorm_model::ErrorPolicy::SkipRow).
    pub skipped: Vec<SkippedRow>,
    pub header_written: bool,
}

impl RunSummary {
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

#[derive(Debug)]
pub struct SkippedRow {
    /// 1-based data-row index.
    pub row: usize,
    /// Physical line the row started on.
    pub line: u64,
    pub error: RowError,
}
