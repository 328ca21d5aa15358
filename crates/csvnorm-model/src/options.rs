//! Configuration options for a normalization run.

use serde::{Deserialize, Serialize};

/// What to do when a row fails to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop the run at the first bad row. Rows already written stay.
    #[default]
    Abort,
    /// Log the bad row, leave it out of the output, and keep going.
    SkipRow,
}

/// Whether the input header is copied to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderMode {
    /// Write the original header row verbatim as the first output line.
    #[default]
    Passthrough,
    /// Write data rows only.
    Omit,
}

/// Representation used for all three elapsed-time columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationFormat {
    /// Total seconds as a decimal number, e.g. `5400.5`.
    #[default]
    Seconds,
    /// ISO 8601 duration, e.g. `PT1H30M0.5S`.
    Iso8601,
}

/// Options for the field rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NormalizationOptions {
    pub duration_format: DurationFormat,
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration_format(mut self, format: DurationFormat) -> Self {
        self.duration_format = format;
        self
    }
}

/// Options controlling a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProcessingOptions {
    pub error_policy: ErrorPolicy,
    pub header_mode: HeaderMode,
    pub normalization: NormalizationOptions,
}

impl ProcessingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub fn with_header_mode(mut self, mode: HeaderMode) -> Self {
        self.header_mode = mode;
        self
    }

    pub fn with_duration_format(mut self, format: DurationFormat) -> Self {
        self.normalization.duration_format = format;
        self
    }
}
