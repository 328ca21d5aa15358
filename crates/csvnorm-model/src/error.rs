use thiserror::Error;

/// Errors raised while turning one input row into a normalized row.
///
/// None of these are recovered inside the rule that raised them. The
/// pipeline decides whether the run aborts or the row is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// Row has fewer fields than the positional contract requires.
    #[error("malformed row: expected at least {expected} fields, found {found}")]
    MalformedRow { expected: usize, found: usize },

    /// Timestamp does not match `M/D/YY H:MM:SS AM|PM`.
    #[error("invalid timestamp '{value}': {reason}")]
    TimestampParse { value: String, reason: String },

    /// Duration is not three colon-separated non-negative numbers.
    #[error("invalid {field} '{value}': {reason}")]
    DurationParse {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl RowError {
    /// Name of the rule that produced this error.
    pub fn rule(&self) -> &'static str {
        match self {
            RowError::MalformedRow { .. } => "record",
            RowError::TimestampParse { .. } => "timestamp",
            RowError::DurationParse { .. } => "duration",
        }
    }

    /// The raw input text that failed, when the error concerns one field.
    pub fn value(&self) -> Option<&str> {
        match self {
            RowError::MalformedRow { .. } => None,
            RowError::TimestampParse { value, .. } | RowError::DurationParse { value, .. } => {
                Some(value)
            }
        }
    }

    /// Create a `TimestampParse` error.
    pub fn timestamp_parse(value: &str, reason: impl Into<String>) -> Self {
        RowError::TimestampParse {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a `DurationParse` error.
    pub fn duration_parse(field: &'static str, value: &str, reason: impl Into<String>) -> Self {
        RowError::DurationParse {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
