pub mod enums;
pub mod error;
pub mod options;
pub mod record;

pub use enums::OutputField;
pub use error::RowError;
pub use options::{
    DurationFormat, ErrorPolicy, HeaderMode, NormalizationOptions, ProcessingOptions,
};
pub use record::{NormalizedRecord, NormalizedRow, RAW_FIELD_COUNT, RawRow, position};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_error_reports_rule_and_value() {
        let error = RowError::duration_parse("foo_duration", "abc", "expected 3 components");
        assert_eq!(error.rule(), "duration");
        assert_eq!(error.value(), Some("abc"));
        assert_eq!(
            error.to_string(),
            "invalid foo_duration 'abc': expected 3 components"
        );

        let malformed = RowError::MalformedRow {
            expected: 8,
            found: 5,
        };
        assert_eq!(malformed.rule(), "record");
        assert_eq!(malformed.value(), None);
    }

    #[test]
    fn output_fields_are_in_row_order() {
        for (idx, field) in OutputField::ALL.iter().enumerate() {
            assert_eq!(field.index(), idx);
        }
        assert_eq!(OutputField::ALL.len(), OutputField::COUNT);
    }
}
