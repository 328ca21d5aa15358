//! Record-level projection: one [`NormalizedRecord`] to one [`NormalizedRow`].

use csvnorm_model::{NormalizationOptions, NormalizedRecord, NormalizedRow, OutputField, RowError};

use crate::normalization::{Elapsed, normalize_timestamp, pad_zip_code, parse_elapsed};

/// Compute a single output field.
pub fn project_field(
    field: OutputField,
    record: &NormalizedRecord,
    options: &NormalizationOptions,
) -> Result<String, RowError> {
    let duration_format = options.duration_format;
    let value = match field {
        OutputField::Timestamp => normalize_timestamp(record.timestamp())?,
        OutputField::Address => record.address().to_string(),
        OutputField::ZipCode => pad_zip_code(record.zip_code()),
        OutputField::FullName => record.full_name().to_string(),
        OutputField::FooDuration => foo_elapsed(record)?.format(duration_format),
        OutputField::BarDuration => bar_elapsed(record)?.format(duration_format),
        OutputField::TotalDuration => total_duration(record)?.format(duration_format),
        OutputField::Notes => record.notes().unwrap_or_default().to_string(),
    };
    Ok(value)
}

/// Sum of the two duration fields, parsed fresh from the record.
pub fn total_duration(record: &NormalizedRecord) -> Result<Elapsed, RowError> {
    let foo = foo_elapsed(record)?;
    let bar = bar_elapsed(record)?;
    foo.checked_add(bar).ok_or_else(|| {
        RowError::duration_parse(
            OutputField::TotalDuration.as_str(),
            &format!("{}+{}", record.foo_duration(), record.bar_duration()),
            "sum is too large",
        )
    })
}

/// Normalize every field. The first failing rule fails the whole record.
pub fn normalize_record(
    record: &NormalizedRecord,
    options: &NormalizationOptions,
) -> Result<NormalizedRow, RowError> {
    let mut fields: [String; OutputField::COUNT] = Default::default();
    for field in OutputField::ALL {
        fields[field.index()] = project_field(field, record, options)?;
    }
    Ok(NormalizedRow::new(fields))
}

fn foo_elapsed(record: &NormalizedRecord) -> Result<Elapsed, RowError> {
    parse_elapsed(OutputField::FooDuration.as_str(), record.foo_duration())
}

fn bar_elapsed(record: &NormalizedRecord) -> Result<Elapsed, RowError> {
    parse_elapsed(OutputField::BarDuration.as_str(), record.bar_duration())
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvnorm_model::DurationFormat;

    fn record(timestamp: &str, foo: &str, bar: &str, notes: Option<&str>) -> NormalizedRecord {
        NormalizedRecord::new(
            timestamp,
            "123 Main St",
            "21",
            "jane doe",
            foo,
            bar,
            notes.map(str::to_string),
        )
    }

    #[test]
    fn normalizes_reference_row() {
        let rec = record("4/1/11 11:00:00 AM", "1:00:00", "0:30:00", Some("hi"));
        let row = normalize_record(&rec, &NormalizationOptions::default()).unwrap();
        assert_eq!(
            row.as_slice(),
            [
                "2011-04-01T14:00:00-05:00",
                "123 Main St",
                "00021",
                "JANE DOE",
                "3600.0",
                "1800.0",
                "5400.0",
                "hi",
            ]
        );
    }

    #[test]
    fn iso8601_applies_to_all_duration_columns() {
        let rec = record("4/1/11 11:00:00 AM", "1:00:00", "0:30:00.5", None);
        let options = NormalizationOptions::new().with_duration_format(DurationFormat::Iso8601);
        let row = normalize_record(&rec, &options).unwrap();
        assert_eq!(row.get(OutputField::FooDuration), "PT1H0M0S");
        assert_eq!(row.get(OutputField::BarDuration), "PT0H30M0.5S");
        assert_eq!(row.get(OutputField::TotalDuration), "PT1H30M0.5S");
    }

    #[test]
    fn missing_notes_become_empty() {
        let rec = record("4/1/11 11:00:00 AM", "1:00:00", "0:30:00", None);
        let notes = project_field(OutputField::Notes, &rec, &NormalizationOptions::default());
        assert_eq!(notes.unwrap(), "");
    }

    #[test]
    fn bad_timestamp_fails_the_whole_record() {
        let rec = record("yesterday", "1:00:00", "0:30:00", None);
        let error = normalize_record(&rec, &NormalizationOptions::default()).unwrap_err();
        assert_eq!(error.rule(), "timestamp");
    }

    #[test]
    fn bad_duration_names_its_field() {
        let rec = record("4/1/11 11:00:00 AM", "1:00:00", "abc", None);
        let error = normalize_record(&rec, &NormalizationOptions::default()).unwrap_err();
        assert!(matches!(
            error,
            RowError::DurationParse {
                field: "bar_duration",
                ..
            }
        ));
    }

    #[test]
    fn total_is_recomputed_from_inputs() {
        let rec = record("4/1/11 11:00:00 AM", "31:23:32.123", "0:00:00.877", None);
        let total = total_duration(&rec).unwrap();
        assert_eq!(total.total_seconds(), 113013.0);
    }
}
