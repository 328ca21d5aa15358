//! Record Parser: positional extraction from a raw row.
//!
//! No formatting happens here. The only transformation is the name
//! upper-casing performed by [`NormalizedRecord::new`].

use csvnorm_model::{NormalizedRecord, RAW_FIELD_COUNT, RawRow, RowError, position};

/// Build a typed record from one raw row.
///
/// Fails with [`RowError::MalformedRow`] when fewer than
/// [`RAW_FIELD_COUNT`] positions are present. Extra trailing positions are
/// ignored, as is position 6.
pub fn parse_record(row: &RawRow) -> Result<NormalizedRecord, RowError> {
    if row.fields.len() < RAW_FIELD_COUNT {
        return Err(RowError::MalformedRow {
            expected: RAW_FIELD_COUNT,
            found: row.fields.len(),
        });
    }
    let field = |index: usize| row.fields[index].as_str();
    Ok(NormalizedRecord::new(
        field(position::TIMESTAMP),
        field(position::ADDRESS),
        field(position::ZIP_CODE),
        field(position::FULL_NAME),
        field(position::FOO_DURATION),
        field(position::BAR_DURATION),
        Some(field(position::NOTES).to_string()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(fields: &[&str]) -> RawRow {
        RawRow::new(2, fields.iter().map(|f| (*f).to_string()).collect())
    }

    #[test]
    fn short_row_is_malformed() {
        let error = parse_record(&raw(&["a", "b", "c", "d", "e"])).unwrap_err();
        assert_eq!(
            error,
            RowError::MalformedRow {
                expected: 8,
                found: 5
            }
        );
    }

    #[test]
    fn seven_fields_is_still_malformed() {
        let row = raw(&["ts", "addr", "1", "n", "1:0:0", "1:0:0", ""]);
        assert!(matches!(
            parse_record(&row),
            Err(RowError::MalformedRow { found: 7, .. })
        ));
    }

    #[test]
    fn fields_are_assigned_by_position() {
        let row = raw(&[
            "4/1/11 11:00:00 AM",
            "123 Main St",
            "21",
            "jane doe",
            "1:00:00",
            "0:30:00",
            "ignored",
            "hi",
            "extra",
        ]);
        let record = parse_record(&row).unwrap();
        assert_eq!(record.timestamp(), "4/1/11 11:00:00 AM");
        assert_eq!(record.address(), "123 Main St");
        assert_eq!(record.zip_code(), "21");
        assert_eq!(record.full_name(), "JANE DOE");
        assert_eq!(record.foo_duration(), "1:00:00");
        assert_eq!(record.bar_duration(), "0:30:00");
        assert_eq!(record.notes(), Some("hi"));
    }
}
