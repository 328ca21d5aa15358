//! Property tests for the field rules.

use proptest::prelude::*;

use csvnorm_ingest::parse_record;
use csvnorm_model::{NormalizationOptions, OutputField, RawRow};
use csvnorm_normalization::{
    ZIP_CODE_WIDTH, normalize_record, normalize_timestamp, pad_zip_code, parse_elapsed,
    total_duration,
};

fn raw_row(name: &str, foo: &str, bar: &str) -> RawRow {
    RawRow::new(
        2,
        vec![
            "4/1/11 11:00:00 AM".to_string(),
            "1 Main St".to_string(),
            "21".to_string(),
            name.to_string(),
            foo.to_string(),
            bar.to_string(),
            String::new(),
            String::new(),
        ],
    )
}

fn duration_text() -> impl Strategy<Value = String> {
    (0u32..200, 0u32..60, 0u32..60, 0u32..1000)
        .prop_map(|(h, m, s, ms)| format!("{h}:{m:02}:{s:02}.{ms:03}"))
}

#[test]
fn end_to_end_reference_row() {
    let record = parse_record(&raw_row("jane doe", "1:00:00", "0:30:00")).unwrap();
    let row = normalize_record(&record, &NormalizationOptions::default()).unwrap();
    assert_eq!(row.get(OutputField::Timestamp), "2011-04-01T14:00:00-05:00");
    assert_eq!(row.get(OutputField::FullName), "JANE DOE");
    assert_eq!(row.get(OutputField::TotalDuration), "5400.0");
}

proptest! {
    #[test]
    fn short_zip_codes_pad_to_width(zip in "[0-9]{0,4}") {
        let padded = pad_zip_code(&zip);
        prop_assert_eq!(padded.len(), ZIP_CODE_WIDTH);
        prop_assert!(padded.ends_with(&zip));
        prop_assert!(padded[..ZIP_CODE_WIDTH - zip.len()].chars().all(|c| c == '0'));
    }

    #[test]
    fn long_zip_codes_pass_through(zip in "[0-9A-Za-z-]{5,12}") {
        prop_assert_eq!(pad_zip_code(&zip), zip);
    }

    #[test]
    fn name_normalization_is_idempotent(name in "[\\p{Latin} ,.'-]{0,24}") {
        let once = parse_record(&raw_row(&name, "0:0:0", "0:0:0")).unwrap();
        let twice = parse_record(&raw_row(once.full_name(), "0:0:0", "0:0:0")).unwrap();
        prop_assert_eq!(once.full_name(), twice.full_name());
    }

    #[test]
    fn timestamp_rule_is_deterministic(
        month in 1u32..=12,
        day in 1u32..=28,
        year in 0u32..100,
        hour in 1u32..=12,
        minute in 0u32..60,
        second in 0u32..60,
        pm in any::<bool>(),
    ) {
        let marker = if pm { "PM" } else { "AM" };
        let value = format!("{month}/{day}/{year:02} {hour}:{minute:02}:{second:02} {marker}");
        let first = normalize_timestamp(&value).unwrap();
        let second_run = normalize_timestamp(&value).unwrap();
        prop_assert!(first.ends_with("-05:00"));
        prop_assert_eq!(first, second_run);
    }

    #[test]
    fn total_is_sum_of_parts(foo in duration_text(), bar in duration_text()) {
        let foo_elapsed = parse_elapsed("foo_duration", &foo).unwrap();
        let bar_elapsed = parse_elapsed("bar_duration", &bar).unwrap();
        let record = parse_record(&raw_row("x", &foo, &bar)).unwrap();
        let total = total_duration(&record).unwrap();
        prop_assert_eq!(
            total.as_time_delta(),
            foo_elapsed.as_time_delta() + bar_elapsed.as_time_delta()
        );
    }
}
