use csvnorm_model::{
    DurationFormat, ErrorPolicy, HeaderMode, NormalizedRecord, OutputField, ProcessingOptions,
    RAW_FIELD_COUNT, RawRow, position,
};

fn record(name: &str, notes: Option<&str>) -> NormalizedRecord {
    NormalizedRecord::new(
        "4/1/11 11:00:00 AM",
        "123 Main St",
        "21",
        name,
        "1:00:00",
        "0:30:00",
        notes.map(str::to_string),
    )
}

#[test]
fn record_upper_cases_name_at_construction() {
    let rec = record("jane doe", Some("hi"));
    assert_eq!(rec.full_name(), "JANE DOE");
    // Reading twice gives the same stored value.
    assert_eq!(rec.full_name(), "JANE DOE");
}

#[test]
fn record_upper_cases_non_ascii_names() {
    let rec = record("renée straße", None);
    assert_eq!(rec.full_name(), "RENÉE STRASSE");
}

#[test]
fn record_keeps_other_fields_verbatim() {
    let rec = record("x", Some("  spaced  "));
    assert_eq!(rec.timestamp(), "4/1/11 11:00:00 AM");
    assert_eq!(rec.address(), "123 Main St");
    assert_eq!(rec.zip_code(), "21");
    assert_eq!(rec.foo_duration(), "1:00:00");
    assert_eq!(rec.bar_duration(), "0:30:00");
    assert_eq!(rec.notes(), Some("  spaced  "));
}

#[test]
fn empty_notes_are_absent() {
    assert_eq!(record("x", Some("")).notes(), None);
    assert_eq!(record("x", None).notes(), None);
}

#[test]
fn raw_row_positions() {
    let row = RawRow::new(
        2,
        ["ts", "addr", "zip", "name", "foo", "bar", "", "notes"]
            .into_iter()
            .map(String::from)
            .collect(),
    );
    assert_eq!(row.fields.len(), RAW_FIELD_COUNT);
    assert_eq!(row.fields[position::TIMESTAMP], "ts");
    assert_eq!(row.fields[position::FULL_NAME], "name");
    assert_eq!(row.fields[position::NOTES], "notes");
}

#[test]
fn output_field_names_are_snake_case() {
    assert_eq!(OutputField::Timestamp.to_string(), "timestamp");
    assert_eq!(OutputField::TotalDuration.to_string(), "total_duration");
    assert_eq!(OutputField::ZipCode.to_string(), "zip_code");
}

#[test]
fn processing_options_default_to_abort_passthrough_seconds() {
    let options = ProcessingOptions::default();
    assert_eq!(options.error_policy, ErrorPolicy::Abort);
    assert_eq!(options.header_mode, HeaderMode::Passthrough);
    assert_eq!(options.normalization.duration_format, DurationFormat::Seconds);
}

#[test]
fn processing_options_deserialize_from_partial_toml() {
    let options: ProcessingOptions = toml::from_str(
        r#"
error-policy = "skip-row"

[normalization]
duration-format = "iso8601"
"#,
    )
    .expect("parse options");
    assert_eq!(options.error_policy, ErrorPolicy::SkipRow);
    assert_eq!(options.header_mode, HeaderMode::Passthrough);
    assert_eq!(options.normalization.duration_format, DurationFormat::Iso8601);
}

#[test]
fn builder_methods_override_defaults() {
    let options = ProcessingOptions::new()
        .with_error_policy(ErrorPolicy::SkipRow)
        .with_header_mode(HeaderMode::Omit)
        .with_duration_format(DurationFormat::Iso8601);
    assert_eq!(options.error_policy, ErrorPolicy::SkipRow);
    assert_eq!(options.header_mode, HeaderMode::Omit);
    assert_eq!(options.normalization.duration_format, DurationFormat::Iso8601);
}
