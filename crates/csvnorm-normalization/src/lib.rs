//! Normalizer for csvnorm.
//!
//! Each output column has its own pure rule in [`normalization`];
//! [`normalize_record`] composes them into the record-level transform.

pub mod normalization;
pub mod record;

pub use normalization::{
    EASTERN, Elapsed, PACIFIC, ZIP_CODE_WIDTH, format_iso8601_duration, format_seconds,
    normalize_timestamp, pad_zip_code, parse_elapsed, parse_pacific_timestamp, to_eastern,
};
pub use record::{normalize_record, project_field, total_duration};
