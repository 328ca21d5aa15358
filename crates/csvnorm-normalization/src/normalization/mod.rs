//! Per-field normalization rules.
//!
//! - **datetime**: Pacific source timestamps to Eastern ISO 8601
//! - **duration**: `H:MM:SS[.fraction]` parsing and elapsed-time formatting
//! - **postal**: zip code zero-padding

pub mod datetime;
pub mod duration;
pub mod postal;

pub use datetime::{
    EASTERN, PACIFIC, SOURCE_TIMESTAMP_FORMAT, normalize_timestamp, parse_pacific_timestamp,
    to_eastern,
};
pub use duration::{Elapsed, format_iso8601_duration, format_seconds, parse_elapsed};
pub use postal::{ZIP_CODE_WIDTH, pad_zip_code};
