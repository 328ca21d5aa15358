//! Input side of csvnorm.
//!
//! - [`CsvSource`] reads a comma-delimited stream, consuming the header and
//!   yielding [`RawRow`](csvnorm_model::RawRow)s.
//! - [`parse_record`] is the Record Parser: it maps a raw row onto a
//!   [`NormalizedRecord`](csvnorm_model::NormalizedRecord).

pub mod csv_source;
pub mod record_parser;

pub use csv_source::{CsvSource, IngestError};
pub use record_parser::parse_record;
