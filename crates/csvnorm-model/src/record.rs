//! Positional row types.
//!
//! A [`RawRow`] is what the input stream yields; a [`NormalizedRecord`] is
//! the typed, immutable view built from it; a [`NormalizedRow`] is the final
//! ordered sequence of output fields.

use crate::enums::OutputField;

/// Number of positions a data row must carry.
pub const RAW_FIELD_COUNT: usize = 8;

/// Field positions in a raw input row. Position 6 is carried by the input
/// but never read.
pub mod position {
    pub const TIMESTAMP: usize = 0;
    pub const ADDRESS: usize = 1;
    pub const ZIP_CODE: usize = 2;
    pub const FULL_NAME: usize = 3;
    pub const FOO_DURATION: usize = 4;
    pub const BAR_DURATION: usize = 5;
    pub const NOTES: usize = 7;
}

/// One data row exactly as read from the input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based physical line the record started on.
    pub line: u64,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }
}

/// Typed record built from one [`RawRow`].
///
/// Fields are private so a record cannot change after construction. There
/// is no total duration field; the total is derived from the two duration
/// fields every time it is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    timestamp: String,
    address: String,
    zip_code: String,
    full_name: String,
    foo_duration: String,
    bar_duration: String,
    notes: Option<String>,
}

impl NormalizedRecord {
    /// Build a record. `full_name` is upper-cased here, once.
    pub fn new(
        timestamp: impl Into<String>,
        address: impl Into<String>,
        zip_code: impl Into<String>,
        full_name: &str,
        foo_duration: impl Into<String>,
        bar_duration: impl Into<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            address: address.into(),
            zip_code: zip_code.into(),
            full_name: full_name.to_uppercase(),
            foo_duration: foo_duration.into(),
            bar_duration: bar_duration.into(),
            notes: notes.filter(|value| !value.is_empty()),
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn foo_duration(&self) -> &str {
        &self.foo_duration
    }

    pub fn bar_duration(&self) -> &str {
        &self.bar_duration
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// The ordered output fields for one record, in [`OutputField::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    fields: [String; OutputField::COUNT],
}

impl NormalizedRow {
    pub fn new(fields: [String; OutputField::COUNT]) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: OutputField) -> &str {
        &self.fields[field.index()]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.fields
    }
}
