//! Output column enumeration.

use std::fmt;

/// One column of the normalized output, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputField {
    Timestamp,
    Address,
    ZipCode,
    FullName,
    FooDuration,
    BarDuration,
    TotalDuration,
    Notes,
}

impl OutputField {
    pub const COUNT: usize = 8;

    /// Every output column, in the order they are written.
    pub const ALL: [OutputField; Self::COUNT] = [
        OutputField::Timestamp,
        OutputField::Address,
        OutputField::ZipCode,
        OutputField::FullName,
        OutputField::FooDuration,
        OutputField::BarDuration,
        OutputField::TotalDuration,
        OutputField::Notes,
    ];

    /// Position of this column in a normalized row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// snake_case column name.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputField::Timestamp => "timestamp",
            OutputField::Address => "address",
            OutputField::ZipCode => "zip_code",
            OutputField::FullName => "full_name",
            OutputField::FooDuration => "foo_duration",
            OutputField::BarDuration => "bar_duration",
            OutputField::TotalDuration => "total_duration",
            OutputField::Notes => "notes",
        }
    }
}

impl fmt::Display for OutputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
