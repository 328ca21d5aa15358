//! Output side of csvnorm: the normalized CSV sink.

pub mod csv_writer;

pub use csv_writer::{DEFAULT_OUTPUT_FILE, OutputError, RowWriter, create_output_file};
