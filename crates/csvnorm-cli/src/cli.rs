//! Command-line arguments for `csvnorm`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use csvnorm_model::{DurationFormat, ErrorPolicy, HeaderMode};
use csvnorm_output::DEFAULT_OUTPUT_FILE;

#[derive(Parser)]
#[command(
    name = "csvnorm",
    version,
    about = "Normalize CSV rows read from standard input",
    long_about = "Read CSV from standard input and write normalized rows to a file.\n\n\
                  Timestamps move from US Pacific to US Eastern time, zip codes are\n\
                  padded to five characters, names are upper-cased and durations are\n\
                  converted to seconds with a recomputed total."
)]
pub struct Cli {
    /// Output file, created or truncated.
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// What to do with a row that fails normalization [default: abort].
    #[arg(long = "on-error", value_enum)]
    pub on_error: Option<OnErrorArg>,

    /// Whether the input header is copied to the output [default: passthrough].
    #[arg(long = "header", value_enum)]
    pub header: Option<HeaderArg>,

    /// Representation of the duration columns [default: seconds].
    #[arg(long = "duration-format", value_enum)]
    pub duration_format: Option<DurationFormatArg>,

    /// TOML file with processing options. Flags override its values.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Allow row values (names, addresses) in trace-level logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OnErrorArg {
    /// Stop at the first failing row.
    Abort,
    /// Log the failing row and continue.
    Skip,
}

impl From<OnErrorArg> for ErrorPolicy {
    fn from(arg: OnErrorArg) -> Self {
        match arg {
            OnErrorArg::Abort => ErrorPolicy::Abort,
            OnErrorArg::Skip => ErrorPolicy::SkipRow,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum HeaderArg {
    Passthrough,
    Omit,
}

impl From<HeaderArg> for HeaderMode {
    fn from(arg: HeaderArg) -> Self {
        match arg {
            HeaderArg::Passthrough => HeaderMode::Passthrough,
            HeaderArg::Omit => HeaderMode::Omit,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DurationFormatArg {
    Seconds,
    Iso8601,
}

impl From<DurationFormatArg> for DurationFormat {
    fn from(arg: DurationFormatArg) -> Self {
        match arg {
            DurationFormatArg::Seconds => DurationFormat::Seconds,
            DurationFormatArg::Iso8601 => DurationFormat::Iso8601,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
