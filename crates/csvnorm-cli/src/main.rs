//! csvnorm: normalize CSV rows from standard input.

use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use csvnorm_cli::config::load_options;
use csvnorm_cli::logging::{LogConfig, LogFormat, init_logging};
use csvnorm_cli::pipeline::normalize_to_file;
use csvnorm_cli::types::RunSummary;
use csvnorm_model::ProcessingOptions;

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(summary) => {
            print_summary(&summary, &cli.output);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<RunSummary> {
    let options = options_from_cli(cli)?;
    let stdin = io::stdin().lock();
    let summary = normalize_to_file(stdin, &cli.output, &options)?;
    Ok(summary)
}

/// Defaults, then the config file, then flags.
fn options_from_cli(cli: &Cli) -> anyhow::Result<ProcessingOptions> {
    let mut options = match &cli.config {
        Some(path) => load_options(path).context("invalid --config")?,
        None => ProcessingOptions::default(),
    };
    if let Some(policy) = cli.on_error {
        options = options.with_error_policy(policy.into());
    }
    if let Some(mode) = cli.header {
        options = options.with_header_mode(mode.into());
    }
    if let Some(format) = cli.duration_format {
        options = options.with_duration_format(format.into());
    }
    Ok(options)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
