//! Run configuration loaded from TOML.
//!
//! ```toml
//! error-policy = "skip-row"
//! header-mode = "omit"
//!
//! [normalization]
//! duration-format = "iso8601"
//! ```
//!
//! Every key is optional. Missing keys keep their defaults and command-line
//! flags override whatever the file sets.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use csvnorm_model::ProcessingOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parse options from TOML text.
pub fn parse_options(content: &str) -> Result<ProcessingOptions, toml::de::Error> {
    toml::from_str(content)
}

/// Load options from a TOML file.
pub fn load_options(path: &Path) -> Result<ProcessingOptions, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let options = parse_options(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?options, "loaded config file");
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvnorm_model::{DurationFormat, ErrorPolicy, HeaderMode};

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_options("").unwrap(), ProcessingOptions::default());
    }

    #[test]
    fn reads_every_key() {
        let options = parse_options(
            "error-policy = \"skip-row\"\n\
             header-mode = \"omit\"\n\
             [normalization]\n\
             duration-format = \"iso8601\"\n",
        )
        .unwrap();
        assert_eq!(options.error_policy, ErrorPolicy::SkipRow);
        assert_eq!(options.header_mode, HeaderMode::Omit);
        assert_eq!(
            options.normalization.duration_format,
            DurationFormat::Iso8601
        );
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!(parse_options("error-policy = \"retry\"").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("csvnorm.toml");
        let error = load_options(&path).unwrap_err();
        assert!(matches!(error, ConfigError::Read { .. }));
        assert!(error.to_string().contains("csvnorm.toml"));
    }
}
