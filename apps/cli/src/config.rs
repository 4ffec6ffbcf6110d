//! # CLI Configuration
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults; command-line flags override what is loaded here.
//!
//! | Variable             | Default             | Meaning                         |
//! |----------------------|---------------------|---------------------------------|
//! | `RECEIPT_OUTPUT_DIR` | `.`                 | existing dir for new receipts   |
//! | `RECEIPT_LOG`        | `warn,receipt=info` | log filter when `RUST_LOG` unset |
//! | `RECEIPT_NOW`        | local clock         | pinned validation instant       |

use chrono::{Local, NaiveDateTime};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Format accepted by `RECEIPT_NOW`.
pub const NOW_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DEFAULT_LOG_FILTER: &str = "warn,receipt=info";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Existing directory new receipt files are written to.
    pub output_dir: PathBuf,

    /// Fallback tracing filter when `RUST_LOG` is not set.
    pub log_filter: String,

    /// Pins "now" for header date checks; `None` uses the local clock.
    pub fixed_now: Option<NaiveDateTime>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            output_dir: PathBuf::from("."),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            fixed_now: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_vars(env::vars().collect())
    }

    /// Builds the configuration from an explicit variable map.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = CliConfig::default();

        let output_dir = vars
            .get("RECEIPT_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);
        if !output_dir.is_dir() {
            return Err(ConfigError::InvalidValue("RECEIPT_OUTPUT_DIR".to_string()));
        }

        let log_filter = vars
            .get("RECEIPT_LOG")
            .cloned()
            .unwrap_or(defaults.log_filter);

        let fixed_now = vars
            .get("RECEIPT_NOW")
            .map(|raw| NaiveDateTime::parse_from_str(raw, NOW_FORMAT))
            .transpose()
            .map_err(|_| ConfigError::InvalidValue("RECEIPT_NOW".to_string()))?;

        Ok(CliConfig {
            output_dir,
            log_filter,
            fixed_now,
        })
    }

    /// The instant header dates are validated against.
    pub fn now(&self) -> NaiveDateTime {
        self.fixed_now
            .unwrap_or_else(|| Local::now().naive_local())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_vars(HashMap::new()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::from_vars(vars(&[
            ("RECEIPT_OUTPUT_DIR", dir.path().to_str().unwrap()),
            ("RECEIPT_LOG", "debug"),
            ("RECEIPT_NOW", "2024-01-20T08:00:00"),
        ]))
        .unwrap();

        assert_eq!(config.output_dir, dir.path());
        assert_eq!(config.log_filter, "debug");
        assert_eq!(
            config.now(),
            NaiveDate::from_ymd_opt(2024, 1, 20)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_invalid_values() {
        let err = CliConfig::from_vars(vars(&[("RECEIPT_NOW", "yesterday")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for RECEIPT_NOW");

        let err = CliConfig::from_vars(vars(&[("RECEIPT_OUTPUT_DIR", "")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for RECEIPT_OUTPUT_DIR");
    }

    #[test]
    fn test_output_dir_must_be_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_dir");
        let err = CliConfig::from_vars(vars(&[("RECEIPT_OUTPUT_DIR", missing.to_str().unwrap())]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for RECEIPT_OUTPUT_DIR");

        let file = dir.path().join("file.txt");
        std::fs::write(&file, "").unwrap();
        let err = CliConfig::from_vars(vars(&[("RECEIPT_OUTPUT_DIR", file.to_str().unwrap())]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for RECEIPT_OUTPUT_DIR");
    }
}
