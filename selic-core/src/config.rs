//! Refresh configuration.
//!
//! Defaults hold the fixed endpoint, timeout and output name. A TOML document
//! may override any subset of them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// SGS series 4390 (SELIC accumulated in the month), full history as JSON.
pub const DEFAULT_URL: &str = "https://api.bcb.gov.br/dados/serie/bcdata.sgs.4390/dados?formato=json";
pub const DEFAULT_OUTPUT: &str = "selic_atualizada.csv";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Series endpoint.
    pub url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Destination file; truncated on every run.
    pub output: PathBuf,

    /// Number of most recent records shown in the summary.
    pub preview_rows: usize,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl RefreshConfig {
    /// Default configuration writing to `output`.
    pub fn with_output(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::Invalid("url must not be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be positive".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output must not be empty".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_fixed_values() {
        let config = RefreshConfig::default();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.output, PathBuf::from("selic_atualizada.csv"));
        assert_eq!(config.preview_rows, 5);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = RefreshConfig::from_toml("output = \"out/selic.csv\"\n").unwrap();
        assert_eq!(config.output, PathBuf::from("out/selic.csv"));
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(RefreshConfig::from_toml("").unwrap(), RefreshConfig::default());
    }

    #[test]
    fn zero_timeout_rejected() {
        let err = RefreshConfig::from_toml("timeout_secs = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_rejected() {
        let err = RefreshConfig::from_toml("timeout_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn with_output_overrides_only_path() {
        let config = RefreshConfig::with_output("x.csv");
        assert_eq!(config.output, PathBuf::from("x.csv"));
        assert_eq!(config.url, DEFAULT_URL);
    }
}
