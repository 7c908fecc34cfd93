//! Structured error types for a refresh run.
//!
//! Every stage reports its own kind so the top-level boundary can log the
//! precise failure even though the operator only sees a one-line diagnostic.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("network unreachable: {0}")]
    Transport(String),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("unexpected payload: {0}")]
    Payload(String),

    #[error("series is empty")]
    EmptySeries,

    #[error("invalid date '{value}' (expected dd/mm/yyyy)")]
    DateParse { value: String },

    #[error("invalid rate '{value}'")]
    NumberParse { value: String },

    #[error("date out of range: {0}")]
    DateOutOfRange(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

impl RefreshError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: impl Into<csv::Error>) -> Self {
        Self::Write {
            path: path.into(),
            source: source.into(),
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: impl Into<csv::Error>) -> Self {
        Self::Read {
            path: path.into(),
            source: source.into(),
        }
    }
}
