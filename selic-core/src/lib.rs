//! SELIC Core — fetch the SGS SELIC series, derive cumulative factors, export CSV.
//!
//! Pipeline stages, run strictly in sequence:
//! - `source`: one blocking GET against the SGS endpoint
//! - `normalize`: parse dates and rates, sort most recent first
//! - `accumulate`: reference periods and the backward cumulative factor
//! - `export`: semicolon-delimited file with a fixed header
//! - `report`: operator summary and progress callbacks
//! - `refresh`: the top-level boundary that turns failures into `false`

pub mod accumulate;
pub mod config;
pub mod error;
pub mod export;
pub mod normalize;
pub mod refresh;
pub mod report;
pub mod source;

pub use accumulate::{accumulate, reference_period, EnrichedRecord};
pub use config::{ConfigError, RefreshConfig};
pub use error::RefreshError;
pub use export::{format_accumulated, read_csv, write_csv, ExportedRow};
pub use normalize::{normalize, DatedRecord};
pub use refresh::{refresh, refresh_with, run_refresh};
pub use report::{NullReporter, RefreshReporter, RefreshSummary, StdoutReporter};
pub use source::{BcbProvider, RawRecord, SeriesProvider};
