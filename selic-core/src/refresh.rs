//! Top-level refresh: fetch, normalize, accumulate, write, summarize.
//!
//! `run_refresh` propagates typed errors. `refresh` and `refresh_with` are the
//! single catch-all boundary that turns any failure into `false`.

use crate::accumulate::accumulate;
use crate::config::RefreshConfig;
use crate::error::RefreshError;
use crate::export::write_csv;
use crate::normalize::normalize;
use crate::report::{RefreshReporter, RefreshSummary};
use crate::source::{BcbProvider, SeriesProvider};
use tracing::{debug, error, info};

/// Run every stage in order. Nothing touches the output file until the
/// series has been fetched, parsed and enriched.
pub fn run_refresh(
    provider: &dyn SeriesProvider,
    config: &RefreshConfig,
    reporter: &dyn RefreshReporter,
) -> Result<RefreshSummary, RefreshError> {
    config.validate()?;

    reporter.on_fetch_start(provider.name());
    let raw = provider.fetch()?;
    if raw.is_empty() {
        return Err(RefreshError::EmptySeries);
    }
    info!(provider = provider.name(), records = raw.len(), "series fetched");
    reporter.on_fetched(raw.len());

    let sorted = normalize(raw)?;
    debug!(
        newest = %sorted[0].date,
        oldest = %sorted[sorted.len() - 1].date,
        "series sorted"
    );

    let records = accumulate(&sorted)?;

    write_csv(&config.output, &records)?;
    info!(path = %config.output.display(), rows = records.len(), "csv written");

    let summary = RefreshSummary::from_records(&config.output, &records, config.preview_rows)
        .ok_or(RefreshError::EmptySeries)?;
    reporter.on_complete(&summary);
    Ok(summary)
}

/// Refresh from the configured SGS endpoint. Returns `false` on any failure.
pub fn refresh(config: &RefreshConfig, reporter: &dyn RefreshReporter) -> bool {
    match BcbProvider::from_config(config) {
        Ok(provider) => refresh_with(&provider, config, reporter),
        Err(e) => fail(&e, reporter),
    }
}

/// Refresh from an arbitrary provider. Returns `false` on any failure.
pub fn refresh_with(
    provider: &dyn SeriesProvider,
    config: &RefreshConfig,
    reporter: &dyn RefreshReporter,
) -> bool {
    match run_refresh(provider, config, reporter) {
        Ok(_) => true,
        Err(e) => fail(&e, reporter),
    }
}

fn fail(err: &RefreshError, reporter: &dyn RefreshReporter) -> bool {
    error!(error = %err, "refresh failed");
    reporter.on_failure(err);
    false
}
