//! Reference periods and the backward cumulative factor.
//!
//! The factor is a fold over the descending sequence: the most recent period
//! is pinned at 1.0 and every older period adds its own rate to the factor of
//! the period right after it.

use crate::error::RefreshError;
use crate::normalize::DatedRecord;
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Factor assigned to the most recent period.
pub const SEED_FACTOR: f64 = 1.0;

/// A period ready for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    /// Period the rate applies to.
    pub competencia: NaiveDate,
    /// First day of the month two months before `competencia`.
    pub referencia: NaiveDate,
    /// Rate with exactly two decimals.
    pub selic: String,
    /// Cumulative factor.
    pub acumulada: f64,
}

/// First day of the month two calendar months before `date`.
///
/// January and February roll back into November and December of the
/// previous year.
pub fn reference_period(date: NaiveDate) -> Result<NaiveDate, RefreshError> {
    date.with_day(1)
        .and_then(|first| first.checked_sub_months(Months::new(2)))
        .ok_or_else(|| RefreshError::DateOutOfRange(date.to_string()))
}

/// Enrich a most-recent-first sequence.
///
/// Must run in index order: each factor depends on the one before it.
pub fn accumulate(records: &[DatedRecord]) -> Result<Vec<EnrichedRecord>, RefreshError> {
    let mut out: Vec<EnrichedRecord> = Vec::with_capacity(records.len());

    for record in records {
        let acumulada = match out.last() {
            None => SEED_FACTOR,
            Some(prev) => record.value + prev.acumulada,
        };

        out.push(EnrichedRecord {
            competencia: record.date,
            referencia: reference_period(record.date)?,
            selic: format!("{:.2}", record.value),
            acumulada,
        });
    }

    Ok(out)
}
