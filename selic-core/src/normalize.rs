//! Record parsing and ordering.

use crate::error::RefreshError;
use crate::source::RawRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the SGS API.
pub const SOURCE_DATE_FORMAT: &str = "%d/%m/%Y";

/// A raw record with its date and rate parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedRecord {
    pub date: NaiveDate,
    pub value: f64,
}

pub fn parse_date(text: &str) -> Result<NaiveDate, RefreshError> {
    NaiveDate::parse_from_str(text.trim(), SOURCE_DATE_FORMAT).map_err(|_| {
        RefreshError::DateParse {
            value: text.to_string(),
        }
    })
}

pub fn parse_value(text: &str) -> Result<f64, RefreshError> {
    let value: f64 = text.trim().parse().map_err(|_| RefreshError::NumberParse {
        value: text.to_string(),
    })?;

    // "NaN" and "inf" parse as f64 but are not rates.
    if !value.is_finite() {
        return Err(RefreshError::NumberParse {
            value: text.to_string(),
        });
    }
    Ok(value)
}

pub fn parse_record(raw: &RawRecord) -> Result<DatedRecord, RefreshError> {
    Ok(DatedRecord {
        date: parse_date(&raw.data)?,
        value: parse_value(&raw.valor)?,
    })
}

/// Parse every record and sort most recent first.
///
/// The first malformed record aborts the whole batch. The sort is stable, so
/// duplicate dates keep their source order.
pub fn normalize(raw: Vec<RawRecord>) -> Result<Vec<DatedRecord>, RefreshError> {
    let mut records = raw
        .iter()
        .map(parse_record)
        .collect::<Result<Vec<_>, _>>()?;

    records.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(records)
}
