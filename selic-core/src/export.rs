//! Semicolon-delimited export of enriched records.
//!
//! Layout:
//!
//! ```text
//! competencia;referencia;selic;selicacumulada
//! 2024-03-15;2024-01-01;10.50;1.0
//! 2024-01-15;2023-11-01;11.75;12.75
//! ```

use crate::accumulate::EnrichedRecord;
use crate::error::RefreshError;
use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;

pub const HEADER: [&str; 4] = ["competencia", "referencia", "selic", "selicacumulada"];
pub const DELIMITER: u8 = b';';

/// Output date format for both date columns.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a cumulative factor: the seed prints as `1.0`, everything else with
/// two decimals.
pub fn format_accumulated(value: f64) -> String {
    if value == 1.0 {
        "1.0".to_string()
    } else {
        format!("{value:.2}")
    }
}

/// One data row as written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedRow {
    pub competencia: NaiveDate,
    pub referencia: NaiveDate,
    pub selic: String,
    pub acumulada: String,
}

impl ExportedRow {
    pub fn from_record(record: &EnrichedRecord) -> Self {
        Self {
            competencia: record.competencia,
            referencia: record.referencia,
            selic: record.selic.clone(),
            acumulada: format_accumulated(record.acumulada),
        }
    }

    fn fields(&self) -> [String; 4] {
        [
            self.competencia.format(DATE_FORMAT).to_string(),
            self.referencia.format(DATE_FORMAT).to_string(),
            self.selic.clone(),
            self.acumulada.clone(),
        ]
    }
}

/// Write the header and one row per record into `writer`.
pub fn write_records<W: Write>(writer: W, records: &[EnrichedRecord]) -> Result<W, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for record in records {
        wtr.write_record(ExportedRow::from_record(record).fields())?;
    }

    wtr.into_inner().map_err(|e| e.into_error().into())
}

/// Render records to an in-memory string.
pub fn export_csv(records: &[EnrichedRecord]) -> Result<String, csv::Error> {
    let data = write_records(Vec::new(), records)?;
    // Every field is ASCII (dates, decimals and the fixed header).
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Create or truncate `path` and write the records to it.
pub fn write_csv(path: &Path, records: &[EnrichedRecord]) -> Result<(), RefreshError> {
    let file = std::fs::File::create(path).map_err(|e| RefreshError::write(path, e))?;
    let mut file = write_records(file, records).map_err(|e| RefreshError::write(path, e))?;
    file.flush().map_err(|e| RefreshError::write(path, e))?;
    Ok(())
}

/// Read a file produced by [`write_csv`].
pub fn read_csv(path: &Path) -> Result<Vec<ExportedRow>, RefreshError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_path(path)
        .map_err(|e| RefreshError::read(path, e))?;

    let headers = rdr.headers().map_err(|e| RefreshError::read(path, e))?;
    if headers.iter().ne(HEADER) {
        return Err(RefreshError::Payload(format!(
            "unexpected header in {}: {}",
            path.display(),
            headers.iter().collect::<Vec<_>>().join(";")
        )));
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| RefreshError::read(path, e))?;
        let field = |i: usize| record.get(i).unwrap_or_default();
        rows.push(ExportedRow {
            competencia: parse_iso_date(field(0))?,
            referencia: parse_iso_date(field(1))?,
            selic: field(2).to_string(),
            acumulada: field(3).to_string(),
        });
    }

    Ok(rows)
}

fn parse_iso_date(text: &str) -> Result<NaiveDate, RefreshError> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| RefreshError::DateParse {
        value: text.to_string(),
    })
}
