//! Run summary and operator-facing progress reporting.

use crate::accumulate::EnrichedRecord;
use crate::error::RefreshError;
use crate::export::format_accumulated;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// What the operator sees after a successful refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshSummary {
    pub output: PathBuf,
    pub record_count: usize,
    pub oldest: NaiveDate,
    pub newest: NaiveDate,
    pub current_rate: String,
    pub current_factor: f64,
    /// Most recent records, newest first.
    pub preview: Vec<EnrichedRecord>,
}

impl RefreshSummary {
    /// Returns `None` for an empty record list.
    pub fn from_records(
        output: &Path,
        records: &[EnrichedRecord],
        preview_rows: usize,
    ) -> Option<Self> {
        let newest = records.first()?;
        let oldest = records.last()?;

        Some(Self {
            output: output.to_path_buf(),
            record_count: records.len(),
            oldest: oldest.competencia,
            newest: newest.competencia,
            current_rate: newest.selic.clone(),
            current_factor: newest.acumulada,
            preview: records.iter().take(preview_rows).cloned().collect(),
        })
    }

    /// Multi-line, human-readable rendering.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("File:           {}\n", self.output.display()));
        out.push_str(&format!("Records:        {}\n", self.record_count));
        out.push_str(&format!("Period:         {} to {}\n", self.oldest, self.newest));
        out.push_str(&format!(
            "Current SELIC:  {}% (accumulated: {})\n",
            self.current_rate,
            format_accumulated(self.current_factor)
        ));
        out.push('\n');
        out.push_str(&format!("--- Most recent {} ---\n", self.preview.len()));
        for r in &self.preview {
            out.push_str(&format!(
                "  {}: {}% -> {}\n",
                r.competencia,
                r.selic,
                format_accumulated(r.acumulada)
            ));
        }
        out
    }
}

/// Progress callbacks for a refresh run.
pub trait RefreshReporter {
    /// Called before the HTTP request goes out.
    fn on_fetch_start(&self, source: &str);

    /// Called once the payload has been decoded.
    fn on_fetched(&self, count: usize);

    /// Called after the file has been written.
    fn on_complete(&self, summary: &RefreshSummary);

    /// Called at the top-level boundary when any stage fails.
    fn on_failure(&self, error: &RefreshError);
}

/// Prints progress and the summary to stdout.
pub struct StdoutReporter;

impl RefreshReporter for StdoutReporter {
    fn on_fetch_start(&self, source: &str) {
        println!("Downloading SELIC series from {source}...");
    }

    fn on_fetched(&self, count: usize) {
        println!("  OK: {count} records");
    }

    fn on_complete(&self, summary: &RefreshSummary) {
        println!();
        println!("=== SELIC Refresh ===");
        print!("{}", summary.render());
        println!();
        println!("Done.");
    }

    fn on_failure(&self, error: &RefreshError) {
        println!("Error: {error}");
    }
}

/// Discards everything.
pub struct NullReporter;

impl RefreshReporter for NullReporter {
    fn on_fetch_start(&self, _source: &str) {}
    fn on_fetched(&self, _count: usize) {}
    fn on_complete(&self, _summary: &RefreshSummary) {}
    fn on_failure(&self, _error: &RefreshError) {}
}
