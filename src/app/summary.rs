use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::metrics::{ALL_LABELS, CounterStore, SUMMARY_ORDER};

use super::runner::RunReport;

/// One `<label> total: \t<count>` line per summary label, in fixed order.
#[must_use]
pub fn summary_lines(counters: &CounterStore) -> Vec<String> {
    SUMMARY_ORDER
        .iter()
        .map(|label| format!("{} total: \t{}", label, counters.get(label)))
        .collect()
}

#[derive(Debug, Serialize)]
pub struct JsonSummary {
    #[serde(flatten)]
    pub counts: BTreeMap<&'static str, u64>,
    pub attempts: u64,
    pub ticks: u64,
    pub unfinished: u64,
}

impl JsonSummary {
    #[must_use]
    pub fn from_report(report: &RunReport) -> Self {
        let counts = ALL_LABELS
            .iter()
            .map(|label| (*label, report.counters.get(label)))
            .collect();
        Self {
            counts,
            attempts: report.stats.spawned,
            ticks: report.stats.ticks,
            unfinished: report.unfinished,
        }
    }
}

/// Writes the final summary to stdout.
///
/// # Errors
///
/// Returns an error when stdout cannot be written or JSON encoding fails.
pub fn print_summary(report: &RunReport, format: OutputFormat) -> AppResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            for line in summary_lines(&report.counters) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, &JsonSummary::from_report(report))?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
