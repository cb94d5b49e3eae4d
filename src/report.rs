//! Report writer for finished analysis runs.
//!
//! Produces either a fixed-width text report for terminals or a JSON document
//! for downstream tooling. Both are built from the same [`Report`] snapshot.

use serde::Serialize;
use std::fmt::Write;

use crate::analysis::{AnalysisSummary, MetricsEngine};
use crate::parsers::{Field, MatchStrategy};
use crate::state::AnalysisOutcome;
use crate::views::{chart_series, data_table, summary_rows, ChartSeries, SummaryRow, TableRow};

const FIELD_WIDTH: usize = 6;
const CELL_WIDTH: usize = 10;

/// Everything known about one analyzed log
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    /// Where the text came from (file path or "stdin")
    pub source: String,
    pub strategy: MatchStrategy,
    pub located: usize,
    pub accepted: usize,
    pub statistics: Vec<SummaryRow>,
    pub charts: Vec<ChartSeries>,
    pub rows: Vec<TableRow>,
}

impl Report {
    pub fn build(
        source: impl Into<String>,
        engine: &MetricsEngine,
        summary: AnalysisSummary,
        strategy: MatchStrategy,
        chart_fields: &[Field],
    ) -> Self {
        Self {
            source: source.into(),
            strategy,
            located: summary.located,
            accepted: summary.accepted,
            statistics: summary_rows(engine),
            charts: chart_series(engine, chart_fields),
            rows: data_table(engine),
        }
    }

    pub fn outcome(&self) -> AnalysisOutcome {
        AnalysisOutcome::new(
            AnalysisSummary {
                located: self.located,
                accepted: self.accepted,
            },
            self.strategy,
        )
    }
}

/// Render the report as plain text
pub fn render_text(report: &Report, include_table: bool) -> String {
    let mut out = String::new();
    let outcome = report.outcome();

    let _ = writeln!(out, "Source: {}", report.source);
    let _ = writeln!(out, "{}", outcome.status_message());
    if !outcome.has_data() {
        return out;
    }
    if report.strategy == MatchStrategy::Fallback {
        let _ = writeln!(out, "Note: header did not match exactly, used tolerant matching");
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<fw$}{:>cw$}{:>cw$}{:>cw$}{:>cw$}{:>cw$}",
        "Field",
        "Count",
        "Mean",
        "Min",
        "Max",
        "Std",
        fw = FIELD_WIDTH,
        cw = CELL_WIDTH
    );
    for row in &report.statistics {
        let _ = writeln!(
            out,
            "{:<fw$}{:>cw$}{:>cw$}{:>cw$}{:>cw$}{:>cw$}",
            row.field.name(),
            row.count,
            row.mean,
            row.min,
            row.max,
            row.std_dev,
            fw = FIELD_WIDTH,
            cw = CELL_WIDTH
        );
    }

    if !report.charts.is_empty() {
        let charted: Vec<&str> = report.charts.iter().map(|c| c.field.name()).collect();
        let _ = writeln!(out);
        let _ = writeln!(out, "Charted fields: {}", charted.join(", "));
    }

    if include_table {
        let _ = writeln!(out);
        let _ = write!(out, "{:>fw$}", "#", fw = FIELD_WIDTH);
        for field in Field::ALL {
            let _ = write!(out, "{:>cw$}", field.name(), cw = CELL_WIDTH);
        }
        let _ = writeln!(out);
        for row in &report.rows {
            let _ = write!(out, "{:>fw$}", row.index, fw = FIELD_WIDTH);
            for cell in &row.cells {
                let _ = write!(out, "{:>cw$}", cell, cw = CELL_WIDTH);
            }
            let _ = writeln!(out);
        }
    }

    out
}

/// Render the report as pretty-printed JSON
pub fn to_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
