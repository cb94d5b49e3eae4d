//! Presentation-facing projections of the analysis state.
//!
//! A display surface needs three things from the engine: a statistics table,
//! chartable series and the raw per-record values. These helpers produce each
//! of them already ordered and formatted, so a front end only lays them out.

use serde::Serialize;

use crate::analysis::{MetricsEngine, SummaryStats};
use crate::parsers::{Field, FIELD_COUNT};
use crate::state::{field_color, DISPLAY_DECIMALS};

/// Format a value the way every table cell shows it
pub fn format_value(value: f64) -> String {
    format!("{:.*}", DISPLAY_DECIMALS, value)
}

/// One line of the statistics table
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryRow {
    pub field: Field,
    pub stats: Option<SummaryStats>,
    pub count: String,
    pub mean: String,
    pub min: String,
    pub max: String,
    pub std_dev: String,
}

impl SummaryRow {
    fn new(field: Field, stats: Option<SummaryStats>) -> Self {
        match stats {
            Some(s) => Self {
                field,
                stats,
                count: s.count.to_string(),
                mean: format_value(s.mean),
                min: format_value(s.min),
                max: format_value(s.max),
                std_dev: format_value(s.std_dev),
            },
            // Placeholders shown before any data has been analyzed
            None => Self {
                field,
                stats,
                count: "0".to_string(),
                mean: format_value(0.0),
                min: format_value(0.0),
                max: format_value(0.0),
                std_dev: format_value(0.0),
            },
        }
    }
}

/// Statistics table in schema order, from the displayed snapshot
pub fn summary_rows(engine: &MetricsEngine) -> Vec<SummaryRow> {
    Field::ALL
        .iter()
        .map(|&field| SummaryRow::new(field, engine.displayed_statistics(field)))
        .collect()
}

/// A single line on the FPS chart
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSeries {
    pub field: Field,
    pub color: [u8; 3],
    /// `[record index, value]` pairs, index starting at 0
    pub points: Vec<[f64; 2]>,
}

/// Series for the selected fields that have something worth plotting
///
/// Fields come back in schema order regardless of selection order. A field
/// with no values, or with no value above zero, is left out.
pub fn chart_series(engine: &MetricsEngine, selection: &[Field]) -> Vec<ChartSeries> {
    engine
        .series()
        .iter()
        .filter(|(field, _)| selection.contains(field))
        .filter(|(_, values)| values.iter().any(|&v| v > 0.0))
        .map(|(field, values)| ChartSeries {
            field,
            color: field_color(field),
            points: values
                .iter()
                .enumerate()
                .map(|(i, &v)| [i as f64, v])
                .collect(),
        })
        .collect()
}

/// One record in the data list
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableRow {
    /// 1-based record number
    pub index: usize,
    pub cells: [String; FIELD_COUNT],
}

/// Every accepted record, formatted for a table
pub fn data_table(engine: &MetricsEngine) -> Vec<TableRow> {
    let series = engine.series();
    (0..series.len())
        .filter_map(|i| series.row(i).map(|row| (i, row)))
        .map(|(i, row)| TableRow {
            index: i + 1,
            cells: row.map(format_value),
        })
        .collect()
}
