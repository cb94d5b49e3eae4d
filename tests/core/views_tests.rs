//! Tests for presentation views
//!
//! Tests cover:
//! - Statistics table placeholders and formatting
//! - Chart series selection and non-positive filtering
//! - 1-based data table rows

use crate::common::samples::*;
use adasfps::analysis::MetricsEngine;
use adasfps::parsers::Field;
use adasfps::state::{field_color, DEFAULT_CHART_FIELDS};
use adasfps::views::{chart_series, data_table, format_value, summary_rows};

fn analyzed(text: &str) -> MetricsEngine {
    let mut engine = MetricsEngine::new();
    engine.analyze_text(text);
    engine
}

#[test]
fn test_format_value_two_decimals() {
    assert_eq!(format_value(30.0), "30.00");
    assert_eq!(format_value(0.124), "0.12");
    assert_eq!(format_value(29.999), "30.00");
}

#[test]
fn test_summary_rows_in_schema_order() {
    let engine = analyzed(&noisy_log(&[
        SAMPLE_VALUES,
        "32.0 29.5 30.1 15.0 10.2 5.0 8.0 3.0 2.0 1.0",
    ]));
    let rows = summary_rows(&engine);

    let fields: Vec<Field> = rows.iter().map(|r| r.field).collect();
    assert_eq!(fields, Field::ALL.to_vec());
    assert_eq!(rows[0].count, "2");
    assert_eq!(rows[0].mean, "31.00");
    assert_eq!(rows[0].min, "30.00");
    assert_eq!(rows[0].max, "32.00");
    assert_eq!(rows[0].std_dev, "1.41");
    assert_eq!(rows[1].std_dev, "0.00");
}

#[test]
fn test_default_chart_selection() {
    let engine = analyzed(&fps_block(SAMPLE_VALUES));
    let series = chart_series(&engine, DEFAULT_CHART_FIELDS);

    let fields: Vec<Field> = series.iter().map(|s| s.field).collect();
    assert_eq!(fields, vec![Field::Pcw, Field::Fcw, Field::Ldw]);
    assert_eq!(series[0].points, vec![[0.0, 30.0]]);
    assert_eq!(series[2].color, field_color(Field::Ldw));
}

#[test]
fn test_all_zero_field_not_charted() {
    let engine = analyzed(&noisy_log(&["30 0 30 0 0 0 0 0 0 0", "31 0 29 0 0 0 0 0 0 0"]));
    let series = chart_series(&engine, &Field::ALL);

    let fields: Vec<Field> = series.iter().map(|s| s.field).collect();
    assert_eq!(fields, vec![Field::Pcw, Field::Ldw]);
}

#[test]
fn test_data_table_numbering_and_cells() {
    let engine = analyzed(&noisy_log(&["1 2 3 4 5 6 7 8 9 10", "10 9 8 7 6 5 4 3 2 1.005"]));
    let table = data_table(&engine);

    assert_eq!(table.len(), 2);
    assert_eq!(table[0].index, 1);
    assert_eq!(table[1].index, 2);
    assert_eq!(table[0].cells[3], "4.00");
    assert_eq!(table[1].cells[0], "10.00");
}

#[test]
fn test_views_after_no_data_run() {
    let engine = analyzed("nothing useful");
    assert!(data_table(&engine).is_empty());
    assert!(chart_series(&engine, &Field::ALL).is_empty());
    assert!(summary_rows(&engine).iter().all(|r| r.stats.is_none()));
}
