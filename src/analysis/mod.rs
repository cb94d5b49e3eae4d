//! Analysis of extracted frame-rate records.
//!
//! - [`engine`] turns located records into aligned per-field series and owns
//!   the analysis state between runs
//! - [`statistics`] computes the summary figures shown for each field

pub mod engine;
pub mod statistics;

pub use engine::{
    parse_record, AnalysisSummary, EngineState, FieldParseError, FieldSeries, MetricsEngine,
};
pub use statistics::SummaryStats;
