//! adasfps - frame-rate telemetry analysis for ADAS diagnostic logs
//!
//! This library locates "ADAS FPS INFO" blocks inside free-form log text,
//! turns them into aligned per-metric series and computes summary statistics
//! for display or reporting.
//!
//! ## Module Structure
//!
//! - [`parsers`] - Field schema and the FPS block extractor
//! - [`analysis`] - Metrics engine and summary statistics
//! - [`state`] - Constants, chart palette and run outcomes
//! - [`views`] - Statistics table, chart series and data table projections
//! - [`report`] - Text and JSON report writer
//! - [`loader`] - Reading plain and gzip-compressed log files
//! - [`settings`] - User settings persistence

pub mod analysis;
pub mod loader;
pub mod parsers;
pub mod report;
pub mod settings;
pub mod state;
pub mod views;

pub use analysis::{MetricsEngine, SummaryStats};
pub use parsers::{Field, FpsInfoExtractor, RawRecord, RecordExtractor};
