//! Metrics engine: numeric conversion of located records and per-field series.
//!
//! The engine owns the analysis state for one log. Every `analyze` call fully
//! replaces the previous series; records are accepted all-or-nothing so that
//! index `i` of every field series always refers to the same source record.

use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::sync::LazyLock;
use thiserror::Error;

use super::statistics::SummaryStats;
use crate::parsers::{Field, FpsInfoExtractor, MatchStrategy, RawRecord, FIELD_COUNT};

/// A record token that could not be read as a number
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field} token {token:?} is not a number")]
pub struct FieldParseError {
    pub field: Field,
    pub token: String,
}

/// Same digit class the extractor lexes value tokens with
static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\d\z").expect("Failed to compile digit regex"));

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of a non-ASCII decimal digit
///
/// Unicode assigns every decimal digit set a contiguous run of ten code points
/// from zero to nine, so the value is the offset from the start of the run.
fn decimal_digit_value(c: char) -> Option<u32> {
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

/// Rewrite decimal digits of any script as ASCII digits
pub fn normalize_digits(token: &str) -> Cow<'_, str> {
    if token.is_ascii() {
        return Cow::Borrowed(token);
    }
    Cow::Owned(
        token
            .chars()
            .map(|c| match decimal_digit_value(c) {
                Some(value) if !c.is_ascii() => char::from(b'0' + value as u8),
                _ => c,
            })
            .collect(),
    )
}

/// Convert all ten tokens of a record, failing on the first bad one
pub fn parse_record(record: &RawRecord<'_>) -> Result<[f64; FIELD_COUNT], FieldParseError> {
    let mut values = [0.0; FIELD_COUNT];
    for (field, token) in record.iter() {
        values[field.index()] = normalize_digits(token)
            .parse::<f64>()
            .map_err(|_| FieldParseError {
                field,
                token: token.to_string(),
            })?;
    }
    Ok(values)
}

/// Ordered values for each field, one entry per accepted record
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldSeries {
    values: [Vec<f64>; FIELD_COUNT],
}

impl FieldSeries {
    /// Append one accepted record across all fields
    pub fn push_record(&mut self, values: [f64; FIELD_COUNT]) {
        for (series, value) in self.values.iter_mut().zip(values) {
            series.push(value);
        }
    }

    pub fn get(&self, field: Field) -> &[f64] {
        &self.values[field.index()]
    }

    /// Number of accepted records (all series share this length)
    pub fn len(&self) -> usize {
        self.values[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values of record `index` across all fields, in schema order
    pub fn row(&self, index: usize) -> Option<[f64; FIELD_COUNT]> {
        if index >= self.len() {
            return None;
        }
        Some(std::array::from_fn(|i| self.values[i][index]))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[f64])> {
        Field::ALL
            .iter()
            .map(move |&f| (f, self.values[f.index()].as_slice()))
    }

    pub fn clear(&mut self) {
        for series in &mut self.values {
            series.clear();
        }
    }
}

/// Counts reported by one analysis run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    /// Records located in the text
    pub located: usize,
    /// Records whose ten tokens all parsed
    pub accepted: usize,
}

impl AnalysisSummary {
    pub fn discarded(&self) -> usize {
        self.located.saturating_sub(self.accepted)
    }
}

/// Lifecycle of the analysis state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Empty,
    Populated,
}

/// Owner of the current field series and the statistics last shown for them
#[derive(Clone, Debug, Default)]
pub struct MetricsEngine {
    series: FieldSeries,
    displayed: [Option<SummaryStats>; FIELD_COUNT],
}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the analysis state with the values of `records`
    ///
    /// A record with any unparseable token contributes nothing. Displayed
    /// statistics are refreshed afterwards with [`Self::update_statistics`].
    pub fn analyze(&mut self, records: &[RawRecord<'_>]) -> AnalysisSummary {
        self.series.clear();

        for (i, record) in records.iter().enumerate() {
            match parse_record(record) {
                Ok(values) => self.series.push_record(values),
                Err(e) => tracing::warn!("Skipping FPS record {}: {}", i + 1, e),
            }
        }

        self.update_statistics();

        let summary = AnalysisSummary {
            located: records.len(),
            accepted: self.series.len(),
        };
        tracing::info!(
            "Analyzed {} FPS records ({} discarded)",
            summary.located,
            summary.discarded()
        );
        summary
    }

    /// Extract records from log text and analyze them
    pub fn analyze_text(&mut self, text: &str) -> (AnalysisSummary, MatchStrategy) {
        let extraction = FpsInfoExtractor.extract_with_strategy(text);
        let summary = self.analyze(&extraction.records);
        (summary, extraction.strategy)
    }

    /// Recompute displayed statistics for every field that has data
    ///
    /// Fields with an empty series keep whatever was displayed before;
    /// call [`Self::clear`] first for a hard reset.
    pub fn update_statistics(&mut self) {
        for (field, values) in self.series.iter() {
            if let Some(stats) = SummaryStats::from_values(values) {
                self.displayed[field.index()] = Some(stats);
            }
        }
    }

    /// Empty every series and forget displayed statistics
    pub fn clear(&mut self) {
        self.series.clear();
        self.displayed = [None; FIELD_COUNT];
    }

    /// Statistics computed from the current series
    pub fn statistics(&self, field: Field) -> Option<SummaryStats> {
        SummaryStats::from_values(self.series.get(field))
    }

    /// Statistics as of the last [`Self::update_statistics`]
    pub fn displayed_statistics(&self, field: Field) -> Option<SummaryStats> {
        self.displayed[field.index()]
    }

    pub fn series(&self) -> &FieldSeries {
        &self.series
    }

    pub fn state(&self) -> EngineState {
        if self.series.is_empty() {
            EngineState::Empty
        } else {
            EngineState::Populated
        }
    }
}
