//! Process-wide constants and run outcome types.
//!
//! The field schema itself lives in [`crate::parsers::types`]; this module holds
//! the presentation defaults that accompany it.

use crate::analysis::AnalysisSummary;
use crate::parsers::{Field, MatchStrategy};

// ============================================================================
// Constants
// ============================================================================

/// Log file extensions accepted by the loader (`gz` archives are decompressed)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["gz", "log", "txt"];

/// Fields charted when the user has not chosen any
pub const DEFAULT_CHART_FIELDS: &[Field] = &[Field::Pcw, Field::Fcw, Field::Ldw];

/// Decimal places used for every displayed value
pub const DISPLAY_DECIMALS: usize = 2;

/// Line colours, one per field in schema order (the "tab10" qualitative palette)
pub const CHART_COLORS: [[u8; 3]; 10] = [
    [31, 119, 180],  // Blue
    [255, 127, 14],  // Orange
    [44, 160, 44],   // Green
    [214, 39, 40],   // Red
    [148, 103, 189], // Purple
    [140, 86, 75],   // Brown
    [227, 119, 194], // Pink
    [127, 127, 127], // Gray
    [188, 189, 34],  // Olive
    [23, 190, 207],  // Cyan
];

/// Colour assigned to a field's chart line
pub fn field_color(field: Field) -> [u8; 3] {
    CHART_COLORS[field.index() % CHART_COLORS.len()]
}

// ============================================================================
// Run outcome
// ============================================================================

/// Result of analyzing one block of log text, for status reporting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Records were found and at least one survived parsing
    Analyzed {
        summary: AnalysisSummary,
        strategy: MatchStrategy,
    },
    /// Nothing usable was found in the text
    NoData { located: usize },
}

impl AnalysisOutcome {
    pub fn new(summary: AnalysisSummary, strategy: MatchStrategy) -> Self {
        if summary.accepted == 0 {
            AnalysisOutcome::NoData {
                located: summary.located,
            }
        } else {
            AnalysisOutcome::Analyzed { summary, strategy }
        }
    }

    pub fn has_data(&self) -> bool {
        matches!(self, AnalysisOutcome::Analyzed { .. })
    }

    /// One-line status text for a status bar or console
    pub fn status_message(&self) -> String {
        match self {
            AnalysisOutcome::Analyzed { summary, .. } if summary.discarded() > 0 => format!(
                "Analyzed {} FPS records ({} malformed records skipped)",
                summary.located,
                summary.discarded()
            ),
            AnalysisOutcome::Analyzed { summary, .. } => {
                format!("Analyzed {} FPS records", summary.located)
            }
            AnalysisOutcome::NoData { .. } => "No FPS data found in the log content".to_string(),
        }
    }
}
