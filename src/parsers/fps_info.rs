//! ADAS "FPS INFO" block extractor
//!
//! The ADAS diagnostic service periodically dumps a frame-rate block into its
//! log, interleaved with arbitrary other output:
//!
//! ```text
//! ------------ADAS FPS INFO------------
//! PCW  FCW  LDW  CDET  TSR  ANP  DET  RO  DBA  SRC
//! 30.0 29.5 30.1 15.0 10.2 5.0 8.0 3.0 2.0 1.0
//! ```
//!
//! Extraction runs in two passes over the whole text:
//! - Primary: the full banner, the exact ten-name header, then ten numbers
//! - Fallback (only when the primary pass finds nothing): the banner substring,
//!   then ten numbers starting the nearest following line that has them; header
//!   and blank lines in between may be spelled any way
//!
//! Both passes require exactly ten numeric tokens, so truncated blocks never match.

use regex::Regex;
use std::sync::LazyLock;

use super::types::{Field, MatchStrategy, RawRecord, RecordExtractor, FIELD_COUNT};

/// Banner line written ahead of each frame-rate block
pub const FPS_INFO_BANNER: &str = "------------ADAS FPS INFO------------";

/// Banner text without its dash padding, used by the fallback pass
pub const FPS_INFO_MARKER: &str = "ADAS FPS INFO";

/// Lexical shape of a value token: digits and dots
const NUMBER: &str = r"([\d.]+)";

fn value_group() -> String {
    vec![NUMBER; FIELD_COUNT].join(r"\s+")
}

static PRIMARY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let header = Field::ALL
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(r"\s+");
    let pattern = format!(
        r"{}\s+{}\s+{}",
        regex::escape(FPS_INFO_BANNER),
        header,
        value_group()
    );
    Regex::new(&pattern).expect("Failed to compile FPS info regex")
});

static FALLBACK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"{}(?s:.*?)\n[ \t]*{}",
        regex::escape(FPS_INFO_MARKER),
        value_group()
    );
    Regex::new(&pattern).expect("Failed to compile FPS info fallback regex")
});

/// Records found in a log together with the pass that found them
#[derive(Clone, Debug, Default)]
pub struct Extraction<'a> {
    pub records: Vec<RawRecord<'a>>,
    pub strategy: MatchStrategy,
}

impl Extraction<'_> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Extractor for ADAS frame-rate blocks
#[derive(Clone, Copy, Debug, Default)]
pub struct FpsInfoExtractor;

impl FpsInfoExtractor {
    /// Quick check for whether the text contains any frame-rate banner at all
    pub fn detect(text: &str) -> bool {
        text.contains(FPS_INFO_MARKER)
    }

    /// Run the primary pass, then the fallback pass if the primary found nothing
    pub fn extract_with_strategy<'a>(&self, text: &'a str) -> Extraction<'a> {
        let records = scan(&PRIMARY_PATTERN, text);
        if !records.is_empty() {
            tracing::debug!("Primary pattern matched {} FPS records", records.len());
            return Extraction {
                records,
                strategy: MatchStrategy::Primary,
            };
        }

        let records = scan(&FALLBACK_PATTERN, text);
        if !records.is_empty() {
            tracing::debug!(
                "Primary pattern found nothing, fallback matched {} FPS records",
                records.len()
            );
            return Extraction {
                records,
                strategy: MatchStrategy::Fallback,
            };
        }

        tracing::debug!("No FPS records found in {} bytes of text", text.len());
        Extraction::default()
    }
}

impl RecordExtractor for FpsInfoExtractor {
    fn extract<'a>(&self, text: &'a str) -> Vec<RawRecord<'a>> {
        self.extract_with_strategy(text).records
    }
}

/// Collect every non-overlapping match of `regex` in text order
fn scan<'a>(regex: &Regex, text: &'a str) -> Vec<RawRecord<'a>> {
    regex
        .captures_iter(text)
        .map(|caps| {
            let (_, tokens) = caps.extract();
            RawRecord::new(tokens)
        })
        .collect()
}
