use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Number of metrics carried by every frame-rate record
pub const FIELD_COUNT: usize = 10;

/// Frame-rate metrics reported by the ADAS subsystem, in log column order
#[derive(
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Field {
    Pcw,
    Fcw,
    Ldw,
    Cdet,
    Tsr,
    Anp,
    Det,
    Ro,
    Dba,
    Src,
}

impl Field {
    /// All fields in schema order
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Pcw,
        Field::Fcw,
        Field::Ldw,
        Field::Cdet,
        Field::Tsr,
        Field::Anp,
        Field::Det,
        Field::Ro,
        Field::Dba,
        Field::Src,
    ];

    /// Positional column of this field within a record
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Upper-case name as it appears in the log header
    pub fn name(self) -> &'static str {
        match self {
            Field::Pcw => "PCW",
            Field::Fcw => "FCW",
            Field::Ldw => "LDW",
            Field::Cdet => "CDET",
            Field::Tsr => "TSR",
            Field::Anp => "ANP",
            Field::Det => "DET",
            Field::Ro => "RO",
            Field::Dba => "DBA",
            Field::Src => "SRC",
        }
    }
}

/// One located frame-rate record: ten text tokens aligned to [`Field::ALL`]
///
/// Tokens borrow from the log text they were found in and are only
/// lexically numeric; converting them to numbers is the engine's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawRecord<'a> {
    tokens: [&'a str; FIELD_COUNT],
}

impl<'a> RawRecord<'a> {
    pub fn new(tokens: [&'a str; FIELD_COUNT]) -> Self {
        Self { tokens }
    }

    /// Token captured for a given field
    #[inline]
    pub fn token(&self, field: Field) -> &'a str {
        self.tokens[field.index()]
    }

    pub fn tokens(&self) -> &[&'a str; FIELD_COUNT] {
        &self.tokens
    }

    /// Field/token pairs in schema order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'a str)> + '_ {
        Field::ALL.iter().map(move |&f| (f, self.token(f)))
    }
}

/// Which matching pass produced a set of records
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum MatchStrategy {
    /// Banner followed by the exact field-name header
    Primary,
    /// Banner substring with a loosely formatted header line
    Fallback,
    /// Neither pass found anything
    #[default]
    None,
}

impl MatchStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            MatchStrategy::Primary => "primary",
            MatchStrategy::Fallback => "fallback",
            MatchStrategy::None => "none",
        }
    }
}

/// Trait for locating telemetry records inside free-form log text
pub trait RecordExtractor {
    fn extract<'a>(&self, text: &'a str) -> Vec<RawRecord<'a>>;
}
