pub mod fps_info;
pub mod types;

pub use fps_info::{Extraction, FpsInfoExtractor, FPS_INFO_BANNER, FPS_INFO_MARKER};
pub use types::{Field, MatchStrategy, RawRecord, RecordExtractor, FIELD_COUNT};
