//! Log file acquisition.
//!
//! Reads a diagnostic log from disk and hands back decoded text. Archived logs
//! (`.gz`) are decompressed in memory; nothing is written back to disk.
//! Invalid UTF-8 sequences are replaced, never rejected.

use flate2::read::MultiGzDecoder;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::state::SUPPORTED_EXTENSIONS;

/// First two bytes of every gzip member
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Errors that can occur while acquiring log text
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file looked like a gzip archive but could not be inflated
    #[error("Failed to decompress {}: {source}", .path.display())]
    Decompress {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Check whether a path or its leading bytes indicate a gzip archive
pub fn is_gzip(path: &Path, bytes: &[u8]) -> bool {
    let gz_extension = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false);
    gz_extension || bytes.starts_with(&GZIP_MAGIC)
}

/// Inflate gzip data, following concatenated members
pub fn decompress_gzip(bytes: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = MultiGzDecoder::new(bytes);
    let mut out = Vec::with_capacity(bytes.len() * 4);
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

/// Decode log bytes as UTF-8, substituting invalid sequences
pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Whether the file extension is one the ADAS service writes logs with
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Read a log file, decompressing it first when it is a gzip archive
pub fn load_log_text(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    if !has_supported_extension(path) {
        tracing::debug!("Unrecognized extension on {}, reading as text", path.display());
    }
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if is_gzip(path, &bytes) {
        tracing::info!("Decompressing gzip log {}", path.display());
        let inflated = decompress_gzip(&bytes).map_err(|source| LoadError::Decompress {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(decode_text(&inflated));
    }

    tracing::info!("Loaded log {} ({} bytes)", path.display(), bytes.len());
    Ok(decode_text(&bytes))
}

/// Read log text from any reader (used for stdin)
pub fn read_log_text<R: Read>(mut reader: R) -> io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    if bytes.starts_with(&GZIP_MAGIC) {
        bytes = decompress_gzip(&bytes)?;
    }
    Ok(decode_text(&bytes))
}
