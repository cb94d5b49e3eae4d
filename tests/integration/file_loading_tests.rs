//! File loading integration tests
//!
//! Tests for acquiring log text from plain and gzip-compressed files and
//! running it through the engine.

use crate::common::samples::*;
use adasfps::analysis::MetricsEngine;
use adasfps::loader::{load_log_text, LoadError};
use adasfps::parsers::Field;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).expect("Should write fixture");
    path
}

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data).expect("Should compress");
    encoder.finish().expect("Should finish gzip stream")
}

// ============================================
// Plain Text Loading Tests
// ============================================

#[test]
fn test_load_plain_log_complete_cycle() {
    let dir = TempDir::new().unwrap();
    let log = noisy_log(&[SAMPLE_VALUES, SAMPLE_VALUES]);
    let path = write_file(&dir, "adas.log", log.as_bytes());

    let text = load_log_text(&path).expect("Should load");
    assert_eq!(text, log);

    let mut engine = MetricsEngine::new();
    let (summary, _) = engine.analyze_text(&text);
    assert_eq!(summary.accepted, 2);
}

#[test]
fn test_load_txt_with_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let mut bytes = vec![0xfe, 0xff, b'\n'];
    bytes.extend_from_slice(fps_block(SAMPLE_VALUES).as_bytes());
    let path = write_file(&dir, "adas.txt", &bytes);

    let text = load_log_text(&path).expect("Should load despite bad bytes");
    assert!(text.starts_with('\u{fffd}'));

    let mut engine = MetricsEngine::new();
    let (summary, _) = engine.analyze_text(&text);
    assert_eq!(summary.accepted, 1);
}

// ============================================
// Compressed Loading Tests
// ============================================

#[test]
fn test_load_gz_archive() {
    let dir = TempDir::new().unwrap();
    let log = noisy_log(&["1 2 3 4 5 6 7 8 9 10", "2 3 4 5 6 7 8 9 10 11"]);
    let path = write_file(&dir, "adas_20240101.gz", &gzip(log.as_bytes()));

    let text = load_log_text(&path).expect("Should decompress");
    assert_eq!(text, log);

    let mut engine = MetricsEngine::new();
    engine.analyze_text(&text);
    assert_eq!(engine.series().get(Field::Src), &[10.0, 11.0]);
}

#[test]
fn test_gzip_detected_by_magic_without_extension() {
    let dir = TempDir::new().unwrap();
    let log = fps_block(SAMPLE_VALUES);
    let path = write_file(&dir, "adas.log", &gzip(log.as_bytes()));

    assert_eq!(load_log_text(&path).expect("Should decompress"), log);
}

#[test]
fn test_corrupt_gz_is_decompress_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.gz", b"definitely not gzip");

    let err = load_log_text(&path).unwrap_err();
    assert!(matches!(err, LoadError::Decompress { .. }));
    assert!(err.to_string().contains("broken.gz"));
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = load_log_text(dir.path().join("missing.log")).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
}

#[test]
fn test_source_file_left_untouched() {
    let dir = TempDir::new().unwrap();
    let compressed = gzip(fps_block(SAMPLE_VALUES).as_bytes());
    let path = write_file(&dir, "adas.gz", &compressed);

    load_log_text(&path).expect("Should decompress");

    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1, "Loader must not write extracted files");
    assert_eq!(fs::read(&path).unwrap(), compressed);
}
