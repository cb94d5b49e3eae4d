//! Integration test modules

pub mod file_loading_tests;
