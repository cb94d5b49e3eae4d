//! User settings persistence.
//!
//! This module handles loading and saving user preferences across sessions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::parsers::Field;
use crate::state::DEFAULT_CHART_FIELDS;

/// User settings that persist across sessions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Fields drawn on the FPS chart
    #[serde(default = "default_chart_fields")]
    pub chart_fields: Vec<Field>,
    /// Whether reports include the per-record data table
    #[serde(default = "default_show_table")]
    pub show_table: bool,
}

fn default_version() -> u32 {
    1
}

fn default_chart_fields() -> Vec<Field> {
    DEFAULT_CHART_FIELDS.to_vec()
}

fn default_show_table() -> bool {
    true
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            chart_fields: default_chart_fields(),
            show_table: default_show_table(),
        }
    }
}

impl UserSettings {
    /// Get the config directory path for adasfps
    pub fn get_config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::data_dir().map(|p| p.join("AdasFps"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|p| p.join("AdasFps"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            dirs::config_dir().map(|p| p.join("adasfps"))
        }
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from disk
    pub fn load() -> Self {
        let path = match Self::get_settings_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_json(&content),
            Err(e) => {
                tracing::warn!("Failed to read settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse settings JSON, falling back to defaults when it is unusable
    pub fn from_json(content: &str) -> Self {
        serde_json::from_str(content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed settings file: {}", e);
            Self::default()
        })
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::get_settings_path()
            .ok_or_else(|| "Could not determine config directory".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write settings file: {}", e))?;

        Ok(())
    }

    /// Fields to chart, never empty
    pub fn chart_selection(&self) -> Vec<Field> {
        if self.chart_fields.is_empty() {
            default_chart_fields()
        } else {
            self.chart_fields.clone()
        }
    }
}
