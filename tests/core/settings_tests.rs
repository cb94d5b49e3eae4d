//! Tests for user settings defaults and parsing

use adasfps::parsers::Field;
use adasfps::settings::UserSettings;
use adasfps::state::DEFAULT_CHART_FIELDS;

#[test]
fn test_default_chart_fields_match_state() {
    let settings = UserSettings::default();
    assert_eq!(settings.chart_fields, DEFAULT_CHART_FIELDS.to_vec());
    assert_eq!(settings.chart_selection(), DEFAULT_CHART_FIELDS.to_vec());
}

#[test]
fn test_unknown_field_name_falls_back_to_defaults() {
    let settings = UserSettings::from_json(r#"{"chart_fields": ["PCW", "FPS"]}"#);
    assert_eq!(settings, UserSettings::default());
}

#[test]
fn test_pretty_json_roundtrip() {
    let settings = UserSettings {
        version: 1,
        chart_fields: vec![Field::Cdet, Field::Ro],
        show_table: false,
    };
    let json = serde_json::to_string_pretty(&settings).unwrap();
    assert_eq!(UserSettings::from_json(&json), settings);
}

#[test]
fn test_settings_path_is_json_file() {
    if let Some(path) = UserSettings::get_settings_path() {
        assert_eq!(path.file_name().unwrap(), "settings.json");
    }
}
