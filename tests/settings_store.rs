use coin_rain::{Settings, SettingsStore};

use std::fs;
use tempfile::tempdir;

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().expect("tempdir");
    let store = SettingsStore::new(dir.path().join("settings.json"));

    let mut settings = Settings::default();
    settings.units_per_day = 42;
    settings.sound_enabled = false;
    settings.volume = 0.8;
    store.save(&settings);

    assert_eq!(store.load(), settings);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let store = SettingsStore::new(dir.path().join("nope.json"));
    assert_eq!(store.load(), Settings::default());
}

#[test]
fn partial_file_keeps_present_fields_and_defaults_the_rest() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"unitsPerDay": 123, "soundEnabled": false}"#).expect("write");

    let settings = SettingsStore::new(&path).load();
    assert_eq!(settings.units_per_day, 123);
    assert!(!settings.sound_enabled);
    assert_eq!(settings.volume, 0.15, "missing volume falls back");
}

#[test]
fn malformed_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    fs::write(&path, "{not json at all").expect("write");

    assert_eq!(SettingsStore::new(&path).load(), Settings::default());
}

#[test]
fn file_on_disk_uses_camel_case_keys() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    SettingsStore::new(&path).save(&Settings::default());

    let raw = fs::read_to_string(&path).expect("read");
    assert!(raw.contains("unitsPerDay"));
    assert!(raw.contains("soundEnabled"));
    assert!(raw.contains("volume"));
}
