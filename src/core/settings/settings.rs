use bevy::prelude::*;
use serde::{Deserialize, Serialize};

fn default_units_per_day() -> u32 {
    25_000
}
fn default_sound_enabled() -> bool {
    true
}
fn default_volume() -> f32 {
    0.15
}

/// User-tunable state persisted between runs. Each field falls back to its
/// default independently so an older settings file keeps working after new
/// fields appear.
#[derive(Debug, Serialize, Deserialize, Resource, Clone, PartialEq)]
pub struct Settings {
    #[serde(rename = "unitsPerDay", default = "default_units_per_day")]
    pub units_per_day: u32,
    #[serde(rename = "soundEnabled", default = "default_sound_enabled")]
    pub sound_enabled: bool,
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            units_per_day: default_units_per_day(),
            sound_enabled: default_sound_enabled(),
            volume: default_volume(),
        }
    }
}

impl Settings {
    /// Volume clamped to the playable range for the audio backend.
    pub fn clamped_volume(&self) -> f32 {
        self.volume.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_individually() {
        let s: Settings = serde_json::from_str(r#"{"unitsPerDay": 500}"#).unwrap();
        assert_eq!(s.units_per_day, 500);
        assert!(s.sound_enabled);
        assert_eq!(s.volume, 0.15);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let s: Settings =
            serde_json::from_str(r#"{"volume": 0.5, "legacyField": "whatever"}"#).unwrap();
        assert_eq!(s.volume, 0.5);
        assert_eq!(s.units_per_day, 25_000);
    }

    #[test]
    fn round_trip_uses_camel_case_keys() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("unitsPerDay"));
        assert!(json.contains("soundEnabled"));
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Settings::default());
    }

    #[test]
    fn volume_clamps_out_of_range_values() {
        let mut s = Settings::default();
        s.volume = 1.7;
        assert_eq!(s.clamped_volume(), 1.0);
        s.volume = -0.2;
        assert_eq!(s.clamped_volume(), 0.0);
    }
}
