use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Coin Rain".into(),
        }
    }
}

/// Injected asset path table; load functions never hard-code paths.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AssetPaths {
    pub coin_image: String,
    pub bank_image: String,
    pub settings_icon: String,
    pub arrival_sound: String,
}
impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            coin_image: "textures/coin.png".into(),
            bank_image: "textures/piggy_bank.png".into(),
            settings_icon: "textures/gear.png".into(),
            arrival_sound: "sounds/cha_ching.ogg".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CoinConfig {
    /// Downward speed in px/s (wall-clock, not per-frame).
    pub fall_speed: f32,
    /// Rendered sprite edge length in px.
    pub size: f32,
    /// How far above the top window edge coins enter.
    pub spawn_offset: f32,
}
impl Default for CoinConfig {
    fn default() -> Self {
        Self {
            fall_speed: 240.0,
            size: 50.0,
            spawn_offset: 50.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BankConfig {
    /// Distance from the bottom window edge to the bank center.
    pub bottom_margin: f32,
    /// A coin this close above the bank center counts as arrived.
    pub arrival_margin: f32,
}
impl Default for BankConfig {
    fn default() -> Self {
        Self {
            bottom_margin: 100.0,
            arrival_margin: 65.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub assets: AssetPaths,
    pub coins: CoinConfig,
    pub bank: BankConfig,
    /// Where the persisted user settings record lives.
    pub settings_file: String,
}
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            assets: Default::default(),
            coins: Default::default(),
            bank: Default::default(),
            settings_file: "coin_rain_settings.json".into(),
        }
    }
}

/// Which config layers were applied and what went wrong, carried into the
/// app so startup can log it once the log subscriber exists.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigLoadReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
}

impl AppConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Merge RON layers in order; later paths override earlier ones per key.
    /// Missing or broken layers are reported, never fatal.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        fn overlay_onto(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(inc) = incoming.take() {
                                    overlay_onto(ev, inc);
                                }
                                break;
                            }
                        }
                        if let Some(inc) = incoming {
                            bm.insert(k, inc);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        for p in paths {
            let path = p.as_ref();
            match fs::read_to_string(path) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            overlay_onto(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path.display())),
            }
        }
        match merged {
            Some(val) => match val.into_rust::<AppConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    (AppConfig::default(), used, errors)
                }
            },
            None => (AppConfig::default(), used, errors),
        }
    }

    /// Sanity warnings only; the app always starts.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.coins.fall_speed <= 0.0 {
            w.push(format!(
                "coins.fall_speed {} not positive; coins will never reach the bank",
                self.coins.fall_speed
            ));
        }
        if self.coins.size <= 0.0 {
            w.push("coins.size must be > 0".into());
        }
        if self.coins.spawn_offset < 0.0 {
            w.push(format!(
                "coins.spawn_offset {} negative; coins spawn already on screen",
                self.coins.spawn_offset
            ));
        }
        if self.bank.arrival_margin < 0.0 {
            w.push("bank.arrival_margin negative; coins must pass below the bank center".into());
        }
        if self.bank.bottom_margin > self.window.height {
            w.push(format!(
                "bank.bottom_margin {} exceeds window height {}; bank sits off screen",
                self.bank.bottom_margin, self.window.height
            ));
        }
        for (label, path) in [
            ("assets.coin_image", &self.assets.coin_image),
            ("assets.bank_image", &self.assets.bank_image),
            ("assets.settings_icon", &self.assets.settings_icon),
            ("assets.arrival_sound", &self.assets.arrival_sound),
        ] {
            if path.is_empty() {
                w.push(format!("{label} is empty"));
            }
        }
        if self.settings_file.is_empty() {
            w.push("settings_file is empty; user settings will not persist".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_ron_falls_back_per_section() {
        let cfg: AppConfig = ron::from_str("(window: (width: 1024.0))").unwrap();
        assert_eq!(cfg.window.width, 1024.0);
        assert_eq!(cfg.window.height, 600.0);
        assert_eq!(cfg.coins.fall_speed, 240.0);
        assert_eq!(cfg.settings_file, "coin_rain_settings.json");
    }

    #[test]
    fn defaults_validate_clean() {
        assert!(AppConfig::default().validate().is_empty());
    }

    #[test]
    fn validate_flags_bad_motion_values() {
        let mut cfg = AppConfig::default();
        cfg.coins.fall_speed = 0.0;
        cfg.bank.bottom_margin = 10_000.0;
        let warnings = cfg.validate().join("\n");
        assert!(warnings.contains("fall_speed"));
        assert!(warnings.contains("bottom_margin"));
    }

    #[test]
    fn load_layered_missing_files_reports_and_defaults() {
        let (cfg, used, errors) =
            AppConfig::load_layered(["/nonexistent/a.ron", "/nonexistent/b.ron"]);
        assert_eq!(cfg, AppConfig::default());
        assert!(used.is_empty());
        assert_eq!(errors.len(), 2);
    }
}
