use anyhow::Context;
use bevy::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

use super::settings::Settings;

/// Reads and writes the JSON settings record. Failures are logged, never
/// fatal; a broken or missing file yields defaults.
#[derive(Resource, Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Settings {
        match self.try_read() {
            Ok(s) => {
                info!("loaded settings from {}", self.path.display());
                s
            }
            Err(e) => {
                if self.path.exists() {
                    warn!("settings unreadable, using defaults: {e:#}");
                } else {
                    info!("no settings file at {}, using defaults", self.path.display());
                }
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) {
        if let Err(e) = self.try_write(settings) {
            warn!("failed to save settings: {e:#}");
        }
    }

    fn try_read(&self) -> anyhow::Result<Settings> {
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("parse {}", self.path.display()))
    }

    fn try_write(&self, settings: &Settings) -> anyhow::Result<()> {
        let data = serde_json::to_string_pretty(settings).context("serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("write {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let store = SettingsStore::new("/nonexistent/settings.json");
        assert_eq!(store.load(), Settings::default());
    }
}
