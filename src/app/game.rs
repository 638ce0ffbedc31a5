use bevy::prelude::*;

use crate::audio::arrival::ArrivalAudioPlugin;
use crate::core::config::{AppConfig, ConfigLoadReport};
use crate::core::screen::ScreenPlugin;
use crate::core::settings::Settings;
use crate::core::system::system_order::{SimulationSet, UiRoutingSet, UiTranslationSet};
use crate::gameplay::fall::CoinFallPlugin;
use crate::gameplay::scheduler::CoinSpawnPlugin;
use crate::interaction::events::UiEventPlugin;
use crate::interaction::settings_panel::SettingsPanelPlugin;
use crate::rendering::assets::AssetLoadPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::overlay::OverlayPlugin;
use crate::rendering::scene::ScenePlugin;

use super::state::UiState;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<UiState>()
            .configure_sets(
                Update,
                (UiTranslationSet, UiRoutingSet, SimulationSet).chain(),
            )
            .add_plugins((
                ScreenPlugin,
                UiEventPlugin,
                SettingsPanelPlugin,
                CoinSpawnPlugin,
                CoinFallPlugin,
                AssetLoadPlugin,
                CameraPlugin,
                ScenePlugin,
                OverlayPlugin,
                ArrivalAudioPlugin,
            ))
            .add_systems(Startup, report_startup);
    }
}

/// Config loading happens before the log subscriber exists; replay the
/// outcome here so it lands in the log.
fn report_startup(
    report: Option<Res<ConfigLoadReport>>,
    config: Res<AppConfig>,
    settings: Res<Settings>,
) {
    if let Some(report) = report {
        for path in &report.used {
            info!("config layer applied: {path}");
        }
        for err in &report.errors {
            warn!("config layer skipped: {err}");
        }
    }
    for warning in config.validate() {
        warn!("config: {warning}");
    }
    info!(
        "running at {} units/day, sound {}, volume {:.0}%",
        settings.units_per_day,
        if settings.sound_enabled { "on" } else { "off" },
        settings.clamped_volume() * 100.0
    );
}
