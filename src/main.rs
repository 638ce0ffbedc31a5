use bevy::prelude::*;

use coin_rain::{AppConfig, ConfigLoadReport, GamePlugin, SettingsStore};

fn main() {
    // Base config plus an optional local override layer; defaults cover
    // anything missing or broken. Outcomes are logged once the app runs.
    let (config, used, errors) =
        AppConfig::load_layered(["assets/config/app.ron", "assets/config/app.local.ron"]);

    let store = SettingsStore::new(&config.settings_file);
    let settings = store.load();

    App::new()
        .insert_resource(config.clone())
        .insert_resource(ConfigLoadReport { used, errors })
        .insert_resource(store)
        .insert_resource(settings)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.window.title.clone(),
                resolution: (config.window.width, config.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .run();
}
