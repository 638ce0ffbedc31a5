use bevy::audio::AudioSource;
use bevy::prelude::*;

use crate::core::config::AppConfig;

/// Handles for everything the scene draws or plays. Paths come from the
/// config asset table, never from call sites.
#[derive(Resource, Debug, Clone)]
pub struct GameAssets {
    pub coin: Handle<Image>,
    pub bank: Handle<Image>,
    pub settings_icon: Handle<Image>,
    pub arrival_sound: Handle<AudioSource>,
}

pub fn load_assets(mut commands: Commands, config: Res<AppConfig>, asset_server: Res<AssetServer>) {
    commands.insert_resource(GameAssets {
        coin: asset_server.load(config.assets.coin_image.clone()),
        bank: asset_server.load(config.assets.bank_image.clone()),
        settings_icon: asset_server.load(config.assets.settings_icon.clone()),
        arrival_sound: asset_server.load(config.assets.arrival_sound.clone()),
    });
}

pub struct AssetLoadPlugin;
impl Plugin for AssetLoadPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_assets);
    }
}
