use bevy::audio::{GlobalVolume, PlaybackSettings, Volume};
use bevy::prelude::*;

use crate::core::settings::Settings;
use crate::gameplay::fall::CoinArrived;
use crate::rendering::assets::GameAssets;

/// One-shot per arrival. The entity despawns itself when playback ends.
fn play_arrival_sound(
    mut commands: Commands,
    mut arrivals: EventReader<CoinArrived>,
    settings: Res<Settings>,
    assets: Option<Res<GameAssets>>,
) {
    let count = arrivals.read().count();
    if count == 0 || !settings.sound_enabled {
        return;
    }
    let Some(assets) = assets else {
        return;
    };
    for _ in 0..count {
        commands.spawn((
            AudioPlayer::new(assets.arrival_sound.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}

fn sync_global_volume(settings: Res<Settings>, mut volume: ResMut<GlobalVolume>) {
    if settings.is_changed() {
        volume.volume = Volume::Linear(settings.clamped_volume());
    }
}

pub struct ArrivalAudioPlugin;
impl Plugin for ArrivalAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (play_arrival_sound, sync_global_volume));
    }
}
