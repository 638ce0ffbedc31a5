use bevy::prelude::*;

use crate::core::components::Bank;
use crate::core::config::AppConfig;
use crate::core::screen::ScreenBounds;
use crate::gameplay::fall::ArrivalCounter;

use super::assets::{load_assets, GameAssets};

const BANK_SIZE: Vec2 = Vec2::new(150.0, 120.0);

#[derive(Component)]
struct CounterText;

#[derive(Component)]
struct SettingsButtonUi;

fn spawn_scene(
    mut commands: Commands,
    assets: Res<GameAssets>,
    bounds: Res<ScreenBounds>,
    config: Res<AppConfig>,
) {
    commands.spawn((
        Bank,
        Sprite {
            image: assets.bank.clone(),
            custom_size: Some(BANK_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, -bounds.half_height() + config.bank.bottom_margin, 0.0),
    ));

    commands.spawn((
        CounterText,
        Text::new("Yield: 0"),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            ..default()
        },
    ));

    // Anchored to the bottom-right corner so it follows window resizes;
    // hit-testing uses the same 50x50 box at (width-70, height-70).
    commands.spawn((
        SettingsButtonUi,
        ImageNode::new(assets.settings_icon.clone()),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(20.0),
            bottom: Val::Px(20.0),
            width: Val::Px(50.0),
            height: Val::Px(50.0),
            ..default()
        },
    ));
}

/// Keep the bank glued to the bottom edge when the window changes size.
fn sync_bank_position(
    bounds: Res<ScreenBounds>,
    config: Res<AppConfig>,
    mut banks: Query<&mut Transform, With<Bank>>,
) {
    if !bounds.is_changed() {
        return;
    }
    let y = -bounds.half_height() + config.bank.bottom_margin;
    for mut transform in banks.iter_mut() {
        transform.translation.y = y;
    }
}

fn update_counter_text(
    counter: Res<ArrivalCounter>,
    mut texts: Query<&mut Text, With<CounterText>>,
) {
    if !counter.is_changed() {
        return;
    }
    let Ok(mut text) = texts.single_mut() else {
        return;
    };
    let s = format!("Yield: {}", **counter);
    if text.as_str() != s {
        *text = Text::new(s);
    }
}

pub struct ScenePlugin;
impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_scene.after(load_assets))
            .add_systems(Update, (sync_bank_position, update_counter_text));
    }
}
