use bevy::prelude::*;

use crate::core::components::{Coin, FallSpeed};
use crate::core::config::AppConfig;
use crate::core::screen::ScreenBounds;
use crate::core::settings::Settings;
use crate::core::system::system_order::SimulationSet;
use crate::rendering::assets::GameAssets;

pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Milliseconds between spawns for a daily unit rate. A zero rate degrades
/// to one spawn per day instead of dividing by zero.
pub fn spawn_interval_ms(units_per_day: u32) -> f64 {
    if units_per_day == 0 {
        MS_PER_DAY
    } else {
        MS_PER_DAY / units_per_day as f64
    }
}

/// Fixed-interval spawn clock. Primed so the first coin drops immediately
/// after startup instead of waiting out a full interval.
///
/// After a spawn the clock restarts from the actual spawn instant rather
/// than the scheduled one, so a long stall produces a single coin, not a
/// burst of catch-up spawns.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SpawnScheduler {
    last_spawn_ms: f64,
    interval_ms: f64,
}

impl SpawnScheduler {
    pub fn primed(interval_ms: f64) -> Self {
        Self {
            last_spawn_ms: -interval_ms,
            interval_ms,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn set_rate(&mut self, units_per_day: u32) {
        self.interval_ms = spawn_interval_ms(units_per_day);
    }

    pub fn should_spawn(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_spawn_ms >= self.interval_ms {
            self.last_spawn_ms = now_ms;
            true
        } else {
            false
        }
    }
}

impl FromWorld for SpawnScheduler {
    fn from_world(world: &mut World) -> Self {
        let units = world
            .get_resource::<Settings>()
            .map(|s| s.units_per_day)
            .unwrap_or_else(|| Settings::default().units_per_day);
        Self::primed(spawn_interval_ms(units))
    }
}

fn sync_spawn_interval(settings: Res<Settings>, mut scheduler: ResMut<SpawnScheduler>) {
    if settings.is_changed() {
        let interval = spawn_interval_ms(settings.units_per_day);
        if interval != scheduler.interval_ms {
            scheduler.set_rate(settings.units_per_day);
        }
    }
}

pub fn spawn_coins(
    mut commands: Commands,
    time: Res<Time>,
    mut scheduler: ResMut<SpawnScheduler>,
    bounds: Res<ScreenBounds>,
    config: Res<AppConfig>,
    assets: Option<Res<GameAssets>>,
) {
    let now_ms = time.elapsed_secs_f64() * 1000.0;
    if !scheduler.should_spawn(now_ms) {
        return;
    }
    let spawn_y = bounds.half_height() + config.coins.spawn_offset;
    let mut coin = commands.spawn((
        Coin,
        FallSpeed(config.coins.fall_speed),
        Transform::from_xyz(0.0, spawn_y, 0.0),
    ));
    // Headless runs (tests) have no asset server; coins stay invisible there.
    if let Some(assets) = &assets {
        coin.insert(Sprite {
            image: assets.coin.clone(),
            custom_size: Some(Vec2::splat(config.coins.size)),
            ..default()
        });
    }
}

pub struct CoinSpawnPlugin;
impl Plugin for CoinSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnScheduler>().add_systems(
            Update,
            (sync_spawn_interval, spawn_coins)
                .chain()
                .in_set(SimulationSet),
        );
    }
}
