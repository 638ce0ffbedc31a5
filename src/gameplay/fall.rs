use bevy::prelude::*;

use crate::core::components::{Coin, FallSpeed};
use crate::core::config::AppConfig;
use crate::core::screen::ScreenBounds;
use crate::core::system::system_order::SimulationSet;

use super::scheduler::spawn_coins;

/// Running total of coins that reached the bank this session.
#[derive(Resource, Debug, Default, Deref, Clone, Copy, PartialEq, Eq)]
pub struct ArrivalCounter(pub u64);

/// Fired once per coin, the frame it is absorbed by the bank.
#[derive(Event, Debug, Clone, Copy)]
pub struct CoinArrived;

fn advance_coins(time: Res<Time>, mut coins: Query<(&mut Transform, &FallSpeed), With<Coin>>) {
    let dt = time.delta_secs();
    for (mut transform, speed) in coins.iter_mut() {
        transform.translation.y -= **speed * dt;
    }
}

/// Despawn-and-count happens in one place so a coin can never be counted
/// twice or keep falling after it arrived.
fn collect_arrivals(
    mut commands: Commands,
    coins: Query<(Entity, &Transform), With<Coin>>,
    bounds: Res<ScreenBounds>,
    config: Res<AppConfig>,
    mut counter: ResMut<ArrivalCounter>,
    mut arrivals: EventWriter<CoinArrived>,
) {
    let bank_y = -bounds.half_height() + config.bank.bottom_margin;
    let threshold = bank_y + config.bank.arrival_margin;
    for (entity, transform) in coins.iter() {
        if transform.translation.y <= threshold {
            commands.entity(entity).despawn();
            counter.0 += 1;
            arrivals.write(CoinArrived);
        }
    }
}

pub struct CoinFallPlugin;
impl Plugin for CoinFallPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArrivalCounter>()
            .add_event::<CoinArrived>()
            .add_systems(
                Update,
                (advance_coins, collect_arrivals)
                    .chain()
                    .after(spawn_coins)
                    .in_set(SimulationSet),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero() {
        assert_eq!(*ArrivalCounter::default(), 0);
    }
}
