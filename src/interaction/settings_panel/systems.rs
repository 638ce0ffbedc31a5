use bevy::prelude::*;

use crate::app::state::UiState;
use crate::core::screen::ScreenBounds;
use crate::core::settings::{Settings, SettingsStore};
use crate::core::system::system_order::UiRoutingSet;
use crate::gameplay::scheduler::SpawnScheduler;
use crate::interaction::events::UiEvent;

use super::controller::{SettingsAction, SettingsController};

/// Single router over one event reader. Events that arrive in the same
/// frame as a state change are routed under the old state; the transition
/// lands next frame, after [`prepare_panel`] has refreshed the controller.
fn route_ui_events(
    state: Res<State<UiState>>,
    mut events: EventReader<UiEvent>,
    mut controller: ResMut<SettingsController>,
    mut settings: ResMut<Settings>,
    store: Res<SettingsStore>,
    mut scheduler: ResMut<SpawnScheduler>,
    mut next: ResMut<NextState<UiState>>,
) {
    for ev in events.read() {
        match *state.get() {
            UiState::Main => {
                if controller.handle_closed_event(ev) {
                    next.set(UiState::SettingsOpen);
                }
            }
            UiState::SettingsOpen => {
                for action in controller.handle_open_event(ev, &settings) {
                    apply_action(action, &mut settings, &store, &mut scheduler, &mut next);
                }
            }
        }
    }
}

fn prepare_panel(
    bounds: Res<ScreenBounds>,
    settings: Res<Settings>,
    mut controller: ResMut<SettingsController>,
) {
    controller.open_for(bounds.width, bounds.height, &settings);
}

fn apply_action(
    action: SettingsAction,
    settings: &mut Settings,
    store: &SettingsStore,
    scheduler: &mut SpawnScheduler,
    next: &mut NextState<UiState>,
) {
    match action {
        SettingsAction::CommitRate(units) => {
            settings.units_per_day = units;
            scheduler.set_rate(units);
            store.save(settings);
            info!("spawn rate set to {units} units/day");
        }
        SettingsAction::ToggleSound => {
            settings.sound_enabled = !settings.sound_enabled;
            store.save(settings);
        }
        SettingsAction::VolumePreview(volume) => {
            settings.volume = volume;
        }
        SettingsAction::VolumeCommit(volume) => {
            settings.volume = volume;
            store.save(settings);
        }
        SettingsAction::Close => next.set(UiState::Main),
    }
}

pub struct SettingsPanelPlugin;
impl Plugin for SettingsPanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<UiEvent>()
            .init_resource::<SettingsController>()
            .add_systems(OnEnter(UiState::SettingsOpen), prepare_panel)
            .add_systems(Update, route_ui_events.in_set(UiRoutingSet));
    }
}
