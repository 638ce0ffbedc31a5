use bevy::prelude::*;

/// Top-level screen state. Simulation keeps running in both states; only
/// input routing and the overlay UI differ.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum UiState {
    #[default]
    Main,
    SettingsOpen,
}
