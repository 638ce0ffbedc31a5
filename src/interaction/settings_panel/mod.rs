pub mod controller;
pub mod edit;
pub mod layout;
pub mod systems;

pub use controller::{SettingsAction, SettingsController};
pub use layout::PanelLayout;
pub use systems::SettingsPanelPlugin;
