pub mod events;
pub mod settings_panel;
