pub mod app;
pub mod audio;
pub mod core;
pub mod gameplay;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::app::state::UiState;
pub use crate::core::config::{AppConfig, ConfigLoadReport};
pub use crate::core::settings::{Settings, SettingsStore};
