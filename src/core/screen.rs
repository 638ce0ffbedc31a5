use bevy::prelude::*;
use bevy::window::Window;

use super::config::AppConfig;
use super::system::system_order::UiTranslationSet;

/// Logical window size mirrored into a resource so simulation and layout
/// systems never query `Window` directly.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    pub width: f32,
    pub height: f32,
}

impl ScreenBounds {
    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }
    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }
}

impl FromWorld for ScreenBounds {
    fn from_world(world: &mut World) -> Self {
        let (width, height) = world
            .get_resource::<AppConfig>()
            .map(|c| (c.window.width, c.window.height))
            .unwrap_or((800.0, 600.0));
        Self { width, height }
    }
}

fn track_window_size(windows: Query<&Window>, mut bounds: ResMut<ScreenBounds>) {
    let Ok(window) = windows.single() else {
        return;
    };
    let (w, h) = (window.width(), window.height());
    if w != bounds.width || h != bounds.height {
        bounds.width = w;
        bounds.height = h;
    }
}

pub struct ScreenPlugin;
impl Plugin for ScreenPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenBounds>()
            .add_systems(Update, track_window_size.in_set(UiTranslationSet));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_default_to_config_window() {
        let mut world = World::new();
        world.insert_resource(AppConfig::default());
        let bounds = ScreenBounds::from_world(&mut world);
        assert_eq!(bounds.width, 800.0);
        assert_eq!(bounds.half_height(), 300.0);
    }
}
