use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::core::system::system_order::UiTranslationSet;

/// Keys the settings panel cares about. Everything else is dropped at
/// translation time so routing never sees raw keyboard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiKey {
    Digit(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Enter,
}

/// Toolkit-independent input stream. Positions are window coordinates,
/// origin top-left, y down, logical pixels. Timestamps are milliseconds
/// since startup.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    PointerDown { pos: Vec2, at_ms: f64 },
    PointerMove { pos: Vec2, at_ms: f64 },
    PointerUp { pos: Vec2, at_ms: f64 },
    KeyPress { key: UiKey, at_ms: f64 },
    Resize { width: f32, height: f32, at_ms: f64 },
}

fn map_key(key: &Key) -> Option<UiKey> {
    match key {
        Key::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_digit() => Some(UiKey::Digit(c)),
                _ => None,
            }
        }
        Key::Enter => Some(UiKey::Enter),
        Key::Backspace => Some(UiKey::Backspace),
        Key::Delete => Some(UiKey::Delete),
        Key::ArrowLeft => Some(UiKey::Left),
        Key::ArrowRight => Some(UiKey::Right),
        Key::Home => Some(UiKey::Home),
        Key::End => Some(UiKey::End),
        _ => None,
    }
}

fn collect_ui_events(
    time: Res<Time>,
    mut cursor_moved: EventReader<CursorMoved>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut keys: EventReader<KeyboardInput>,
    mut resizes: EventReader<WindowResized>,
    mut last_cursor: Local<Vec2>,
    mut out: EventWriter<UiEvent>,
) {
    let at_ms = time.elapsed_secs_f64() * 1000.0;
    for ev in cursor_moved.read() {
        *last_cursor = ev.position;
        out.write(UiEvent::PointerMove {
            pos: ev.position,
            at_ms,
        });
    }
    // Button edges carry no position; the last seen cursor stands in.
    if buttons.just_pressed(MouseButton::Left) {
        out.write(UiEvent::PointerDown {
            pos: *last_cursor,
            at_ms,
        });
    }
    if buttons.just_released(MouseButton::Left) {
        out.write(UiEvent::PointerUp {
            pos: *last_cursor,
            at_ms,
        });
    }
    for ev in keys.read() {
        if ev.state != ButtonState::Pressed {
            continue;
        }
        if let Some(key) = map_key(&ev.logical_key) {
            out.write(UiEvent::KeyPress { key, at_ms });
        }
    }
    for ev in resizes.read() {
        out.write(UiEvent::Resize {
            width: ev.width,
            height: ev.height,
            at_ms,
        });
    }
}

pub struct UiEventPlugin;
impl Plugin for UiEventPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<UiEvent>()
            .add_systems(Update, collect_ui_events.in_set(UiTranslationSet));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_and_letters_drop() {
        assert_eq!(
            map_key(&Key::Character("7".into())),
            Some(UiKey::Digit('7'))
        );
        assert_eq!(map_key(&Key::Character("a".into())), None);
        assert_eq!(map_key(&Key::Character("12".into())), None);
    }

    #[test]
    fn editing_keys_map() {
        assert_eq!(map_key(&Key::Enter), Some(UiKey::Enter));
        assert_eq!(map_key(&Key::Backspace), Some(UiKey::Backspace));
        assert_eq!(map_key(&Key::ArrowLeft), Some(UiKey::Left));
        assert_eq!(map_key(&Key::Escape), None);
    }
}
