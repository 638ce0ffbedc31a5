use bevy::prelude::*;

use crate::core::config::AppConfig;
use crate::core::settings::Settings;
use crate::interaction::events::{UiEvent, UiKey};

use super::edit::EditBuffer;
use super::layout::PanelLayout;

/// What the panel decided should happen. The routing layer applies these
/// against live resources; the controller itself never touches them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsAction {
    CommitRate(u32),
    ToggleSound,
    /// Live slider position while dragging; audible but not persisted.
    VolumePreview(f32),
    /// Drag released; persist the final position.
    VolumeCommit(f32),
    Close,
}

/// Pure settings-panel state machine. Consumes [`UiEvent`]s, returns
/// [`SettingsAction`]s, holds no Bevy handles, so the whole interaction
/// flow is testable without a window.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SettingsController {
    pub layout: PanelLayout,
    pub edit: EditBuffer,
    dragging_volume: bool,
}

impl SettingsController {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            layout: PanelLayout::for_window(width, height),
            edit: EditBuffer::default(),
            dragging_volume: false,
        }
    }

    pub fn is_dragging_volume(&self) -> bool {
        self.dragging_volume
    }

    /// Called when the panel opens: fresh layout, edit buffer showing the
    /// committed rate, no stale drag.
    pub fn open_for(&mut self, width: f32, height: f32, settings: &Settings) {
        self.layout = PanelLayout::for_window(width, height);
        self.edit.sync_committed(settings.units_per_day);
        self.edit.deactivate();
        self.dragging_volume = false;
    }

    /// Event routing while the panel is closed. Returns true when the
    /// settings button was hit and the panel should open.
    pub fn handle_closed_event(&mut self, event: &UiEvent) -> bool {
        match event {
            UiEvent::PointerDown { pos, .. } => self.layout.settings_button.contains(*pos),
            UiEvent::Resize { width, height, .. } => {
                self.layout = PanelLayout::for_window(*width, *height);
                false
            }
            _ => false,
        }
    }

    /// Event routing while the panel is open. Hit priority on press:
    /// close button, outside-panel, checkbox, slider, rate field.
    pub fn handle_open_event(&mut self, event: &UiEvent, settings: &Settings) -> Vec<SettingsAction> {
        let mut actions = Vec::new();
        match event {
            UiEvent::PointerDown { pos, .. } => {
                if self.layout.close_button.contains(*pos) || !self.layout.panel.contains(*pos) {
                    self.reset_transient();
                    actions.push(SettingsAction::Close);
                } else if self.layout.sound_checkbox.contains(*pos) {
                    self.edit.deactivate();
                    actions.push(SettingsAction::ToggleSound);
                } else if self.layout.volume_hit(*pos) {
                    self.edit.deactivate();
                    self.dragging_volume = true;
                    actions.push(SettingsAction::VolumePreview(self.layout.volume_at(pos.x)));
                } else if self.layout.rate_field.contains(*pos) {
                    self.edit.activate();
                } else {
                    self.edit.deactivate();
                }
            }
            UiEvent::PointerMove { pos, .. } => {
                if self.dragging_volume {
                    actions.push(SettingsAction::VolumePreview(self.layout.volume_at(pos.x)));
                }
            }
            UiEvent::PointerUp { pos, .. } => {
                if self.dragging_volume {
                    self.dragging_volume = false;
                    actions.push(SettingsAction::VolumeCommit(self.layout.volume_at(pos.x)));
                }
            }
            UiEvent::KeyPress { key, .. } => {
                if self.edit.is_active() {
                    if let UiKey::Enter = key {
                        match self.edit.parse() {
                            Some(v) => {
                                self.edit.sync_committed(v);
                                actions.push(SettingsAction::CommitRate(v));
                            }
                            // Invalid input reverts to the committed value.
                            None => self.edit.sync_committed(settings.units_per_day),
                        }
                        self.edit.deactivate();
                    } else {
                        self.edit.apply(*key);
                    }
                }
            }
            UiEvent::Resize { width, height, .. } => {
                self.layout = PanelLayout::for_window(*width, *height);
                // A drag interrupted by a resize is abandoned, not
                // committed; the previewed volume stays live in memory.
                self.dragging_volume = false;
            }
        }
        actions
    }

    fn reset_transient(&mut self) {
        self.edit.deactivate();
        self.dragging_volume = false;
    }
}

impl FromWorld for SettingsController {
    fn from_world(world: &mut World) -> Self {
        let (w, h) = world
            .get_resource::<AppConfig>()
            .map(|c| (c.window.width, c.window.height))
            .unwrap_or((800.0, 600.0));
        Self::new(w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec2;

    fn down(pos: Vec2) -> UiEvent {
        UiEvent::PointerDown { pos, at_ms: 0.0 }
    }
    fn key(key: UiKey) -> UiEvent {
        UiEvent::KeyPress { key, at_ms: 0.0 }
    }

    fn open_controller() -> (SettingsController, Settings) {
        let settings = Settings::default();
        let mut c = SettingsController::new(800.0, 600.0);
        c.open_for(800.0, 600.0, &settings);
        (c, settings)
    }

    #[test]
    fn settings_button_opens_only_on_hit() {
        let mut c = SettingsController::new(800.0, 600.0);
        assert!(c.handle_closed_event(&down(Vec2::new(755.0, 555.0))));
        assert!(!c.handle_closed_event(&down(Vec2::new(400.0, 300.0))));
        assert!(!c.handle_closed_event(&UiEvent::PointerUp {
            pos: Vec2::new(755.0, 555.0),
            at_ms: 0.0
        }));
    }

    #[test]
    fn close_button_and_outside_click_close() {
        let (mut c, s) = open_controller();
        let close = c.layout.close_button.center();
        assert_eq!(
            c.handle_open_event(&down(close), &s),
            vec![SettingsAction::Close]
        );
        let (mut c, s) = open_controller();
        assert_eq!(
            c.handle_open_event(&down(Vec2::new(5.0, 5.0)), &s),
            vec![SettingsAction::Close]
        );
    }

    #[test]
    fn checkbox_toggles_immediately() {
        let (mut c, s) = open_controller();
        let pos = c.layout.sound_checkbox.center();
        assert_eq!(
            c.handle_open_event(&down(pos), &s),
            vec![SettingsAction::ToggleSound]
        );
    }

    #[test]
    fn rate_edit_commits_on_enter() {
        let (mut c, mut s) = open_controller();
        s.units_per_day = 25_000;
        c.open_for(800.0, 600.0, &s);
        assert!(c
            .handle_open_event(&down(c.layout.rate_field.center()), &s)
            .is_empty());
        assert!(c.edit.is_active());
        for k in [
            UiKey::End,
            UiKey::Backspace,
            UiKey::Backspace,
            UiKey::Backspace,
            UiKey::Backspace,
            UiKey::Backspace,
            UiKey::Digit('1'),
            UiKey::Digit('0'),
            UiKey::Digit('0'),
        ] {
            assert!(c.handle_open_event(&key(k), &s).is_empty());
        }
        assert_eq!(
            c.handle_open_event(&key(UiKey::Enter), &s),
            vec![SettingsAction::CommitRate(100)]
        );
        assert!(!c.edit.is_active());
    }

    #[test]
    fn invalid_rate_reverts_without_action() {
        let (mut c, s) = open_controller();
        c.handle_open_event(&down(c.layout.rate_field.center()), &s);
        for k in [
            UiKey::End,
            UiKey::Backspace,
            UiKey::Backspace,
            UiKey::Backspace,
            UiKey::Backspace,
            UiKey::Backspace,
        ] {
            c.handle_open_event(&key(k), &s);
        }
        assert!(c.handle_open_event(&key(UiKey::Enter), &s).is_empty());
        assert_eq!(c.edit.text(), "25000");
    }

    #[test]
    fn keys_are_ignored_when_field_inactive() {
        let (mut c, s) = open_controller();
        assert!(c.handle_open_event(&key(UiKey::Digit('9')), &s).is_empty());
        assert_eq!(c.edit.text(), "25000");
    }

    #[test]
    fn volume_drag_previews_then_commits_on_release() {
        let (mut c, s) = open_controller();
        let track = c.layout.volume_track;
        let start = Vec2::new(track.min.x + 100.0, track.center().y);
        assert_eq!(
            c.handle_open_event(&down(start), &s),
            vec![SettingsAction::VolumePreview(0.5)]
        );
        assert!(c.is_dragging_volume());
        let mid = Vec2::new(track.min.x + 150.0, track.center().y);
        assert_eq!(
            c.handle_open_event(&UiEvent::PointerMove { pos: mid, at_ms: 1.0 }, &s),
            vec![SettingsAction::VolumePreview(0.75)]
        );
        let release = Vec2::new(track.max.x + 300.0, 0.0);
        assert_eq!(
            c.handle_open_event(&UiEvent::PointerUp { pos: release, at_ms: 2.0 }, &s),
            vec![SettingsAction::VolumeCommit(1.0)]
        );
        assert!(!c.is_dragging_volume());
    }

    #[test]
    fn moves_without_drag_do_nothing() {
        let (mut c, s) = open_controller();
        let inside = c.layout.volume_track.center();
        assert!(c
            .handle_open_event(&UiEvent::PointerMove { pos: inside, at_ms: 0.0 }, &s)
            .is_empty());
        assert!(c
            .handle_open_event(&UiEvent::PointerUp { pos: inside, at_ms: 0.0 }, &s)
            .is_empty());
    }

    #[test]
    fn resize_cancels_drag_without_commit() {
        let (mut c, s) = open_controller();
        let start = c.layout.volume_track.center();
        c.handle_open_event(&down(start), &s);
        assert!(c.is_dragging_volume());
        let actions = c.handle_open_event(
            &UiEvent::Resize {
                width: 1024.0,
                height: 768.0,
                at_ms: 1.0,
            },
            &s,
        );
        assert!(actions.is_empty());
        assert!(!c.is_dragging_volume());
        assert_eq!(c.layout, PanelLayout::for_window(1024.0, 768.0));
    }
}
